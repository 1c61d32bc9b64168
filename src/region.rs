//! 行政區劃資料結構

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 行政區劃層級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Level {
    /// 省、直轄市
    Province,
    /// 縣、省轄市
    City,
    /// 鄉鎮市區
    Area,
}

/// 行政區劃記錄（一列參照資料）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceRecord {
    /// 省或直轄市
    pub province: String,
    /// 縣或市
    pub city: String,
    /// 鄉鎮市區
    pub area: String,
}

impl ReferenceRecord {
    /// 建立新的行政區劃記錄
    pub fn new(
        province: impl Into<String>,
        city: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            city: city.into(),
            area: area.into(),
        }
    }

    /// 取得指定層級的名稱
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Province => &self.province,
            Level::City => &self.city,
            Level::Area => &self.area,
        }
    }
}

/// 各層級在原始地址中的字元位置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Positions {
    pub province: Option<usize>,
    pub city: Option<usize>,
    pub area: Option<usize>,
}

impl Positions {
    /// 以 -1 表示未設定的位置
    pub fn to_signed(&self) -> [i64; 3] {
        let signed = |pos: Option<usize>| pos.map_or(-1, |p| p as i64);
        [signed(self.province), signed(self.city), signed(self.area)]
    }
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseRecord {
    /// 省或直轄市
    pub province: Option<String>,
    /// 縣或市
    pub city: Option<String>,
    /// 鄉鎮市區
    pub area: Option<String>,
    /// 剩餘地址
    pub address: String,
    /// 位置資訊，僅在位置敏感模式下存在
    pub positions: Option<Positions>,
}

static COLUMNS: [&str; 7] = ["省", "市", "區", "地址", "省_pos", "市_pos", "區_pos"];

impl ParseRecord {
    /// 建立空的解析結果
    pub fn empty(position_sensitive: bool) -> Self {
        Self {
            positions: position_sensitive.then(Positions::default),
            ..Self::default()
        }
    }

    /// 表格輸出的欄位名稱
    pub fn columns(position_sensitive: bool) -> &'static [&'static str] {
        if position_sensitive {
            &COLUMNS
        } else {
            &COLUMNS[..4]
        }
    }

    /// 依 [`ParseRecord::columns`] 的順序輸出一列
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.province.clone().unwrap_or_default(),
            self.city.clone().unwrap_or_default(),
            self.area.clone().unwrap_or_default(),
            self.address.clone(),
        ];
        if let Some(positions) = &self.positions {
            row.extend(positions.to_signed().iter().map(i64::to_string));
        }
        row
    }
}
