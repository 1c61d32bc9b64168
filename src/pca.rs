//! 解析過程中累積的省、市、區結果

use crate::data::is_municipality;
use crate::region::{Level, ParseRecord, Positions};

/// 省市區累積結果
///
/// 每個欄位先寫先贏：已設定的欄位不會被覆寫。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pca {
    pub province: Option<String>,
    pub city: Option<String>,
    pub area: Option<String>,
    pub province_pos: Option<usize>,
    pub city_pos: Option<usize>,
    pub area_pos: Option<usize>,
}

impl Pca {
    /// 寫入省，回傳是否實際寫入
    pub fn set_province(&mut self, value: &str, pos: usize) -> bool {
        if self.province.is_some() {
            return false;
        }
        self.province = Some(value.to_string());
        self.province_pos = Some(pos);
        true
    }

    /// 寫入縣市，回傳是否實際寫入
    ///
    /// 直轄市本身即為省級單位，寫入時一併設定省的位置。
    pub fn set_city(&mut self, value: &str, pos: usize) -> bool {
        if self.city.is_some() {
            return false;
        }
        self.city = Some(value.to_string());
        self.city_pos = Some(pos);
        if is_municipality(value) {
            self.province_pos = Some(pos);
        }
        true
    }

    /// 寫入鄉鎮市區，回傳是否實際寫入
    pub fn set_area(&mut self, value: &str, pos: usize) -> bool {
        if self.area.is_some() {
            return false;
        }
        self.area = Some(value.to_string());
        self.area_pos = Some(pos);
        true
    }

    pub fn set(&mut self, level: Level, value: &str, pos: usize) -> bool {
        match level {
            Level::Province => self.set_province(value, pos),
            Level::City => self.set_city(value, pos),
            Level::Area => self.set_area(value, pos),
        }
    }

    pub fn positions(&self) -> Positions {
        Positions {
            province: self.province_pos,
            city: self.city_pos,
            area: self.area_pos,
        }
    }

    /// 轉為輸出記錄
    pub fn into_record(self, address: impl Into<String>, position_sensitive: bool) -> ParseRecord {
        let positions = position_sensitive.then(|| self.positions());
        ParseRecord {
            province: self.province,
            city: self.city,
            area: self.area,
            address: address.into(),
            positions,
        }
    }
}
