//! 縣市鄉鎮區資料載入

use crate::error::DataError;
use crate::region::ReferenceRecord;

/// 內嵌的行政區劃資料（編譯時包含）
const PCR_DATA: &str = include_str!("../data/pcr.csv");

/// 直轄市列表，本身即為省級單位
pub const MUNICIPALITIES: [&str; 6] = ["臺北市", "新北市", "桃園市", "臺中市", "臺南市", "高雄市"];

/// 緊接在候選詞之後時，表示候選詞只是較長地名（路、街、村里）的前綴
pub const FILTER_CHARS: [char; 5] = ['路', '街', '村', '里', '鄰'];

/// 是否為直轄市
pub fn is_municipality(name: &str) -> bool {
    MUNICIPALITIES.contains(&name)
}

/// 各欄位可接受的表頭名稱
const COLUMN_NAMES: [(&str, &str); 3] = [("sheng", "province"), ("shi", "city"), ("qu", "area")];

fn column_index(header: &[&str], names: (&'static str, &'static str)) -> Result<usize, DataError> {
    header
        .iter()
        .position(|h| *h == names.0 || *h == names.1)
        .ok_or(DataError::MissingColumn(names.0))
}

/// 解析 CSV 格式的參照資料
///
/// 第一個非空行為表頭，依名稱定位 `sheng`、`shi`、`qu` 三欄。
/// 任何一列缺少欄位都視為錯誤，不會略過。
pub fn parse_records(text: &str) -> Result<Vec<ReferenceRecord>, DataError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(DataError::Empty)?;
    let header: Vec<&str> = header.trim_start_matches('\u{feff}').split(',').map(str::trim).collect();
    let mut columns = [0; 3];
    for (slot, names) in columns.iter_mut().zip(COLUMN_NAMES) {
        *slot = column_index(&header, names)?;
    }

    let mut records = Vec::new();
    for (line, row) in lines {
        let parts: Vec<&str> = row.split(',').map(str::trim).collect();
        let mut fields = [""; 3];
        for ((field, &col), names) in fields.iter_mut().zip(&columns).zip(COLUMN_NAMES) {
            *field = match parts.get(col) {
                Some(&value) if !value.is_empty() => value,
                _ => return Err(DataError::MissingField { line, field: names.0 }),
            };
        }
        records.push(ReferenceRecord::new(fields[0], fields[1], fields[2]));
    }

    Ok(records)
}

/// 載入內嵌的參照資料
pub fn load_records() -> Result<Vec<ReferenceRecord>, DataError> {
    parse_records(PCR_DATA)
}
