//! 錯誤類型定義

use thiserror::Error;

/// 參照資料載入錯誤
///
/// 只有建立索引時會失敗，逐筆地址解析永遠不回傳錯誤。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    /// 資料表為空（連表頭都沒有）
    #[error("reference table is empty")]
    Empty,

    /// 表頭缺少必要欄位
    #[error("reference table header has no `{0}` column")]
    MissingColumn(&'static str),

    /// 資料列缺少必要欄位
    #[error("line {line}: missing `{field}` field")]
    MissingField { line: usize, field: &'static str },
}
