//! # TWPCA - Taiwan Province City Area Parser
//!
//! 臺灣地址縣市鄉鎮區解析庫，從地址字串中擷取省（直轄市）、縣市、鄉鎮市區，
//! 並回傳未消耗的剩餘地址。
//!
//! ## 功能特性
//!
//! - 自帶前瞻比對，不依賴分詞器；也可注入分詞器（`jieba` feature）
//! - 支援簡稱（如 "臺北" -> "臺北市"、"臺灣" -> "臺灣省"）
//! - 直轄市特殊處理
//! - 依關聯唯一性回填縣市與省，同名區無法判定時不猜測
//! - 內嵌全臺 22 縣市、368 鄉鎮市區資料
//!
//! ## 快速開始
//!
//! ```rust
//! use twpca::{AddressParser, ParseOptions};
//!
//! let parser = AddressParser::new();
//!
//! let result = parser.parse("臺北市中正區重慶南路一段122號");
//! assert_eq!(result.province.as_deref(), Some("臺北市"));
//! assert_eq!(result.city.as_deref(), Some("臺北市"));
//! assert_eq!(result.area.as_deref(), Some("中正區"));
//! assert_eq!(result.address, "重慶南路一段122號");
//!
//! // 只有區名時依唯一性回填
//! let result = parser.parse("鳳山區光遠路");
//! assert_eq!(result.city.as_deref(), Some("高雄市"));
//!
//! // 位置敏感模式
//! let parser = parser.with_options(ParseOptions::new().position_sensitive(true));
//! let result = parser.parse("新竹縣竹北市");
//! assert_eq!(result.positions.map(|p| p.to_signed()), Some([-1, 0, 3]));
//! ```

mod backfill;
mod data;
mod error;
mod index;
mod matcher;
mod parser;
mod pca;
mod region;
mod tokenizer;

pub use backfill::{backfill, fill_city, fill_province};
pub use data::{is_municipality, load_records, parse_records, FILTER_CHARS, MUNICIPALITIES};
pub use error::DataError;
pub use index::{ReferenceIndex, RelationalMap};
pub use matcher::{Extraction, Lookahead};
pub use parser::{AddressParser, ParseOptions};
pub use pca::Pca;
pub use region::{Level, ParseRecord, Positions, ReferenceRecord};
pub use tokenizer::{Segmented, Tokenizer};

/// 便捷函數：使用全域解析器解析地址
///
/// ```rust
/// let result = twpca::parse("新北市板橋區");
/// assert_eq!(result.province.as_deref(), Some("新北市"));
/// ```
pub fn parse(address: &str) -> ParseRecord {
    AddressParser::global().parse(address)
}

/// 便捷函數：以指定選項批次解析
///
/// ```rust
/// use twpca::ParseOptions;
///
/// let rows = twpca::transform(vec![Some("澎湖縣馬公市"), None], ParseOptions::default());
/// assert_eq!(rows[0].city.as_deref(), Some("澎湖縣"));
/// assert!(rows[1].city.is_none());
/// ```
pub fn transform<'a, I, A>(addresses: I, options: ParseOptions) -> Vec<ParseRecord>
where
    I: IntoIterator<Item = A>,
    A: Into<Option<&'a str>>,
{
    AddressParser::global()
        .clone()
        .with_options(options)
        .transform(addresses)
}
