//! 地址解析器核心實作

use crate::backfill::backfill;
use crate::data::load_records;
use crate::error::DataError;
use crate::index::ReferenceIndex;
use crate::matcher::{Extraction, Lookahead};
use crate::region::{ParseRecord, ReferenceRecord};
use crate::tokenizer::{Segmented, Tokenizer};
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// 以內嵌資料建立的共用索引
static BUNDLED_INDEX: Lazy<Arc<ReferenceIndex>> = Lazy::new(|| {
    // 內嵌資料由 data::tests::test_load_records 驗證，這裡失敗即為建置錯誤
    let records = load_records().expect("bundled pcr.csv is well-formed");
    Arc::new(ReferenceIndex::build(records))
});

/// 全域解析器實例
static GLOBAL_PARSER: Lazy<AddressParser> = Lazy::new(AddressParser::new);

/// 解析選項
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// 使用注入的分詞器比對（未注入分詞器時退回前瞻比對）
    pub use_segmenter: bool,
    /// 輸出各層級的字元位置
    pub position_sensitive: bool,
    /// 前瞻視窗；`None` 表示使用索引中最長鍵的長度
    pub lookahead: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_segmenter(mut self, yes: bool) -> Self {
        self.use_segmenter = yes;
        self
    }

    pub fn position_sensitive(mut self, yes: bool) -> Self {
        self.position_sensitive = yes;
        self
    }

    pub fn lookahead(mut self, window: usize) -> Self {
        self.lookahead = Some(window);
        self
    }
}

type SharedTokenizer = Arc<dyn Tokenizer + Send + Sync>;

/// 地址解析器
///
/// 持有唯讀的共用索引；每次解析只使用區域狀態，可在多執行緒間並行呼叫。
#[derive(Clone)]
pub struct AddressParser {
    index: Arc<ReferenceIndex>,
    options: ParseOptions,
    tokenizer: Option<SharedTokenizer>,
}

impl fmt::Debug for AddressParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressParser")
            .field("records", &self.index.record_count())
            .field("options", &self.options)
            .field("tokenizer", &self.tokenizer.is_some())
            .finish()
    }
}

impl AddressParser {
    /// 使用內嵌資料建立解析器
    pub fn new() -> Self {
        Self::from_index(Arc::clone(&BUNDLED_INDEX))
    }

    /// 使用既有的索引建立解析器
    pub fn from_index(index: Arc<ReferenceIndex>) -> Self {
        Self {
            index,
            options: ParseOptions::default(),
            tokenizer: None,
        }
    }

    /// 從自訂的參照資料建立解析器
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ReferenceRecord>,
    {
        Self::from_index(Arc::new(ReferenceIndex::build(records)))
    }

    /// 從 CSV 文字建立解析器
    pub fn from_csv(text: &str) -> Result<Self, DataError> {
        ReferenceIndex::from_csv(text).map(|index| Self::from_index(Arc::new(index)))
    }

    /// 取得全域解析器實例
    pub fn global() -> &'static AddressParser {
        &GLOBAL_PARSER
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// 注入分詞器，`use_segmenter` 開啟時使用
    pub fn with_tokenizer<T>(mut self, tokenizer: T) -> Self
    where
        T: Tokenizer + Send + Sync + 'static,
    {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    /// 解析地址字串
    ///
    /// # 示例
    /// ```rust
    /// use twpca::AddressParser;
    ///
    /// let parser = AddressParser::new();
    /// let result = parser.parse("新北市板橋區文化路一段188號");
    /// assert_eq!(result.province.as_deref(), Some("新北市"));
    /// assert_eq!(result.area.as_deref(), Some("板橋區"));
    /// assert_eq!(result.address, "文化路一段188號");
    /// ```
    pub fn parse(&self, address: &str) -> ParseRecord {
        if address.is_empty() {
            return ParseRecord::empty(self.options.position_sensitive);
        }

        let Extraction {
            mut pca, leftover, ..
        } = self.extract(address);
        backfill(&mut pca, &self.index);

        pca.into_record(leftover, self.options.position_sensitive)
    }

    /// 解析可能缺值的地址；缺值視同空字串
    pub fn parse_opt(&self, address: Option<&str>) -> ParseRecord {
        self.parse(address.unwrap_or_default())
    }

    /// 批次解析，輸出順序與輸入相同
    pub fn transform<'a, I, A>(&self, addresses: I) -> Vec<ParseRecord>
    where
        I: IntoIterator<Item = A>,
        A: Into<Option<&'a str>>,
    {
        addresses
            .into_iter()
            .map(|address| self.parse_opt(address.into()))
            .collect()
    }

    /// 只執行比對，不回填
    pub fn extract<'a>(&self, address: &'a str) -> Extraction<'a> {
        match &self.tokenizer {
            Some(tokenizer) if self.options.use_segmenter => {
                Segmented::new(&self.index, &**tokenizer).extract(address)
            }
            _ => {
                let window = self
                    .options
                    .lookahead
                    .unwrap_or_else(|| self.index.max_key_len());
                Lookahead::new(&self.index, window).extract(address)
            }
        }
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}
