//! 分詞驅動的比對引擎
//!
//! 候選詞由外部分詞器提供，只比對縣市與省，不比對鄉鎮市區。

use crate::index::ReferenceIndex;
use crate::matcher::{commit, Extraction};
use crate::pca::Pca;
use crate::region::Level;

/// 分詞器：將文字切成由左至右的詞序列
///
/// 詞不必完整覆蓋原文，但必須依序排列，位置以各詞的字元數累加計算。
pub trait Tokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for std::sync::Arc<T> {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).tokenize(text)
    }
}

/// jieba 分詞（啟用 HMM）
#[cfg(feature = "jieba")]
impl Tokenizer for jieba_rs::Jieba {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.cut(text, true)
    }
}

/// 以分詞結果比對的引擎
pub struct Segmented<'i, T: ?Sized> {
    index: &'i ReferenceIndex,
    tokenizer: &'i T,
}

impl<'i, T: Tokenizer + ?Sized> Segmented<'i, T> {
    pub fn new(index: &'i ReferenceIndex, tokenizer: &'i T) -> Self {
        Self { index, tokenizer }
    }

    pub fn extract<'a>(&self, address: &'a str) -> Extraction<'a> {
        let mut pca = Pca::default();
        let mut truncate = 0;
        let mut pos = 0;

        for word in self.tokenizer.tokenize(address) {
            let len = word.chars().count();
            if let Some((level, value)) = self.lookup(word) {
                commit(&mut pca, &mut truncate, level, value, pos, len);
            }
            pos += len;
        }

        Extraction::new(pca, address, truncate)
    }

    // 不查鄉鎮市區索引
    fn lookup(&self, word: &str) -> Option<(Level, &'i str)> {
        if let Some(city) = self.index.cities().full_name(word) {
            Some((Level::City, city))
        } else {
            self.index
                .province_full_name(word)
                .map(|province| (Level::Province, province))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_records;

    /// 依固定字元數切分
    struct Widths(Vec<usize>);

    impl Tokenizer for Widths {
        fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
            let mut tokens = Vec::new();
            let mut rest = text;
            for &width in &self.0 {
                if rest.is_empty() {
                    break;
                }
                let split = rest
                    .char_indices()
                    .nth(width)
                    .map_or(rest.len(), |(byte, _)| byte);
                let (token, tail) = rest.split_at(split);
                tokens.push(token);
                rest = tail;
            }
            if !rest.is_empty() {
                tokens.push(rest);
            }
            tokens
        }
    }

    fn index() -> ReferenceIndex {
        ReferenceIndex::build(load_records().unwrap())
    }

    #[test]
    fn test_areas_are_not_matched() {
        let index = index();
        let tokenizer = Widths(vec![3, 3]);
        let result = Segmented::new(&index, &tokenizer).extract("臺北市中正區重慶南路");

        assert_eq!(result.pca.city.as_deref(), Some("臺北市"));
        assert_eq!(result.pca.province_pos, Some(0));
        assert_eq!(result.pca.area, None);
        assert_eq!(result.truncate, 3);
        assert_eq!(result.leftover, "中正區重慶南路");
    }

    #[test]
    fn test_province_then_city() {
        let index = index();
        let tokenizer = Widths(vec![3, 3, 3]);
        let result = Segmented::new(&index, &tokenizer).extract("臺灣省新竹縣竹北市");

        assert_eq!(result.pca.province.as_deref(), Some("臺灣省"));
        assert_eq!(result.pca.city.as_deref(), Some("新竹縣"));
        assert_eq!(result.pca.city_pos, Some(3));
        assert_eq!(result.leftover, "竹北市");
    }

    #[test]
    fn test_city_alias_token() {
        let index = index();
        let tokenizer = Widths(vec![2, 3]);
        let result = Segmented::new(&index, &tokenizer).extract("高雄鳳山區");

        // 「高雄」在縣市索引中優先於省索引
        assert_eq!(result.pca.city.as_deref(), Some("高雄市"));
        assert_eq!(result.pca.province, None);
        assert_eq!(result.leftover, "鳳山區");
    }

    #[test]
    fn test_unsplit_token_matches_nothing() {
        let index = index();
        let tokenizer = Widths(vec![]);
        let result = Segmented::new(&index, &tokenizer).extract("臺北市中正區");
        assert_eq!(result.pca, Pca::default());
        assert_eq!(result.leftover, "臺北市中正區");
    }

    #[cfg(feature = "jieba")]
    #[test]
    fn test_jieba_tokens_cover_address() {
        let index = index();
        let jieba = jieba_rs::Jieba::new();
        let address = "臺北市中正區重慶南路一段122號";
        let result = Segmented::new(&index, &jieba).extract(address);

        let prefix: String = address.chars().take(result.truncate).collect();
        assert_eq!(format!("{}{}", prefix, result.leftover), address);
    }
}
