//! 前瞻比對引擎
//!
//! 由左至右掃描地址，在每個位置嘗試長度 1..=視窗 的候選詞，
//! 整輪嘗試完畢後才提交最後一個命中的候選詞。

use crate::data::FILTER_CHARS;
use crate::index::ReferenceIndex;
use crate::pca::Pca;
use crate::region::Level;
use tracing::trace;

/// 一次比對的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub pca: Pca,
    /// 已消耗前綴的字元數
    pub truncate: usize,
    /// 未消耗的剩餘地址
    pub leftover: &'a str,
}

impl<'a> Extraction<'a> {
    pub(crate) fn new(pca: Pca, address: &'a str, truncate: usize) -> Self {
        let leftover = address
            .char_indices()
            .nth(truncate)
            .map_or("", |(byte, _)| &address[byte..]);
        Self {
            pca,
            truncate,
            leftover,
        }
    }
}

/// 待提交的命中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Match<'i> {
    level: Level,
    value: &'i str,
    start: usize,
    /// 命中詞的字元數
    len: usize,
}

/// 提交命中；只有從目前截斷點開始的命中才會推進截斷點
pub(crate) fn commit(pca: &mut Pca, truncate: &mut usize, level: Level, value: &str, start: usize, len: usize) {
    if pca.set(level, value, start) {
        trace!(?level, value, start, "committed match");
        if start == *truncate {
            *truncate += len;
        }
    }
}

/// 自帶候選詞產生的比對引擎
#[derive(Debug, Clone, Copy)]
pub struct Lookahead<'i> {
    index: &'i ReferenceIndex,
    window: usize,
}

impl<'i> Lookahead<'i> {
    /// `window` 為候選詞的最大字元數
    pub fn new(index: &'i ReferenceIndex, window: usize) -> Self {
        Self { index, window }
    }

    pub fn extract<'a>(&self, address: &'a str) -> Extraction<'a> {
        let chars: Vec<char> = address.chars().collect();
        let mut pca = Pca::default();
        let mut truncate = 0;
        let mut word = String::new();
        let mut i = 0;

        while i < chars.len() {
            match self.scan_at(&chars, i, &mut word) {
                Some(m) => {
                    commit(&mut pca, &mut truncate, m.level, m.value, m.start, m.len);
                    i += m.len;
                }
                None => i += 1,
            }
        }

        Extraction::new(pca, address, truncate)
    }

    /// 在 `start` 嘗試所有長度，較長的命中取代較短的命中
    fn scan_at(&self, chars: &[char], start: usize, word: &mut String) -> Option<Match<'i>> {
        let mut pending = None;
        word.clear();

        for len in 1..=self.window {
            let end = start + len;
            if end > chars.len() {
                break;
            }
            word.push(chars[end - 1]);

            if chars.get(end).is_some_and(|next| FILTER_CHARS.contains(next)) {
                continue;
            }
            if let Some((level, value)) = self.index.resolve(word.as_str()) {
                pending = Some(Match {
                    level,
                    value,
                    start,
                    len,
                });
            }
        }

        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_records;
    use crate::region::ReferenceRecord;

    fn index() -> ReferenceIndex {
        ReferenceIndex::build(load_records().unwrap())
    }

    fn extract<'a>(index: &ReferenceIndex, address: &'a str) -> Extraction<'a> {
        Lookahead::new(index, index.max_key_len()).extract(address)
    }

    #[test]
    fn test_municipality_and_area() {
        let index = index();
        let result = extract(&index, "臺北市中正區重慶南路一段122號");

        assert_eq!(result.pca.city.as_deref(), Some("臺北市"));
        assert_eq!(result.pca.area.as_deref(), Some("中正區"));
        // 直轄市只設定省的位置，省名留待回填
        assert_eq!(result.pca.province, None);
        assert_eq!(result.pca.province_pos, Some(0));
        assert_eq!(result.pca.city_pos, Some(0));
        assert_eq!(result.pca.area_pos, Some(3));
        assert_eq!(result.truncate, 6);
        assert_eq!(result.leftover, "重慶南路一段122號");
    }

    #[test]
    fn test_longest_candidate_wins() {
        let index = index();
        // 「新竹」是新竹市的簡稱，但「新竹縣」更長
        let result = extract(&index, "新竹縣竹北市光明六路");
        assert_eq!(result.pca.city.as_deref(), Some("新竹縣"));
        assert_eq!(result.pca.area.as_deref(), Some("竹北市"));
        assert_eq!(result.leftover, "光明六路");

        // 較長的區名取代較短的縣市簡稱
        let result = extract(&index, "桃園市桃園區中正路");
        assert_eq!(result.pca.city.as_deref(), Some("桃園市"));
        assert_eq!(result.pca.area.as_deref(), Some("桃園區"));
        assert_eq!(result.leftover, "中正路");
    }

    #[test]
    fn test_province_alias() {
        let index = index();
        let result = extract(&index, "福建金門縣金城鎮民生路");
        assert_eq!(result.pca.province.as_deref(), Some("福建省"));
        assert_eq!(result.pca.city.as_deref(), Some("金門縣"));
        assert_eq!(result.pca.area.as_deref(), Some("金城鎮"));
        assert_eq!(result.pca.city_pos, Some(2));
        assert_eq!(result.leftover, "民生路");
    }

    #[test]
    fn test_filter_chars_guard_prefix() {
        let index = index();
        // 「臺中」後接「路」，是路名而非縣市
        let result = extract(&index, "臺中路100號");
        assert_eq!(result.pca, Pca::default());
        assert_eq!(result.leftover, "臺中路100號");
    }

    #[test]
    fn test_filter_allows_longer_token() {
        let index = ReferenceIndex::build(vec![
            ReferenceRecord::new("臺灣省", "宜蘭縣", "民生"),
            ReferenceRecord::new("臺灣省", "宜蘭縣", "民生路口"),
        ]);
        let lookahead = Lookahead::new(&index, 4);

        let result = lookahead.extract("民生路口123號");
        assert_eq!(result.pca.area.as_deref(), Some("民生路口"));
        assert_eq!(result.leftover, "123號");

        let result = lookahead.extract("民生路5號");
        assert_eq!(result.pca.area, None);

        let result = lookahead.extract("民生社區");
        assert_eq!(result.pca.area.as_deref(), Some("民生"));
        assert_eq!(result.leftover, "社區");
    }

    #[test]
    fn test_only_leading_matches_truncate() {
        let index = index();
        let address = "我住在臺北市大安區";
        let result = extract(&index, address);
        assert_eq!(result.pca.city.as_deref(), Some("臺北市"));
        assert_eq!(result.pca.city_pos, Some(3));
        assert_eq!(result.pca.area.as_deref(), Some("大安區"));
        assert_eq!(result.truncate, 0);
        assert_eq!(result.leftover, address);
    }

    #[test]
    fn test_repeated_level_keeps_first() {
        let index = index();
        let result = extract(&index, "臺北市高雄市");
        assert_eq!(result.pca.city.as_deref(), Some("臺北市"));
        // 第二個縣市未寫入，截斷點不推進
        assert_eq!(result.truncate, 3);
        assert_eq!(result.leftover, "高雄市");
    }

    #[test]
    fn test_prefix_plus_leftover_is_original() {
        let index = index();
        for address in [
            "臺北市中正區重慶南路一段122號",
            "臺灣省信義區信二路",
            "我住在臺北市大安區",
            "屏東縣三地門鄉",
            "",
        ] {
            let result = extract(&index, address);
            let prefix: String = address.chars().take(result.truncate).collect();
            assert_eq!(format!("{}{}", prefix, result.leftover), address);
        }
    }

    #[test]
    fn test_zero_window_matches_nothing() {
        let index = index();
        let result = Lookahead::new(&index, 0).extract("臺北市");
        assert_eq!(result.pca, Pca::default());
        assert_eq!(result.leftover, "臺北市");
    }
}
