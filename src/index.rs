//! 參照資料索引
//!
//! 索引在啟動時建立一次，之後唯讀，可在多個執行緒間共享。

use crate::data::parse_records;
use crate::error::DataError;
use crate::region::{Level, ReferenceRecord};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// 名稱到其關聯記錄的對應表
///
/// 每個鍵對應至少一筆記錄，順序為首次出現的順序。
/// 標準名稱一律取第一筆記錄，後出現的同名記錄只影響唯一性判斷。
#[derive(Debug, Clone)]
pub struct RelationalMap<K> {
    /// 標準名稱取自記錄的哪一層級
    name_level: Level,
    entries: HashMap<K, Vec<ReferenceRecord>>,
}

impl<K: Hash + Eq> RelationalMap<K> {
    fn new(name_level: Level) -> Self {
        Self {
            name_level,
            entries: HashMap::new(),
        }
    }

    fn append(&mut self, key: K, record: &ReferenceRecord) {
        self.entries.entry(key).or_default().push(record.clone());
    }

    /// 所有關聯記錄
    pub fn records<Q>(&self, key: &Q) -> Option<&[ReferenceRecord]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// 標準名稱（第一筆記錄在本表層級的值）
    pub fn full_name<Q>(&self, key: &Q) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.value(key, self.name_level)
    }

    /// 第一筆記錄在指定層級的值
    pub fn value<Q>(&self, key: &Q, level: Level) -> Option<&str>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.records(key)
            .and_then(|records| records.first())
            .map(|record| record.get(level))
    }

    /// 所有關聯記錄在指定層級是否同值；不存在的鍵回傳 `false`
    pub fn is_unique_value<Q>(&self, key: &Q, level: Level) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.records(key) {
            Some([first, rest @ ..]) => rest.iter().all(|r| r.get(level) == first.get(level)),
            _ => false,
        }
    }

    /// 鍵的數量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }
}

/// 縣市鄉鎮區索引
#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    /// 省或直轄市名稱（含去掉「省」「市」的簡稱）-> 全稱
    provinces: HashMap<String, String>,
    /// 縣市名稱（含去掉「市」的簡稱）
    cities: RelationalMap<String>,
    /// 鄉鎮市區名稱
    areas: RelationalMap<String>,
    /// (省, 鄉鎮市區) -> 記錄，用於同名區的消歧
    province_areas: RelationalMap<(String, String)>,
    /// 最長鍵的字元數
    max_key_len: usize,
    record_count: usize,
}

impl ReferenceIndex {
    /// 從記錄建立索引
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ReferenceRecord>,
    {
        let mut provinces = HashMap::new();
        let mut cities = RelationalMap::new(Level::City);
        let mut areas = RelationalMap::new(Level::Area);
        let mut province_areas = RelationalMap::new(Level::Province);
        let mut record_count = 0;

        for record in records {
            record_count += 1;

            // 省與直轄市，簡稱對應到首次出現的全稱
            if !provinces.contains_key(&record.province) {
                provinces.insert(record.province.clone(), record.province.clone());
                if let Some(short) = record
                    .province
                    .strip_suffix('省')
                    .or_else(|| record.province.strip_suffix('市'))
                {
                    provinces.insert(short.to_string(), record.province.clone());
                }
            }

            areas.append(record.area.clone(), &record);

            cities.append(record.city.clone(), &record);
            if let Some(short) = record.city.strip_suffix('市') {
                cities.append(short.to_string(), &record);
            }

            province_areas.append((record.province.clone(), record.area.clone()), &record);
        }

        let max_key_len = provinces
            .keys()
            .chain(cities.keys())
            .chain(areas.keys())
            .map(|key| key.chars().count())
            .max()
            .unwrap_or(0);

        debug!(
            records = record_count,
            provinces = provinces.len(),
            cities = cities.len(),
            areas = areas.len(),
            max_key_len,
            "built reference index"
        );

        Self {
            provinces,
            cities,
            areas,
            province_areas,
            max_key_len,
            record_count,
        }
    }

    /// 從 CSV 文字建立索引，任何一列缺欄位即失敗
    pub fn from_csv(text: &str) -> Result<Self, DataError> {
        parse_records(text).map(Self::build)
    }

    /// 縣市索引
    pub fn cities(&self) -> &RelationalMap<String> {
        &self.cities
    }

    /// 鄉鎮市區索引
    pub fn areas(&self) -> &RelationalMap<String> {
        &self.areas
    }

    /// (省, 鄉鎮市區) 索引
    pub fn province_areas(&self) -> &RelationalMap<(String, String)> {
        &self.province_areas
    }

    /// 省或直轄市全稱，接受簡稱
    pub fn province_full_name(&self, key: &str) -> Option<&str> {
        self.provinces.get(key).map(String::as_str)
    }

    /// 依序以鄉鎮市區、縣市、省的優先權查詢，回傳層級與標準名稱
    pub fn resolve(&self, word: &str) -> Option<(Level, &str)> {
        if let Some(area) = self.areas.full_name(word) {
            Some((Level::Area, area))
        } else if let Some(city) = self.cities.full_name(word) {
            Some((Level::City, city))
        } else {
            self.province_full_name(word)
                .map(|province| (Level::Province, province))
        }
    }

    /// 最長鍵的字元數，即預設的前瞻視窗
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// 建立索引時讀入的記錄數（含重複）
    pub fn record_count(&self) -> usize {
        self.record_count
    }
}

impl FromIterator<ReferenceRecord> for ReferenceIndex {
    fn from_iter<I: IntoIterator<Item = ReferenceRecord>>(iter: I) -> Self {
        Self::build(iter)
    }
}
