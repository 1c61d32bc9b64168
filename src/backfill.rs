//! 比對後的回填
//!
//! 以索引中的關聯唯一性補上缺少的縣市與省；無法唯一決定時保持未設定。

use crate::index::ReferenceIndex;
use crate::pca::Pca;
use crate::region::Level;
use tracing::trace;

/// 由鄉鎮市區（必要時加上省）回填縣市
pub fn fill_city(pca: &mut Pca, index: &ReferenceIndex) {
    if pca.city.is_some() {
        return;
    }
    let Some(area) = pca.area.as_deref() else {
        return;
    };

    let areas = index.areas();
    if areas.is_unique_value(area, Level::City) {
        pca.city = areas.value(area, Level::City).map(str::to_string);
        trace!(area, city = ?pca.city, "city filled from area");
        return;
    }

    if let Some(province) = pca.province.as_deref() {
        let key = (province.to_string(), area.to_string());
        let scoped = index.province_areas();
        if scoped.is_unique_value(&key, Level::City) {
            pca.city = scoped.value(&key, Level::City).map(str::to_string);
            trace!(province, area, city = ?pca.city, "city filled from province and area");
        }
    }
}

/// 由縣市回填省
pub fn fill_province(pca: &mut Pca, index: &ReferenceIndex) {
    if pca.province.is_some() {
        return;
    }
    if let Some(city) = pca.city.as_deref() {
        pca.province = index
            .cities()
            .value(city, Level::Province)
            .map(str::to_string);
        trace!(city, province = ?pca.province, "province filled from city");
    }
}

/// 先回填縣市，再回填省
pub fn backfill(pca: &mut Pca, index: &ReferenceIndex) {
    fill_city(pca, index);
    fill_province(pca, index);
}
