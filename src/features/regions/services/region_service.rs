use std::sync::Arc;

use crate::core::config::DatasetConfig;
use crate::core::error::Result;
use crate::features::regions::models::{Region, RegionLevel, RegionStats};
use crate::features::regions::services::region_index::RegionIndex;
use crate::features::regions::services::search_cache::SearchCache;
use crate::features::regions::services::search_engine::SearchEngine;
use crate::modules::dataset::{Dataset, DatasetLoader};
use crate::shared::constants::DEFAULT_SEARCH_LIMIT;

/// Service for querying Indonesian administrative regions
///
/// Owns the immutable [`RegionIndex`] and a [`SearchEngine`] with its own
/// cache. Every query is total: a miss is `None` or an empty list, never an
/// error.
#[derive(Debug)]
pub struct RegionService {
    index: Arc<RegionIndex>,
    search: SearchEngine,
}

impl RegionService {
    /// Load the dataset from disk and build the index.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let dataset = DatasetLoader::new(config.clone()).load()?;
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        let index = Arc::new(RegionIndex::new(dataset));
        let search = SearchEngine::new(Arc::clone(&index));
        Self { index, search }
    }

    pub fn index(&self) -> &RegionIndex {
        &self.index
    }

    pub fn cache(&self) -> &SearchCache {
        self.search.cache()
    }

    // ==================== Lookup ====================

    /// Find a region by its exact code
    pub fn find_by_code(&self, code: &str) -> Option<Region> {
        self.index.find_by_code(code).cloned()
    }

    /// Name of the region with this exact code
    pub fn get_name(&self, code: &str) -> Option<&str> {
        self.index.get_name(code)
    }

    // ==================== Hierarchy ====================

    /// All regions at a depth (1 = provinsi ... 4 = kelurahan)
    pub fn get_by_level(&self, level: usize) -> Vec<Region> {
        self.index.at_level(level).cloned().collect()
    }

    /// Direct children of a region, whether or not the parent code exists
    pub fn get_children(&self, parent_code: &str) -> Vec<Region> {
        self.index.children_of(parent_code).cloned().collect()
    }

    /// List all provinces (provinsi)
    pub fn list_provinces(&self) -> Vec<Region> {
        self.get_by_level(RegionLevel::Province.depth())
    }

    /// List regencies/cities (kabupaten/kota) in a province
    pub fn list_regencies_by_province_code(&self, province_code: &str) -> Vec<Region> {
        self.get_children(province_code)
    }

    /// List districts (kecamatan) in a regency
    pub fn list_districts_by_regency_code(&self, regency_code: &str) -> Vec<Region> {
        self.get_children(regency_code)
    }

    /// List villages (kelurahan/desa) in a district
    pub fn list_villages_by_district_code(&self, district_code: &str) -> Vec<Region> {
        self.get_children(district_code)
    }

    // ==================== Search ====================

    pub fn autocomplete(&self, query: &str, limit: usize) -> Vec<Region> {
        self.search.autocomplete(query, limit)
    }

    pub fn autocomplete_default(&self, query: &str) -> Vec<Region> {
        self.autocomplete(query, DEFAULT_SEARCH_LIMIT)
    }

    /// Cached autocomplete, keyed by the literal query and limit
    pub fn search(&self, query: &str, limit: usize) -> Arc<[Region]> {
        self.search.search(query, limit)
    }

    pub fn search_default(&self, query: &str) -> Arc<[Region]> {
        self.search(query, DEFAULT_SEARCH_LIMIT)
    }

    pub fn clear_cache(&self) {
        self.search.clear_cache();
    }

    // ==================== Statistics ====================

    pub fn stats(&self) -> RegionStats {
        RegionStats::from(self.index.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DataFormat;
    use crate::shared::test_helpers::{bundled_data_dir, sample_service};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_service_is_shareable() {
        assert_send_sync::<RegionService>();
    }

    #[test]
    fn test_find_by_code() {
        let service = sample_service();
        assert_eq!(service.find_by_code("11"), Some(Region::new("11", "Aceh")));

        let jakpus = service.find_by_code("31.71").unwrap();
        assert!(jakpus.name.contains("Jakarta"));

        assert_eq!(service.find_by_code("99.99"), None);
        assert_eq!(service.find_by_code("99.99.99"), None);
        assert_eq!(service.find_by_code(""), None);
        assert_eq!(service.get_name("32"), Some("Jawa Barat"));
        assert_eq!(service.get_name("invalid"), None);
    }

    #[test]
    fn test_hierarchy_aliases() {
        let service = sample_service();
        assert_eq!(service.list_provinces(), service.get_by_level(1));
        assert_eq!(
            service.list_regencies_by_province_code("11"),
            service.get_children("11")
        );

        let kecamatan = service.list_districts_by_regency_code("11.01");
        assert_eq!(kecamatan.len(), 2);

        let kelurahan = service.list_villages_by_district_code("11.01.01");
        assert_eq!(
            kelurahan,
            vec![
                Region::new("11.01.01.2001", "Keude Bakongan"),
                Region::new("11.01.01.2002", "Ujong Mangki"),
            ]
        );
    }

    #[test]
    fn test_children_match_single_segment_pattern() {
        let service = sample_service();
        for province in service.list_provinces() {
            for regency in service.list_regencies_by_province_code(&province.code) {
                let suffix = regency
                    .code
                    .strip_prefix(&format!("{}.", province.code))
                    .unwrap();
                assert!(!suffix.is_empty());
                assert!(suffix.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn test_navigate_full_hierarchy() {
        let service = sample_service();
        let province = service.find_by_code("11").unwrap();
        let regency = service.list_regencies_by_province_code(&province.code)[0].clone();
        let district = service.list_districts_by_regency_code(&regency.code)[0].clone();
        let village = service.list_villages_by_district_code(&district.code)[0].clone();

        assert_eq!(village.level(), 4);
        assert_eq!(village.parent_code(), Some(district.code.as_str()));
        assert_eq!(district.parent_code(), Some(regency.code.as_str()));
    }

    #[test]
    fn test_out_of_range_levels() {
        let service = sample_service();
        assert!(service.get_by_level(0).is_empty());
        assert!(service.get_by_level(5).is_empty());
        assert!(service.get_by_level(99).is_empty());
        assert!(service.get_children("invalid").is_empty());
    }

    #[test]
    fn test_search_defaults() {
        let service = sample_service();
        assert_eq!(service.autocomplete_default("jakarta").len(), 3);
        assert_eq!(service.search_default("jakarta").len(), 3);
        assert!(service.cache().contains("jakarta", DEFAULT_SEARCH_LIMIT));

        service.clear_cache();
        assert!(service.cache().is_empty());
    }

    #[test]
    fn test_stats_identity() {
        let stats = sample_service().stats();
        assert_eq!(stats.total, stats.level_sum());
        assert_eq!(stats.provinsi, 3);
    }

    #[test]
    fn test_independent_caches() {
        let a = sample_service();
        let b = sample_service();
        a.search("aceh", 5);
        assert_eq!(a.cache().len(), 1);
        assert!(b.cache().is_empty());
    }

    #[test]
    fn test_load_bundled_array_dataset() {
        let service =
            RegionService::load(&DatasetConfig::new(bundled_data_dir(), DataFormat::Array))
                .unwrap();

        assert_eq!(service.find_by_code("11"), Some(Region::new("11", "Aceh")));
        assert!(service.get_name("31.71").unwrap().contains("Jakarta"));

        let provinces = service.list_provinces().len();
        assert!((30..=40).contains(&provinces));

        let results = service.autocomplete("jakarta", 5);
        assert!(!results.is_empty() && results.len() <= 5);
        assert!(results
            .iter()
            .all(|r| r.name.to_lowercase().contains("jakarta")));

        let stats = service.stats();
        assert_eq!(stats.total, stats.level_sum());
    }

    #[test]
    fn test_bundled_formats_agree() {
        let array =
            RegionService::load(&DatasetConfig::new(bundled_data_dir(), DataFormat::Array))
                .unwrap();
        let map = RegionService::load(&DatasetConfig::new(bundled_data_dir(), DataFormat::Map))
            .unwrap();

        assert_eq!(array.index().regions(), map.index().regions());
        assert_eq!(array.stats(), map.stats());
    }
}
