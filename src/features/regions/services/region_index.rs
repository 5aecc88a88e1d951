use std::collections::HashMap;

use crate::features::regions::models::{code_depth, parent_code, Region};
use crate::modules::dataset::Dataset;

/// Immutable in-memory index over the region collection.
///
/// Built once from a [`Dataset`]; every lookup table stores positions into
/// `regions`, so all query results come back in source order.
#[derive(Debug, Default)]
pub struct RegionIndex {
    regions: Vec<Region>,
    /// Lower-cased names, parallel to `regions`
    folded_names: Vec<String>,
    by_code: HashMap<String, usize>,
    /// Positions per depth; slot 0 is always empty
    by_level: Vec<Vec<usize>>,
    /// Parent code -> positions of its direct children
    children: HashMap<String, Vec<usize>>,
}

impl RegionIndex {
    pub fn new(dataset: Dataset) -> Self {
        let regions = dataset.into_regions();

        let mut by_code = HashMap::with_capacity(regions.len());
        let mut by_level: Vec<Vec<usize>> = Vec::new();
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        let mut folded_names = Vec::with_capacity(regions.len());

        for (position, region) in regions.iter().enumerate() {
            by_code.insert(region.code.clone(), position);
            folded_names.push(region.name.to_lowercase());

            let depth = code_depth(&region.code);
            if by_level.len() <= depth {
                by_level.resize_with(depth + 1, Vec::new);
            }
            by_level[depth].push(position);

            if let Some(parent) = parent_code(&region.code) {
                children
                    .entry(parent.to_string())
                    .or_default()
                    .push(position);
            }
        }

        Self {
            regions,
            folded_names,
            by_code,
            by_level,
            children,
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// All regions in source order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Deepest level present, 0 for an empty index
    pub fn max_depth(&self) -> usize {
        self.by_level.len().saturating_sub(1)
    }

    /// Exact, case-sensitive match on the full code. No trimming.
    pub fn find_by_code(&self, code: &str) -> Option<&Region> {
        self.by_code.get(code).map(|&position| &self.regions[position])
    }

    pub fn get_name(&self, code: &str) -> Option<&str> {
        self.find_by_code(code).map(|region| region.name.as_str())
    }

    /// Regions whose code has exactly `level` segments.
    ///
    /// Level 0, or any level deeper than the data, yields nothing.
    pub fn at_level(&self, level: usize) -> impl Iterator<Item = &Region> + '_ {
        self.positions(self.by_level.get(level))
    }

    pub fn count_at_level(&self, level: usize) -> usize {
        self.by_level.get(level).map_or(0, Vec::len)
    }

    /// Direct children of `parent_code`: codes of the form
    /// `<parent_code>.<segment>` where the segment has no further dots.
    ///
    /// `parent_code` itself does not need to exist in the index.
    pub fn children_of(&self, parent_code: &str) -> impl Iterator<Item = &Region> + '_ {
        self.positions(self.children.get(parent_code))
    }

    /// Regions whose lower-cased name contains `folded_query`, in source
    /// order, stopping after `limit` matches.
    ///
    /// `folded_query` must already be lower-cased.
    pub fn name_matches<'a>(
        &'a self,
        folded_query: &'a str,
        limit: usize,
    ) -> impl Iterator<Item = &'a Region> + 'a {
        self.folded_names
            .iter()
            .zip(&self.regions)
            .filter(move |(name, _)| name.contains(folded_query))
            .map(|(_, region)| region)
            .take(limit)
    }

    fn positions<'a>(
        &'a self,
        slots: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Region> + 'a {
        slots
            .into_iter()
            .flatten()
            .map(move |&position| &self.regions[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_dataset;

    fn index() -> RegionIndex {
        RegionIndex::new(sample_dataset())
    }

    fn codes<'a>(regions: impl Iterator<Item = &'a Region>) -> Vec<&'a str> {
        regions.map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn test_every_region_is_found_by_code() {
        let index = index();
        for region in sample_dataset().regions() {
            assert_eq!(index.find_by_code(&region.code), Some(region));
            assert_eq!(index.get_name(&region.code), Some(region.name.as_str()));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let index = index();
        assert_eq!(index.get_name("11"), Some("Aceh"));
        assert!(index.find_by_code("99.99").is_none());
        assert!(index.find_by_code("").is_none());
        assert!(index.find_by_code(" 11").is_none());
        assert!(index.find_by_code("11 ").is_none());
        assert!(index.find_by_code("11.").is_none());
        assert!(index.get_name("invalid").is_none());
    }

    #[test]
    fn test_levels_partition_collection() {
        let index = index();
        assert_eq!(index.max_depth(), 4);
        assert_eq!(index.count_at_level(0), 0);
        assert_eq!(index.count_at_level(5), 0);
        assert_eq!(index.at_level(99).count(), 0);

        let sum: usize = (1..=4).map(|level| index.count_at_level(level)).sum();
        assert_eq!(sum, index.len());

        for region in index.regions() {
            assert!(index.at_level(region.level()).any(|r| r == region));
        }
    }

    #[test]
    fn test_at_level_keeps_source_order() {
        let index = index();
        assert_eq!(codes(index.at_level(1)), vec!["11", "31", "32"]);
    }

    #[test]
    fn test_children_are_direct_only() {
        let index = index();
        assert_eq!(codes(index.children_of("11")), vec!["11.01", "11.71"]);
        assert_eq!(
            codes(index.children_of("11.01.01")),
            vec!["11.01.01.2001", "11.01.01.2002"]
        );

        for child in index.children_of("31") {
            assert_eq!(child.parent_code(), Some("31"));
            assert_eq!(child.level(), 2);
        }
    }

    #[test]
    fn test_children_of_unknown_or_leaf_is_empty() {
        let index = index();
        assert_eq!(index.children_of("99").count(), 0);
        assert_eq!(index.children_of("invalid").count(), 0);
        assert_eq!(index.children_of("").count(), 0);
        assert_eq!(index.children_of("11.01.01.2001").count(), 0);
    }

    #[test]
    fn test_name_matches_respects_limit() {
        let index = index();
        let all: Vec<_> = index.name_matches("jakarta", usize::MAX).collect();
        assert!(all.len() > 2);

        let two: Vec<_> = index.name_matches("jakarta", 2).collect();
        assert_eq!(two, all[..2].to_vec());
        assert_eq!(index.name_matches("jakarta", 0).count(), 0);
    }

    #[test]
    fn test_empty_index() {
        let index = RegionIndex::new(Dataset::default());
        assert!(index.is_empty());
        assert_eq!(index.max_depth(), 0);
        assert_eq!(index.at_level(1).count(), 0);
    }
}
