use crate::features::regions::models::{RegionLevel, RegionStats};
use crate::features::regions::services::region_index::RegionIndex;

impl From<&RegionIndex> for RegionStats {
    /// Per-level counts; computed on demand, never cached.
    fn from(index: &RegionIndex) -> Self {
        let count = |level: RegionLevel| index.count_at_level(level.depth());

        Self {
            total: index.len(),
            provinsi: count(RegionLevel::Province),
            kabupaten: count(RegionLevel::Regency),
            kecamatan: count(RegionLevel::District),
            kelurahan: count(RegionLevel::Village),
        }
    }
}
