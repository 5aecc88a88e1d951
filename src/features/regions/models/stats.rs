use serde::{Deserialize, Serialize};

/// Region counts per hierarchy level.
///
/// `total` is the size of the whole collection; for a dataset containing only
/// depths 1-4 it equals the sum of the four level counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionStats {
    pub total: usize,
    pub provinsi: usize,
    pub kabupaten: usize,
    pub kecamatan: usize,
    pub kelurahan: usize,
}

impl RegionStats {
    pub fn level_sum(&self) -> usize {
        self.provinsi + self.kabupaten + self.kecamatan + self.kelurahan
    }
}
