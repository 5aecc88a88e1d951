use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{Region, RegionStats};

/// Query parameters for searching regions by name
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Search text (case-insensitive, partial match, at least 2 characters)
    #[param(example = "jakarta")]
    pub q: Option<String>,
    /// Maximum number of results (default: 10)
    #[param(example = 10, minimum = 0)]
    pub limit: Option<usize>,
}

/// Response DTO for a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResponseDto {
    #[schema(example = "31.71")]
    pub code: String,
    #[schema(example = "Kota Administrasi Jakarta Pusat")]
    pub name: String,
    /// 1 = provinsi, 2 = kabupaten/kota, 3 = kecamatan, 4 = kelurahan/desa
    #[schema(example = 2)]
    pub level: usize,
}

impl From<Region> for RegionResponseDto {
    fn from(region: Region) -> Self {
        Self {
            level: region.level(),
            code: region.code,
            name: region.name,
        }
    }
}

impl From<&Region> for RegionResponseDto {
    fn from(region: &Region) -> Self {
        region.clone().into()
    }
}

/// Response DTO for per-level region counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponseDto {
    pub total: usize,
    pub provinsi: usize,
    pub kabupaten: usize,
    pub kecamatan: usize,
    pub kelurahan: usize,
}

impl From<RegionStats> for StatsResponseDto {
    fn from(stats: RegionStats) -> Self {
        Self {
            total: stats.total,
            provinsi: stats.provinsi,
            kabupaten: stats.kabupaten,
            kecamatan: stats.kecamatan,
            kelurahan: stats.kelurahan,
        }
    }
}

/// Response DTO describing the search cache
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCacheResponseDto {
    /// Number of cached `(query, limit)` entries
    pub entries: usize,
    /// Searches answered from the cache since startup
    pub hits: u64,
    /// Searches that scanned the dataset since startup
    pub misses: u64,
}
