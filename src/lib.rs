//! Indonesian administrative regions (wilayah) as an in-memory, read-only index.
//!
//! The dataset is loaded once from a bundled JSON source (optionally brotli or
//! gzip compressed) and then served through [`RegionService`]:
//!
//! - exact lookup by code (`"11"`, `"31.71"`, `"11.01.01.2001"`)
//! - hierarchy navigation (province → regency → district → village)
//! - case-insensitive substring search, with a memoizing variant
//! - per-level statistics
//!
//! ```ignore
//! use nusantara_core::{DataFormat, DatasetConfig, RegionService};
//!
//! let service = RegionService::load(&DatasetConfig::new("data", DataFormat::Array))?;
//! let aceh = service.find_by_code("11");
//! let kabupaten = service.list_regencies_by_province_code("11");
//! let hits = service.search("jakarta", 5);
//! # Ok::<(), nusantara_core::AppError>(())
//! ```

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::config::{DataFormat, DatasetConfig};
pub use crate::core::error::{AppError, Result};
pub use crate::features::regions::{
    Dataset, DatasetLoader, RawDataset, Region, RegionIndex, RegionLevel, RegionService,
    RegionStats, SearchCache,
};
