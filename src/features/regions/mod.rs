//! Indonesian administrative regions (wilayah) feature.
//!
//! Read-only lookup, hierarchy navigation and name search over the bundled
//! regions dataset, plus the HTTP endpoints exposing them.
//!
//! ## Data Hierarchy
//!
//! Codes are dot-separated; the number of segments is the level.
//!
//! - Level 1: Provinces (Provinsi) - `11`
//! - Level 2: Regencies/Cities (Kabupaten/Kota) - `11.01`
//! - Level 3: Districts (Kecamatan) - `11.01.01`
//! - Level 4: Villages (Kelurahan/Desa) - `11.01.01.2001`
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/stats` | Region counts per level |
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/levels/{level}` | List regions at a level |
//! | GET | `/api/regions/search` | Cached name search (`q`, `limit`) |
//! | GET | `/api/regions/autocomplete` | Uncached name search (`q`, `limit`) |
//! | DELETE | `/api/regions/search/cache` | Clear the search cache |
//! | GET | `/api/regions/{code}` | Get region by code |
//! | GET | `/api/regions/{code}/children` | List direct children of a region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use crate::modules::dataset::{Dataset, DatasetLoader, RawDataset};
pub use models::{Region, RegionLevel, RegionStats};
pub use services::{RegionIndex, RegionService, SearchCache, SearchEngine};
