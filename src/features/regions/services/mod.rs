mod region_index;
mod region_service;
mod search_cache;
mod search_engine;
mod statistics;

pub use region_index::RegionIndex;
pub use region_service::RegionService;
pub use search_cache::SearchCache;
pub use search_engine::SearchEngine;
