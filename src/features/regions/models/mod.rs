mod region;
mod stats;

pub use region::{code_depth, parent_code, Region, RegionLevel};
pub use stats::RegionStats;
