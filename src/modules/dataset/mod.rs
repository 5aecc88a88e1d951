//! Dataset module for the bundled wilayah data
//!
//! Reads the dataset file (brotli, gzip or plain JSON), decodes one of the
//! accepted JSON layouts and normalizes it into a single ordered list of
//! regions.

mod loader;
mod raw;

pub use loader::{Compression, DatasetLoader};
pub use raw::{Dataset, RawDataset};
