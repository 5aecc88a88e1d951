//! Dataset file loader
//!
//! Looks for `<data_dir>/wilayah-<format>.json` with a `.br` suffix first,
//! then `.gz`, then the plain file, and decodes the first one found.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tracing::{debug, info};

use super::raw::Dataset;
use crate::core::config::DatasetConfig;
use crate::core::error::{AppError, Result};

const BROTLI_BUFFER_SIZE: usize = 4096;

/// On-disk encoding of the dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Brotli,
    Gzip,
    None,
}

impl Compression {
    /// Order in which encodings are probed
    pub const PREFERENCE: [Compression; 3] =
        [Compression::Brotli, Compression::Gzip, Compression::None];

    pub fn extension(self) -> Option<&'static str> {
        match self {
            Compression::Brotli => Some("br"),
            Compression::Gzip => Some("gz"),
            Compression::None => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Compression::Brotli => "brotli",
            Compression::Gzip => "gzip",
            Compression::None => "raw JSON",
        }
    }

    /// `json_path` with this encoding's suffix appended
    pub fn path_for(self, json_path: &Path) -> PathBuf {
        match self.extension() {
            Some(ext) => {
                let mut path = OsString::from(json_path.as_os_str());
                path.push(".");
                path.push(ext);
                PathBuf::from(path)
            }
            None => json_path.to_path_buf(),
        }
    }

    /// Read the whole file, decompressing as needed
    fn read_all(self, path: &Path) -> Result<Vec<u8>> {
        let file = BufReader::new(File::open(path)?);
        let mut bytes = Vec::new();

        match self {
            Compression::Brotli => {
                brotli::Decompressor::new(file, BROTLI_BUFFER_SIZE).read_to_end(&mut bytes)?;
            }
            Compression::Gzip => {
                GzDecoder::new(file).read_to_end(&mut bytes)?;
            }
            Compression::None => {
                let mut file = file;
                file.read_to_end(&mut bytes)?;
            }
        }

        Ok(bytes)
    }
}

/// Loads the bundled dataset described by a [`DatasetConfig`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    config: DatasetConfig,
}

impl DatasetLoader {
    pub fn new(config: DatasetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// First existing candidate file, in [`Compression::PREFERENCE`] order.
    pub fn resolve(&self) -> Result<(PathBuf, Compression)> {
        let json_path = self.config.json_path();

        Compression::PREFERENCE
            .iter()
            .map(|&compression| (compression.path_for(&json_path), compression))
            .find(|(path, _)| path.is_file())
            .ok_or_else(|| {
                AppError::DatasetNotFound(format!(
                    "No dataset file for format '{}' at {} (.br, .gz or plain)",
                    self.config.format,
                    json_path.display()
                ))
            })
    }

    /// Read, decompress and decode the dataset.
    ///
    /// Any failure is fatal: there is no fallback to another encoding once a
    /// candidate file has been found.
    pub fn load(&self) -> Result<Dataset> {
        let (path, compression) = self.resolve()?;
        info!("Loading from {}...", compression.label());
        debug!(path = %path.display(), "Resolved dataset file");

        let bytes = compression.read_all(&path)?;
        let dataset = Dataset::from_slice(&bytes)?;

        info!("Loaded {} regions", dataset.len());
        Ok(dataset)
    }
}
