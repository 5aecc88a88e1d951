use std::collections::HashSet;
use std::io::Read;

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::Region;

/// The JSON layouts a dataset file may use.
///
/// Decoding picks the first layout that matches, in declaration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawDataset {
    /// Ordered pairs: `[["11", "Aceh"], ...]`
    ///
    /// Must be tried before `Split`: serde also accepts a struct written as a
    /// two-element array, which would swallow a two-region pairs document.
    Pairs(Vec<(String, String)>),
    /// Parallel arrays: `{"k": ["11", ...], "n": ["Aceh", ...]}`
    Split { k: Vec<String>, n: Vec<String> },
    /// Code to name object: `{"11": "Aceh", ...}`, in document order
    Map(serde_json::Map<String, Value>),
}

impl RawDataset {
    pub fn layout(&self) -> &'static str {
        match self {
            RawDataset::Pairs(_) => "pairs",
            RawDataset::Split { .. } => "split",
            RawDataset::Map(_) => "map",
        }
    }
}

/// Canonical, validated dataset: regions in source order with unique,
/// non-empty codes and non-empty names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    regions: Vec<Region>,
}

impl Dataset {
    /// Build a dataset from `(code, name)` pairs, keeping their order.
    pub fn from_pairs<I, C, N>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let regions = pairs
            .into_iter()
            .map(|(code, name)| Region::new(code, name))
            .collect();
        Self::from_regions(regions)
    }

    pub fn from_regions(regions: Vec<Region>) -> Result<Self> {
        Self::validate(&regions)?;
        Ok(Self { regions })
    }

    fn validate(regions: &[Region]) -> Result<()> {
        let mut seen = HashSet::with_capacity(regions.len());
        for (position, region) in regions.iter().enumerate() {
            if region.code.is_empty() {
                return Err(AppError::InvalidDataset(format!(
                    "Empty code at position {}",
                    position
                )));
            }
            if region.name.is_empty() {
                return Err(AppError::InvalidDataset(format!(
                    "Empty name for code '{}'",
                    region.code
                )));
            }
            if !seen.insert(region.code.as_str()) {
                return Err(AppError::InvalidDataset(format!(
                    "Duplicate code '{}'",
                    region.code
                )));
            }
        }

        Ok(())
    }

    /// Decode a JSON document in any accepted layout.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;
        raw.try_into()
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)?;
        raw.try_into()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn into_regions(self) -> Vec<Region> {
        self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl TryFrom<RawDataset> for Dataset {
    type Error = AppError;

    fn try_from(raw: RawDataset) -> Result<Self> {
        match raw {
            RawDataset::Split { k, n } => {
                if k.len() != n.len() {
                    return Err(AppError::InvalidDataset(format!(
                        "Split layout has {} codes but {} names",
                        k.len(),
                        n.len()
                    )));
                }
                Dataset::from_pairs(k.into_iter().zip(n))
            }
            RawDataset::Pairs(pairs) => Dataset::from_pairs(pairs),
            RawDataset::Map(map) => {
                let regions = map
                    .into_iter()
                    .map(|(code, value)| match value {
                        Value::String(name) => Ok(Region::new(code, name)),
                        other => Err(AppError::InvalidDataset(format!(
                            "Name for code '{}' must be a string, got {}",
                            code, other
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Dataset::from_regions(regions)
            }
        }
    }
}
