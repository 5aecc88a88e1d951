use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::constants::CODE_SEPARATOR;

/// A single administrative region at any level, identified by its dotted code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub name: String,
}

impl Region {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Hierarchy depth: the number of dot-separated segments in the code.
    pub fn level(&self) -> usize {
        code_depth(&self.code)
    }

    /// Code of the enclosing region, or `None` for a province.
    pub fn parent_code(&self) -> Option<&str> {
        parent_code(&self.code)
    }
}

/// Number of segments in `code`. The empty string has depth 0.
pub fn code_depth(code: &str) -> usize {
    if code.is_empty() {
        0
    } else {
        code.split(CODE_SEPARATOR).count()
    }
}

/// `code` with its last segment removed
pub fn parent_code(code: &str) -> Option<&str> {
    code.rsplit_once(CODE_SEPARATOR).map(|(parent, _)| parent)
}

/// Named hierarchy levels of the Indonesian administrative structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    /// Provinsi
    Province = 1,
    /// Kabupaten/Kota
    Regency = 2,
    /// Kecamatan
    District = 3,
    /// Kelurahan/Desa
    Village = 4,
}

impl RegionLevel {
    pub const ALL: [RegionLevel; 4] = [
        RegionLevel::Province,
        RegionLevel::Regency,
        RegionLevel::District,
        RegionLevel::Village,
    ];

    pub fn depth(self) -> usize {
        self as usize
    }

    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(RegionLevel::Province),
            2 => Some(RegionLevel::Regency),
            3 => Some(RegionLevel::District),
            4 => Some(RegionLevel::Village),
            _ => None,
        }
    }

    /// Indonesian name of the level
    pub fn local_name(self) -> &'static str {
        match self {
            RegionLevel::Province => "provinsi",
            RegionLevel::Regency => "kabupaten",
            RegionLevel::District => "kecamatan",
            RegionLevel::Village => "kelurahan",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}
