use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::shared::constants::DEFAULT_SEARCH_MAX_LIMIT;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub dataset: DatasetConfig,
    pub search: SearchConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Which bundled encoding of the dataset to load.
///
/// Both encodings carry the same regions; the choice has no effect on query
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// `[[code, name], ...]` or the split `{"k": [...], "n": [...]}` layout
    #[default]
    Array,
    /// `{code: name, ...}`
    Map,
}

impl DataFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Array => "array",
            DataFormat::Map => "map",
        }
    }

    /// Base JSON file name, before any compression suffix.
    pub fn file_name(&self) -> String {
        format!("wilayah-{}.json", self.as_str())
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(DataFormat::Array),
            "map" => Ok(DataFormat::Map),
            other => Err(format!(
                "Invalid DATA_FORMAT '{}': expected 'array' or 'map'",
                other
            )),
        }
    }
}

/// Where the dataset lives and which encoding to read.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    pub data_dir: PathBuf,
    pub format: DataFormat,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Upper bound applied to the `limit` query parameter by the HTTP layer
    pub max_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            dataset: DatasetConfig::from_env()?,
            search: SearchConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatasetConfig {
    const DEFAULT_DATA_DIR: &'static str = "data";

    pub fn new(data_dir: impl Into<PathBuf>, format: DataFormat) -> Self {
        Self {
            data_dir: data_dir.into(),
            format,
        }
    }

    pub fn from_env() -> Result<Self, String> {
        let data_dir =
            env::var("DATA_DIR").unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string());

        let format = match env::var("DATA_FORMAT") {
            Ok(value) if !value.trim().is_empty() => value.parse::<DataFormat>()?,
            _ => DataFormat::default(),
        };

        Ok(Self::new(data_dir, format))
    }

    /// Path of the uncompressed JSON file; compressed variants append `.br` / `.gz`.
    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(self.format.file_name())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DATA_DIR, DataFormat::default())
    }
}

impl SearchConfig {
    pub fn from_env() -> Result<Self, String> {
        let max_limit = env::var("SEARCH_MAX_LIMIT")
            .unwrap_or_else(|_| DEFAULT_SEARCH_MAX_LIMIT.to_string())
            .parse::<usize>()
            .map_err(|_| "SEARCH_MAX_LIMIT must be a valid number".to_string())?;

        if max_limit == 0 {
            return Err("SEARCH_MAX_LIMIT must be greater than zero".to_string());
        }

        Ok(Self { max_limit })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_limit: DEFAULT_SEARCH_MAX_LIMIT,
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        Self {
            title: env::var("SWAGGER_TITLE")
                .unwrap_or_else(|_| "Nusantara Regions API".to_string()),
            version: env::var("SWAGGER_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
                "Read-only lookup and search over Indonesian administrative regions".to_string()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_parse() {
        assert_eq!("array".parse::<DataFormat>(), Ok(DataFormat::Array));
        assert_eq!("MAP".parse::<DataFormat>(), Ok(DataFormat::Map));
        assert_eq!(" Map ".parse::<DataFormat>(), Ok(DataFormat::Map));
        assert!("csv".parse::<DataFormat>().is_err());
        assert!("".parse::<DataFormat>().is_err());
    }

    #[test]
    fn test_json_path() {
        let config = DatasetConfig::new("/srv/wilayah", DataFormat::Map);
        assert_eq!(
            config.json_path(),
            PathBuf::from("/srv/wilayah/wilayah-map.json")
        );

        let config = DatasetConfig::default();
        assert_eq!(config.json_path(), PathBuf::from("data/wilayah-array.json"));
    }
}
