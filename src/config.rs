//! Top-level application configuration.
//!
//! Configuration is stored in `.boardview/config.yaml` and includes:
//! - Pagination defaults and the item limit cap
//! - The preview truncation limit
//! - Virtual window geometry

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::paths::config_path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub preview: PreviewConfig,

    #[serde(default)]
    pub virtualization: VirtualizationConfig,
}

/// Pagination configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size when a request names only an offset (default: 100)
    #[serde(default = "default_item_limit")]
    pub default_item_limit: usize,

    /// Largest accepted page size (default: 1000)
    #[serde(default = "default_max_item_limit")]
    pub max_item_limit: usize,
}

fn default_item_limit() -> usize {
    100
}

fn default_max_item_limit() -> usize {
    1000
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_item_limit: default_item_limit(),
            max_item_limit: default_max_item_limit(),
        }
    }
}

/// Preview truncation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_item_limit")]
    pub item_limit: i64,
}

fn default_preview_item_limit() -> i64 {
    200
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            item_limit: default_preview_item_limit(),
        }
    }
}

/// Virtual window geometry, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VirtualizationConfig {
    #[serde(default = "default_row_height")]
    pub row_height: f64,

    #[serde(default = "default_overscan")]
    pub overscan: usize,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
}

fn default_row_height() -> f64 {
    44.0
}

fn default_overscan() -> usize {
    6
}

fn default_viewport_height() -> f64 {
    640.0
}

impl Default for VirtualizationConfig {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            overscan: default_overscan(),
            viewport_height: default_viewport_height(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or return the default
    /// if no file exists.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BoardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let pagination = &self.pagination;
        if pagination.max_item_limit < 1 {
            return Err(BoardError::Config(
                "pagination.max_item_limit must be at least 1".to_string(),
            ));
        }
        if !(1..=pagination.max_item_limit).contains(&pagination.default_item_limit) {
            return Err(BoardError::Config(format!(
                "pagination.default_item_limit must be between 1 and {}",
                pagination.max_item_limit
            )));
        }
        if !(self.virtualization.row_height > 0.0) {
            return Err(BoardError::Config(
                "virtualization.row_height must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.pagination.default_item_limit, 100);
        assert_eq!(config.pagination.max_item_limit, 1000);
        assert_eq!(config.preview.item_limit, 200);
        assert_eq!(config.virtualization.row_height, 44.0);
        assert_eq!(config.virtualization.overscan, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let yaml = r#"
pagination:
  default_item_limit: 25
virtualization:
  overscan: 2
"#;

        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.pagination.default_item_limit, 25);
        assert_eq!(config.pagination.max_item_limit, 1000);
        assert_eq!(config.virtualization.overscan, 2);
        assert_eq!(config.virtualization.viewport_height, 640.0);
        assert_eq!(config.preview, PreviewConfig::default());
    }

    #[test]
    fn test_load_from_rejects_default_above_max() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "pagination:\n  default_item_limit: 500\n  max_item_limit: 50"
        )
        .unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_load_from_rejects_zero_row_height() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "virtualization:\n  row_height: 0").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let err = Config::load_from(Path::new("/nonexistent/boardview.yaml")).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.preview.item_limit = 12;

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed, config);
    }
}
