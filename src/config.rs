//! Configuration schema for `gallery.toml`
//!
//! Deployments of this service have shipped two canvas policies: a single
//! fixed size, and an enumerated set (8/16/32/64). Both are expressed here
//! as an explicit allowed-size set rather than a hardcoded value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config must allow at least one canvas size")]
    NoSizes,
}

/// Canvas policy section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Allowed canvas side lengths. A single-element set is the
    /// fixed-size policy.
    #[serde(default = "default_sizes")]
    pub sizes: BTreeSet<u32>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { sizes: default_sizes() }
    }
}

fn default_sizes() -> BTreeSet<u32> {
    BTreeSet::from([8, 16, 32, 64])
}

/// Submission field limits section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    /// Maximum author name length in characters
    #[serde(default = "default_max_author")]
    pub max_author_len: usize,
    /// Maximum title length in characters
    #[serde(default = "default_max_title")]
    pub max_title_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_author_len: default_max_author(),
            max_title_len: default_max_title(),
        }
    }
}

fn default_max_author() -> usize {
    64
}

fn default_max_title() -> usize {
    120
}

/// Top-level gallery configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl GalleryConfig {
    /// Configuration for the single-fixed-size deployment policy.
    pub fn fixed_size(size: u32) -> Self {
        Self {
            canvas: CanvasConfig { sizes: BTreeSet::from([size]) },
            limits: LimitsConfig::default(),
        }
    }

    /// True iff `size` is an allowed canvas side length.
    pub fn allows_size(&self, size: u32) -> bool {
        self.canvas.sizes.contains(&size)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.canvas.sizes.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        Ok(config)
    }

    /// Load configuration from a `gallery.toml` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_enumerated_set() {
        let config = GalleryConfig::default();
        for size in [8, 16, 32, 64] {
            assert!(config.allows_size(size));
        }
        assert!(!config.allows_size(12));
        assert!(!config.allows_size(128));
    }

    #[test]
    fn test_fixed_size_policy() {
        let config = GalleryConfig::fixed_size(16);
        assert!(config.allows_size(16));
        assert!(!config.allows_size(8));
        assert!(!config.allows_size(32));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [canvas]
            sizes = [8, 16]

            [limits]
            max_author_len = 32
            max_title_len = 80
        "#;
        let config = GalleryConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.canvas.sizes, BTreeSet::from([8, 16]));
        assert_eq!(config.limits.max_author_len, 32);
        assert_eq!(config.limits.max_title_len, 80);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = GalleryConfig::from_toml_str("").unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_empty_size_set_rejected() {
        let toml = "[canvas]\nsizes = []\n";
        assert!(matches!(
            GalleryConfig::from_toml_str(toml),
            Err(ConfigError::NoSizes)
        ));
    }

    #[test]
    fn test_roundtrip() {
        let config = GalleryConfig::fixed_size(32);
        let text = toml::to_string(&config).unwrap();
        let parsed = GalleryConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, parsed);
    }
}
