//! # Configuration
//!
//! Settings live in `config.json` inside the data directory (see
//! [`crate::commands::StyleFinderPaths`]). A missing file means defaults;
//! missing keys in an existing file fall back to their defaults too.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_purpose` | `presentation` | Medium used when none is given |
//! | `favorites_key` | `designStyleFavorites` | Store key holding the favorite ids |
//! | `catalog_path` | none | JSON catalog to use instead of the built-in one |

use crate::error::{Result, StyleError};
use crate::favorites::DEFAULT_FAVORITES_KEY;
use crate::model::Medium;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleFinderConfig {
    #[serde(default)]
    pub default_purpose: Medium,

    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

impl Default for StyleFinderConfig {
    fn default() -> Self {
        Self {
            default_purpose: Medium::default(),
            favorites_key: default_favorites_key(),
            catalog_path: None,
        }
    }
}

impl StyleFinderConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StyleError::Io)?;
        let config: StyleFinderConfig =
            serde_json::from_str(&content).map_err(StyleError::Serialization)?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but an unreadable or malformed file yields
    /// defaults. The next `save` overwrites it.
    pub fn load_or_default<P: AsRef<Path>>(config_dir: P) -> Self {
        match Self::load(&config_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    dir = %config_dir.as_ref().display(),
                    error = %e,
                    "could not read config, using defaults"
                );
                Self::default()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StyleError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(StyleError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(StyleError::Io)?;
        Ok(())
    }

    /// Set the favorites key. Keys name a file in the data directory, so they
    /// must be non-empty and free of path separators.
    pub fn set_favorites_key(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(StyleError::Api(format!("Invalid favorites key: {:?}", key)));
        }
        self.favorites_key = key.to_string();
        Ok(())
    }
}
