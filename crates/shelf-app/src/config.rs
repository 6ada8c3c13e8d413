//! # Shelf Configuration
//!
//! Every knob has a default, so an empty file (or no file at all) reproduces the shipped
//! behaviour. Set `SHELF_CONFIG` to a TOML file to override any of them:
//!
//! ```toml
//! collection_size = 250
//!
//! [listing]
//! page_size = 20
//! reset_delay_ms = 300
//!
//! [upload]
//! processing_delay_ms = 500
//! ```

use listing_framework::{ConfigError, ListingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SHELF_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub processing_delay_ms: u64,
    /// How long the success banner stays up before the redirect.
    pub banner_ms: u64,
    pub buffer_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
            banner_ms: 2000,
            buffer_size: 32,
        }
    }
}

impl UploadConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Records generated for each listing mount.
    pub collection_size: usize,
    pub listing: ListingConfig,
    pub upload: UploadConfig,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            collection_size: 100,
            listing: ListingConfig::default(),
            upload: UploadConfig::default(),
        }
    }
}

impl ShelfConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Reads the file named by `SHELF_CONFIG`, or falls back to defaults when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listing.validate()?;
        if self.upload.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "upload.buffer_size",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
