//! # Listing Configuration
//!
//! Tunables shared by every listing. Defaults reproduce the shipped behaviour: pages of 10,
//! a 500 ms debounce before a filter reset, an 800 ms simulated fetch per page and a 0.1
//! intersection threshold for the sentinel.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: usize,
    pub reset_delay_ms: u64,
    pub load_delay_ms: u64,
    pub visibility_threshold: f32,
    /// Capacity of the listing's request channel.
    pub buffer_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            reset_delay_ms: 500,
            load_delay_ms: 800,
            visibility_threshold: 0.1,
            buffer_size: 32,
        }
    }
}

impl ListingConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must be at least 1".into(),
            });
        }
        if self.buffer_size == 0 {
            return Err(ConfigError::Invalid {
                field: "buffer_size",
                reason: "must be at least 1".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::Invalid {
                field: "visibility_threshold",
                reason: format!("{} is outside [0, 1]", self.visibility_threshold),
            });
        }
        Ok(())
    }
}
