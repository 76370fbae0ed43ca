//! Carousel Configuration
//!
//! Timing knobs for the carousel. Values come from, in increasing priority:
//! built-in defaults, a TOML file, environment variables, then whatever a
//! surface applies on top (e.g. CLI flags).
//!
//! ```toml
//! tick_interval_ms = 5000
//! cooldown_ms = 8000
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Default auto-advance interval
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 5000;

/// Default pause after manual interaction
pub const DEFAULT_COOLDOWN_MS: u64 = 8000;

/// Smallest accepted duration; zero is clamped up to this
pub const MIN_DURATION_MS: u64 = 1;

/// Carousel timing configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds
    pub tick_interval_ms: u64,

    /// Pause after manual interaction in milliseconds
    pub cooldown_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

impl CarouselConfig {
    /// Build a config from explicit durations (clamped)
    pub fn new(tick_interval_ms: u64, cooldown_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            cooldown_ms,
        }
        .clamped()
    }

    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `CAROUSEL_TICK_MS`: auto-advance interval
    /// - `CAROUSEL_COOLDOWN_MS`: pause after manual interaction
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of `self`
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        Self {
            tick_interval_ms: std::env::var("CAROUSEL_TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.tick_interval_ms),
            cooldown_ms: std::env::var("CAROUSEL_COOLDOWN_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.cooldown_ms),
        }
        .clamped()
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        Ok(config.clamped())
    }

    /// Load a TOML config file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Raise zero durations to [`MIN_DURATION_MS`]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            tick_interval_ms: clamp_ms("tick_interval_ms", self.tick_interval_ms),
            cooldown_ms: clamp_ms("cooldown_ms", self.cooldown_ms),
        }
    }

    /// Auto-advance interval
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(MIN_DURATION_MS))
    }

    /// Pause after manual interaction
    #[must_use]
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms.max(MIN_DURATION_MS))
    }
}

fn clamp_ms(field: &str, value: u64) -> u64 {
    if value < MIN_DURATION_MS {
        warn!(field, value, min = MIN_DURATION_MS, "Duration too small, clamping");
        MIN_DURATION_MS
    } else {
        value
    }
}
