//! # Configuration
//!
//! notekeep configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `NOTEKEEP__PRETTY_JSON`, `NOTEKEEP__LOG_LEVEL`.
//! 2. **Data directory config**: `<data dir>/notekeep.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `pretty_json` | `false` | Pretty-print the stored JSON documents |
//! | `log_level` | `info` | Level passed to [`crate::logging::init_logging`] |
//!
//! The 30-day retention window is not configurable.

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for notekeep, stored in `notekeep.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NotekeepConfig {
    /// Pretty-print stored documents. Compact output matches what earlier versions wrote.
    #[config(default = false)]
    pub pretty_json: bool,

    /// One of: error, warn, info, debug, trace.
    #[config(default = "info")]
    pub log_level: String,
}

impl Default for NotekeepConfig {
    fn default() -> Self {
        Self {
            pretty_json: false,
            log_level: "info".to_string(),
        }
    }
}

impl NotekeepConfig {
    /// Log level, lowercased and trimmed.
    pub fn log_level(&self) -> String {
        self.log_level.trim().to_ascii_lowercase()
    }
}
