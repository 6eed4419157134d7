//! Configuration structures.
//!
//! Configuration is loaded from a JSON file or taken from defaults; the log
//! format can additionally be overridden from the environment (see
//! [`crate::observability`]).

use crate::types::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Request translation configuration.
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl Config {
    /// Load configuration from a JSON file. Missing sections take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse configuration from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// Request translation configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TranslationConfig {
    /// Offset from UTC, in seconds, applied to `fireDate` strings that carry
    /// no zone designator (e.g. `2024-01-01T09:30:00`). Date-only strings are
    /// always read as UTC midnight.
    pub naive_utc_offset_secs: i32,
}
