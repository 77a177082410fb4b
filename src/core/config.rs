//! Converter configuration
//!
//! The output format's numeric constants (hex size, height scale, fixed-point
//! shift) are part of the artifact contract and live next to the code that
//! uses them. This module only holds the knobs that change how the converter
//! treats questionable input.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{MapError, Result};

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "HEXMAP_CONFIG";

/// Environment variable forcing strict validation on or off
pub const STRICT_ENV: &str = "HEXMAP_STRICT";

/// Configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Reject maps that fail validation instead of converting them
    ///
    /// Off by default: lenient mode produces the reference artifact for any
    /// parseable map and only logs what validation finds. Strict mode refuses
    /// coordinate collisions, duplicate ids, out-of-range coordinates and
    /// connections the analyzer would silently drop.
    pub strict: bool,

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            strict: false,
            log_filter: "hexmap_compiler=info".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| MapError::Config(format!("Failed to parse config TOML: {}", e)))
    }

    /// Load a config from a TOML file on disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MapError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Build a config from the environment
    ///
    /// Optional: HEXMAP_CONFIG (path to a TOML file)
    /// Optional: HEXMAP_STRICT (`1`, `true`, `yes` / `0`, `false`, `no`)
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::load_from_file(Path::new(&path))?,
            _ => Self::default(),
        };

        if let Ok(value) = std::env::var(STRICT_ENV) {
            config.strict = parse_flag(&value).ok_or_else(|| {
                MapError::Config(format!("{} must be a boolean flag, got '{}'", STRICT_ENV, value))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
