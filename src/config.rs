// In: src/config.rs

//! The single source of truth for all huffpack runtime configuration.
//!
//! `HuffpackConfig` is created once at the application boundary (the CLI, or a
//! service embedding the bridge) and passed down by reference. The codec core
//! itself is configuration-free; only the file-level bridge and logging setup
//! read these settings.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::HuffpackError;

//==================================================================================
// I. Enums
//==================================================================================

/// Verbosity for the boundary logger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

//==================================================================================
// II. The Unified HuffpackConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct HuffpackConfig {
    /// Inputs larger than this are rejected before any work is done.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// If true, trailing whitespace is stripped from file inputs before
    /// compression. Byte-exact round trips require this to be off.
    #[serde(default)]
    pub trim_trailing_whitespace: bool,

    /// Extension given to compressed files and required on decompression input.
    #[serde(default = "default_compressed_extension")]
    pub compressed_extension: String,

    /// Appended to the input's stem to name decompressed files.
    #[serde(default = "default_decompressed_suffix")]
    pub decompressed_suffix: String,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for HuffpackConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            trim_trailing_whitespace: false,
            compressed_extension: default_compressed_extension(),
            decompressed_suffix: default_decompressed_suffix(),
            log_level: LogLevel::default(),
        }
    }
}

impl HuffpackConfig {
    /// Parses and validates a JSON config document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, HuffpackError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, HuffpackError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), HuffpackError> {
        if self.max_input_bytes == 0 {
            return Err(HuffpackError::Config(
                "max_input_bytes must be greater than zero".to_string(),
            ));
        }
        let ext = self.compressed_extension.as_str();
        if ext.is_empty() || ext.starts_with('.') || ext.contains(&['/', '\\'][..]) {
            return Err(HuffpackError::Config(format!(
                "compressed_extension must be a bare extension like \"bin\", got {:?}",
                ext
            )));
        }
        if self.decompressed_suffix.is_empty() || self.decompressed_suffix.contains(&['/', '\\'][..]) {
            return Err(HuffpackError::Config(format!(
                "decompressed_suffix must be a non-empty file name fragment, got {:?}",
                self.decompressed_suffix
            )));
        }
        Ok(())
    }
}

/// 16 MiB, the upload limit of the service this codec sits behind.
fn default_max_input_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_compressed_extension() -> String {
    "bin".to_string()
}

fn default_decompressed_suffix() -> String {
    "_decompressed.txt".to_string()
}
