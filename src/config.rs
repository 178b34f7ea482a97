//! `fru-dump` configuration, loaded from TOML.
//!
//! ```toml
//! ignore_checksum_errors = false
//! read_offset = 0
//! read_length = 256
//! block_size = 32
//! format = "table"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::parse::ParseOptions;
use crate::source::DEFAULT_BLOCK_SIZE;

/// Errors produced while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How `fru-dump` prints a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DumpConfig {
    /// Decode past header and area checksum failures.
    pub ignore_checksum_errors: bool,
    /// Product Info Area offset; bypasses the common header when set.
    pub base_offset: Option<u32>,
    /// Where the record starts within the source.
    pub read_offset: u64,
    /// Bytes to read; the rest of the source when unset.
    pub read_length: Option<usize>,
    /// Largest single transfer from the source.
    pub block_size: usize,
    pub format: OutputFormat,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            ignore_checksum_errors: false,
            base_offset: None,
            read_offset: 0,
            read_length: None,
            block_size: DEFAULT_BLOCK_SIZE,
            format: OutputFormat::Table,
        }
    }
}

impl DumpConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    #[must_use]
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            ignore_checksum_errors: self.ignore_checksum_errors,
            base_offset: self.base_offset,
        }
    }
}
