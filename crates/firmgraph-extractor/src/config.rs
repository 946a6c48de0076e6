//! Configuration for the Extractor

use crate::network::EdgeFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do when a single input file fails to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run on the first failing file
    Abort,
    /// Log the failure, leave the file out of every table and continue
    Skip,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::Skip
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Per-file failure handling
    #[serde(default)]
    pub failure_policy: FailurePolicy,

    /// Field delimiter of the output tables
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Also write the shared decision-maker edge table
    #[serde(default)]
    pub emit_network_edges: bool,

    /// Translation table file (`.yml`, `.yaml`, `.toml` or `.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations_path: Option<PathBuf>,

    /// Thresholds for the edge table
    #[serde(default)]
    pub edge_filter: EdgeFilter,
}

fn default_delimiter() -> char {
    ','
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.delimiter.is_ascii() {
            return Err(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            ));
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(format!(
                "delimiter {:?} cannot be used as a field separator",
                self.delimiter
            ));
        }
        Ok(())
    }

    /// The delimiter as the byte the CSV writer expects
    ///
    /// Only meaningful after `validate()` succeeded.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Skip failing files, comma-delimited output, four tables only
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::Skip,
            delimiter: default_delimiter(),
            emit_network_edges: false,
            translations_path: None,
            edge_filter: EdgeFilter::default(),
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: any failing file aborts the run
    pub fn strict() -> Self {
        Self {
            failure_policy: FailurePolicy::Abort,
            ..Self::default()
        }
    }

    /// Lenient preset: skip failing files and emit every table
    pub fn lenient() -> Self {
        Self {
            failure_policy: FailurePolicy::Skip,
            emit_network_edges: true,
            ..Self::default()
        }
    }

    /// Set the translation table path
    pub fn with_translations(mut self, path: impl Into<PathBuf>) -> Self {
        self.translations_path = Some(path.into());
        self
    }
}
