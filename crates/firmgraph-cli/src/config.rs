//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use firmgraph_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "firmgraph.toml";

/// Translation table used when nothing else is configured
pub const DEFAULT_TRANSLATIONS: &str = "data/translations.yml";

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory of scraped JSON files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory the tables are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Pipeline settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Per-user configuration file path.
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("firmgraph").join("config.toml"))
    }

    /// Load configuration from a specific file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        config
            .extractor
            .validate()
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `./firmgraph.toml`, then the
    /// per-user file, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }

        match Self::user_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Translation table path, falling back to the default location.
    pub fn translations_path(&self) -> PathBuf {
        self.extractor
            .translations_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSLATIONS))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            settings: Settings::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/scraped_raw_jsons")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data/company_info")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmgraph_extractor::FailurePolicy;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_dir, PathBuf::from("data/scraped_raw_jsons"));
        assert_eq!(config.output_dir, PathBuf::from("data/company_info"));
        assert!(config.settings.color);
        assert_eq!(config.translations_path(), PathBuf::from(DEFAULT_TRANSLATIONS));
    }

    #[test]
    fn test_parse_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firmgraph.toml");
        fs::write(
            &path,
            r#"
                input_dir = "raw"

                [settings]
                format = "json"

                [extractor]
                failure_policy = "abort"
                emit_network_edges = true
                translations_path = "tr.json"
            "#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("raw"));
        assert_eq!(config.output_dir, PathBuf::from("data/company_info"));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.extractor.failure_policy, FailurePolicy::Abort);
        assert!(config.extractor.emit_network_edges);
        assert_eq!(config.translations_path(), PathBuf::from("tr.json"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_toml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firmgraph.toml");
        fs::write(&path, "input_dir = [").unwrap();
        assert!(matches!(Config::from_file(&path), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_invalid_delimiter_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("firmgraph.toml");
        fs::write(&path, "[extractor]\ndelimiter = \"\\\"\"\n").unwrap();
        assert!(matches!(Config::from_file(&path), Err(CliError::Config(_))));
    }
}
