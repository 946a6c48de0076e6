//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extractor(#[from] firmgraph_extractor::ExtractorError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Validation found problems in the input files
    #[error("Validation failed: {0} problem(s) found")]
    ValidationFailed(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmgraph_extractor::ExtractorError;

    #[test]
    fn test_extractor_error_converts() {
        let err: CliError = ExtractorError::Config("bad delimiter".to_string()).into();
        assert_eq!(err.to_string(), "Extraction error: Configuration error: bad delimiter");
    }

    #[test]
    fn test_toml_error_converts() {
        let err: CliError = toml::from_str::<toml::Value>("input_dir = ").unwrap_err().into();
        assert!(matches!(err, CliError::Toml(_)));
    }

    #[test]
    fn test_validation_failed_message() {
        assert_eq!(
            CliError::ValidationFailed(2).to_string(),
            "Validation failed: 2 problem(s) found"
        );
    }
}
