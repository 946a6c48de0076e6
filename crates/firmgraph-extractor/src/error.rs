//! Error types for the Extractor

use crate::translation::Taxonomy;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document does not have the expected nested shape
    #[error("Malformed input at '{path}': {reason}")]
    MalformedInput {
        /// Dotted path of the step that failed
        path: String,
        /// What was found instead
        reason: String,
    },

    /// A raw category label has no translation entry
    #[error("No {taxonomy} translation for label '{label}'")]
    UnmappedCategory {
        /// Which translation table was consulted
        taxonomy: Taxonomy,
        /// The raw, untranslated label
        label: String,
    },

    /// A curated numeric field could not be parsed
    #[error("Non-numeric {metric} value '{value}' for business {business_id}, year {year}")]
    DataFormat {
        /// Business the row belongs to
        business_id: String,
        /// Output column name of the metric
        metric: &'static str,
        /// Fiscal year of the row
        year: String,
        /// The offending raw value
        value: String,
    },

    /// File system error
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory being accessed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Table serialization error
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Error raised while processing a specific input file
    #[error("{file}: {source}")]
    InFile {
        /// Input file name
        file: String,
        /// The error raised for that file
        source: Box<ExtractorError>,
    },
}

impl ExtractorError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractorError::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the input file name to an error
    pub fn in_file(self, file: impl Into<String>) -> Self {
        ExtractorError::InFile {
            file: file.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through `InFile` wrappers
    pub fn root(&self) -> &ExtractorError {
        match self {
            ExtractorError::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_file_message_names_file() {
        let err = ExtractorError::MalformedInput {
            path: "props".to_string(),
            reason: "missing".to_string(),
        }
        .in_file("1234567-8.json");
        let msg = err.to_string();
        assert!(msg.starts_with("1234567-8.json: "));
        assert!(msg.contains("Malformed input at 'props'"));
    }

    #[test]
    fn test_root_unwraps_nesting() {
        let err = ExtractorError::Config("bad".to_string())
            .in_file("a.json")
            .in_file("outer");
        assert!(matches!(err.root(), ExtractorError::Config(_)));
    }

    #[test]
    fn test_data_format_message() {
        let err = ExtractorError::DataFormat {
            business_id: "1234567-8".to_string(),
            metric: "turnover",
            year: "2022".to_string(),
            value: "n/a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Non-numeric turnover value 'n/a' for business 1234567-8, year 2022"
        );
    }
}
