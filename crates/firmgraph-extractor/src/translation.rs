//! Category translation lookup
//!
//! Maps raw line-of-business labels (in the registry's locale) to normalized
//! category names. The table is loaded once per run and shared read-only.

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// The two independent taxonomies a company is classified under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Taxonomy {
    /// Broad category, keyed by `mainLineOfBusinessName`
    Category,
    /// Industry classification, keyed by `tolMainLineofBusinessName`
    SubCategory,
}

impl Taxonomy {
    /// Key of the raw label in the company record
    pub fn source_key(&self) -> &'static str {
        match self {
            Taxonomy::Category => "mainLineOfBusinessName",
            Taxonomy::SubCategory => "tolMainLineofBusinessName",
        }
    }

    /// Both taxonomies
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Category, Taxonomy::SubCategory];
}

impl fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Taxonomy::Category => write!(f, "category"),
            Taxonomy::SubCategory => write!(f, "sub-category"),
        }
    }
}

/// Raw label to normalized label tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationTable {
    /// Translations for the broad category taxonomy
    #[serde(default)]
    pub category_translations: HashMap<String, String>,

    /// Translations for the sub-category taxonomy
    #[serde(default)]
    pub sub_category_translations: HashMap<String, String>,
}

impl TranslationTable {
    /// Load a table from a `.yml`/`.yaml`, `.toml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExtractorError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => Self::from_yaml(&contents),
            Some("toml") => Self::from_toml(&contents),
            Some("json") => Self::from_json(&contents),
            _ => Err(ExtractorError::Config(format!(
                "Unsupported translation file '{}' (expected .yml, .yaml, .toml or .json)",
                path.display()
            ))),
        }
    }

    /// Parse a table from a YAML string
    pub fn from_yaml(yaml_str: &str) -> Result<Self, ExtractorError> {
        serde_yaml::from_str(yaml_str).map_err(|e| {
            ExtractorError::Config(format!("Failed to parse translation YAML: {}", e))
        })
    }

    /// Parse a table from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str).map_err(|e| {
            ExtractorError::Config(format!("Failed to parse translation TOML: {}", e))
        })
    }

    /// Parse a table from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ExtractorError> {
        Ok(serde_json::from_str(json_str)?)
    }

    fn table(&self, taxonomy: Taxonomy) -> &HashMap<String, String> {
        match taxonomy {
            Taxonomy::Category => &self.category_translations,
            Taxonomy::SubCategory => &self.sub_category_translations,
        }
    }

    /// Translate a raw label; a missing entry is an error, never a default
    pub fn translate(&self, taxonomy: Taxonomy, label: &str) -> Result<&str, ExtractorError> {
        self.table(taxonomy)
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| ExtractorError::UnmappedCategory {
                taxonomy,
                label: label.to_string(),
            })
    }

    /// Check whether a raw label has an entry
    pub fn contains(&self, taxonomy: Taxonomy, label: &str) -> bool {
        self.table(taxonomy).contains_key(label)
    }

    /// Number of entries per taxonomy as `(category, sub_category)`
    pub fn len(&self) -> (usize, usize) {
        (self.category_translations.len(), self.sub_category_translations.len())
    }

    /// True if both tables are empty
    pub fn is_empty(&self) -> bool {
        self.category_translations.is_empty() && self.sub_category_translations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TOML: &str = r#"
        [category_translations]
        "Ohjelmistot" = "Software"

        [sub_category_translations]
        "Ohjelmistojen suunnittelu ja valmistus" = "Software development"
    "#;

    const SAMPLE_YAML: &str = r#"
category_translations:
  Ohjelmistot: Software
sub_category_translations:
  "Ohjelmistojen suunnittelu ja valmistus": Software development
"#;

    #[test]
    fn test_translate_mapped_label() {
        let table = TranslationTable::from_toml(SAMPLE_TOML).unwrap();
        assert_eq!(table.translate(Taxonomy::Category, "Ohjelmistot").unwrap(), "Software");
        assert_eq!(
            table
                .translate(Taxonomy::SubCategory, "Ohjelmistojen suunnittelu ja valmistus")
                .unwrap(),
            "Software development"
        );
    }

    #[test]
    fn test_translate_unmapped_label_fails() {
        let table = TranslationTable::from_toml(SAMPLE_TOML).unwrap();
        let err = table.translate(Taxonomy::Category, "Tuntematon").unwrap_err();
        match err {
            ExtractorError::UnmappedCategory { taxonomy, label } => {
                assert_eq!(taxonomy, Taxonomy::Category);
                assert_eq!(label, "Tuntematon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_taxonomies_are_independent() {
        let table = TranslationTable::from_toml(SAMPLE_TOML).unwrap();
        assert!(table.contains(Taxonomy::Category, "Ohjelmistot"));
        assert!(!table.contains(Taxonomy::SubCategory, "Ohjelmistot"));
    }

    #[test]
    fn test_json_with_missing_section() {
        let table =
            TranslationTable::from_json(r#"{"category_translations": {"Kauppa": "Retail"}}"#)
                .unwrap();
        assert_eq!(table.len(), (1, 0));
        assert!(!table.is_empty());
    }

    #[test]
    fn test_from_file_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.yml");
        std::fs::write(&path, SAMPLE_YAML).unwrap();

        let table = TranslationTable::from_file(&path).unwrap();
        assert_eq!(table, TranslationTable::from_toml(SAMPLE_TOML).unwrap());
        assert_eq!(table.translate(Taxonomy::Category, "Ohjelmistot").unwrap(), "Software");
    }

    #[test]
    fn test_yaml_flow_mapping_and_missing_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.yaml");
        std::fs::write(&path, "category_translations: {Ohjelmistot: Software}\n").unwrap();

        let table = TranslationTable::from_file(&path).unwrap();
        assert_eq!(table.len(), (1, 0));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = TranslationTable::from_yaml("category_translations: [unclosed").unwrap_err();
        assert!(matches!(err, ExtractorError::Config(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.txt");
        std::fs::write(&path, "category_translations: {}").unwrap();
        let err = TranslationTable::from_file(&path).unwrap_err();
        assert!(matches!(err, ExtractorError::Config(_)));
    }

    #[test]
    fn test_from_file_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translations.toml");
        std::fs::write(&path, SAMPLE_TOML).unwrap();
        let table = TranslationTable::from_file(&path).unwrap();
        assert_eq!(table.len(), (1, 1));
    }

    #[test]
    fn test_taxonomy_display_and_keys() {
        assert_eq!(Taxonomy::Category.to_string(), "category");
        assert_eq!(Taxonomy::SubCategory.to_string(), "sub-category");
        assert_ne!(Taxonomy::Category.source_key(), Taxonomy::SubCategory.source_key());
    }
}
