//! Record loading: scraped page document to business-data object

use crate::error::ExtractorError;
use crate::fields::value_to_text;
use firmgraph_domain::RawCompanyRecord;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Steps from the document root to the business-data object
#[derive(Debug, Clone, Copy)]
enum Step {
    Key(&'static str),
    Index(usize),
}

const RECORD_PATH: [Step; 7] = [
    Step::Key("props"),
    Step::Key("pageProps"),
    Step::Key("dehydratedState"),
    Step::Key("queries"),
    Step::Index(0),
    Step::Key("state"),
    Step::Key("data"),
];

/// Key of the canonical business identifier inside the record
pub const BUSINESS_ID_KEY: &str = "businessId";

/// Locate the business-data object inside a decoded page document
pub fn load_record(document: &Value) -> Result<RawCompanyRecord, ExtractorError> {
    let mut current = document;
    let mut walked = String::from("root");

    for step in RECORD_PATH {
        let next = match step {
            Step::Key(key) => {
                walked.push('.');
                walked.push_str(key);
                current.get(key)
            }
            Step::Index(idx) => {
                walked.push_str(&format!("[{}]", idx));
                current.get(idx)
            }
        };
        current = next.ok_or_else(|| ExtractorError::MalformedInput {
            path: walked.clone(),
            reason: "missing".to_string(),
        })?;
    }

    match current {
        Value::Object(map) => Ok(RawCompanyRecord::new(map.clone())),
        other => Err(ExtractorError::MalformedInput {
            path: walked,
            reason: format!("expected an object, found {}", json_kind(other)),
        }),
    }
}

/// Read, decode and locate the business-data object of one file
pub fn load_record_file<P: AsRef<Path>>(path: P) -> Result<RawCompanyRecord, ExtractorError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| ExtractorError::io(path, e))?;
    let document: Value = serde_json::from_str(&contents)?;
    load_record(&document)
}

/// Resolve the business identifier used as the join key
///
/// Prefers the record's `businessId`; falls back to the file stem.
pub fn resolve_business_id(record: &RawCompanyRecord, file_stem: &str) -> String {
    match record.get(BUSINESS_ID_KEY).and_then(value_to_text) {
        Some(id) if !id.is_empty() => id,
        _ => {
            warn!("Record '{}' has no businessId, using file name", file_stem);
            file_stem.to_string()
        }
    }
}

/// File stem of an input file (`1234567-8.json` -> `1234567-8`)
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// List the `.json` files of a directory, sorted by file name
pub fn discover_inputs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, ExtractorError> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| ExtractorError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractorError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wrap(data: Value) -> Value {
        json!({
            "props": {
                "pageProps": {
                    "dehydratedState": {
                        "queries": [{"state": {"data": data}}]
                    }
                }
            }
        })
    }

    #[test]
    fn test_load_record() {
        let document = wrap(json!({"businessId": "1234567-8", "name": "Example Oy"}));
        let record = load_record(&document).unwrap();
        assert_eq!(record.get("name"), Some(&json!("Example Oy")));
    }

    #[test]
    fn test_missing_step_names_path() {
        let document = json!({"props": {"pageProps": {}}});
        let err = load_record(&document).unwrap_err();
        match err {
            ExtractorError::MalformedInput { path, .. } => {
                assert_eq!(path, "root.props.pageProps.dehydratedState");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_queries() {
        let document = json!({"props": {"pageProps": {"dehydratedState": {"queries": []}}}});
        let err = load_record(&document).unwrap_err();
        match err {
            ExtractorError::MalformedInput { path, .. } => {
                assert_eq!(path, "root.props.pageProps.dehydratedState.queries[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_data_not_object() {
        let err = load_record(&wrap(json!(null))).unwrap_err();
        match err {
            ExtractorError::MalformedInput { reason, .. } => {
                assert!(reason.contains("null"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_business_id() {
        let record = load_record(&wrap(json!({"businessId": "1234567-8"}))).unwrap();
        assert_eq!(resolve_business_id(&record, "raw"), "1234567-8");

        let record = load_record(&wrap(json!({"businessId": ""}))).unwrap();
        assert_eq!(resolve_business_id(&record, "raw"), "raw");

        let record = load_record(&wrap(json!({}))).unwrap();
        assert_eq!(resolve_business_id(&record, "raw"), "raw");
    }

    #[test]
    fn test_discover_inputs_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = discover_inputs(dir.path()).unwrap();
        let names: Vec<String> = files.iter().map(|p| file_stem(p)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_load_record_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            load_record_file(&path),
            Err(ExtractorError::JsonParse(_))
        ));
    }
}
