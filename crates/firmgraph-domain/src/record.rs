//! Raw record module - the untyped business-data object for one company

use serde_json::{Map, Value};

/// The decoded business-data object for one company
///
/// A thin read-only wrapper around the JSON object found inside a scraped
/// document. Absent keys and empty strings are the normal way the upstream
/// source expresses missing data, so every accessor returns an `Option`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawCompanyRecord {
    fields: Map<String, Value>,
}

impl RawCompanyRecord {
    /// Wrap an already-decoded JSON object
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Get a raw value by key; `null` is reported as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Get a nested object by key
    ///
    /// Returns `None` when the key is absent or holds something other than an object.
    pub fn get_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    /// Get an array by key
    ///
    /// Returns `None` when the key is absent or holds something other than an array.
    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// Check whether a key is present (including explicit `null`)
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the record has no keys at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for RawCompanyRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawCompanyRecord {
        match value {
            Value::Object(map) => RawCompanyRecord::new(map),
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_null_is_absent() {
        let rec = record(json!({"name": null, "city": "Espoo"}));
        assert!(rec.get("name").is_none());
        assert!(rec.contains_key("name"));
        assert_eq!(rec.get("city"), Some(&json!("Espoo")));
    }

    #[test]
    fn test_typed_accessors_reject_wrong_shapes() {
        let rec = record(json!({
            "address": "not an object",
            "financialTurnovers": {"0": "1"},
            "coordinates": {"lat": 60.1},
            "decisionPersons": []
        }));
        assert!(rec.get_object("address").is_none());
        assert!(rec.get_array("financialTurnovers").is_none());
        assert!(rec.get_object("coordinates").is_some());
        assert_eq!(rec.get_array("decisionPersons").map(<[Value]>::len), Some(0));
    }

    #[test]
    fn test_empty_record() {
        let rec = RawCompanyRecord::default();
        assert!(rec.is_empty());
        assert_eq!(rec.len(), 0);
    }
}
