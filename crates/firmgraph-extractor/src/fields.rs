//! Helpers for reading loosely-typed JSON fields

use serde_json::{Map, Value};

/// How a failed numeric coercion is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericErrorPolicy {
    /// Report the raw value as an error
    Fail,
    /// Treat the value as missing
    Null,
}

/// Render a scalar as text; `null` is `None`
///
/// Numbers and booleans use their JSON spelling, since the upstream source
/// mixes `"2021"` and `2021` for the same field.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Text of `map[key]`, `None` when absent or `null`
pub fn opt_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(value_to_text)
}

/// Truthiness as the upstream tooling understands it
///
/// Absent, `null`, `false`, `0`, `""`, `[]` and `{}` are all falsy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// True for absent, `null` or the empty string
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Parse a JSON number or numeric string as `f64`
///
/// On failure the raw value's text is returned as the error.
pub fn parse_number(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| n.to_string()),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| s.clone()),
        other => Err(other.to_string()),
    }
}

/// Coerce an optional raw value to `f64`
///
/// Blank values are `Ok(None)` and are never coerced. A value that does not
/// parse is either returned as `Err(raw)` or nulled, depending on `policy`.
pub fn coerce_numeric(
    value: Option<&Value>,
    policy: NumericErrorPolicy,
) -> Result<Option<f64>, String> {
    let value = match value {
        Some(v) if !is_blank(Some(v)) => v,
        _ => return Ok(None),
    };
    match parse_number(value) {
        Ok(number) => Ok(Some(number)),
        Err(_) if policy == NumericErrorPolicy::Null => Ok(None),
        Err(raw) => Err(raw),
    }
}

/// Join the text of a list field with `;`
///
/// `None` when the field is absent, not a list, or the list is empty.
pub fn join_list(map: &Map<String, Value>, key: &str) -> Option<String> {
    let items = map.get(key)?.as_array()?;
    let parts: Vec<String> = items.iter().filter_map(value_to_text).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(";"))
    }
}
