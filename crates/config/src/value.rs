//! Configuration value model.
//!
//! Values are `serde_json::Value`: null, boolean, number, string, sequence
//! or mapping. Absence is never a `Value`; it is `None` at the API surface.

pub use serde_json::Value;

/// An ordered mapping of segment name to value. Internal nodes of the tree.
pub type Mapping = serde_json::Map<String, Value>;

/// Parse a raw string as JSON, falling back to a plain string.
///
/// `"5432"` becomes a number, `"true"` a boolean, `"[1,2]"` a sequence, and
/// `"localhost"` stays a string. Quote a value (`"\"5432\""`) to force a string.
pub fn parse_lenient(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Human-readable name of a value's variant, used in errors and logs.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
