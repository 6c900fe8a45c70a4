//! Safe field extraction over untyped JSON payloads
//!
//! Venue responses are inconsistent about types: numbers arrive as strings,
//! strings as numbers, and fields go missing without notice. These helpers
//! coerce where sensible and default instead of failing, so a single malformed
//! field never sinks a whole response.

use crate::errors::{ExchangeError, Result};
use serde_json::Value;

/// Get a field as `&Value`, `None` when absent or null
pub fn safe_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value.get(key) {
        Some(Value::Null) | None => None,
        Some(v) => Some(v),
    }
}

/// Get a field as a string, coercing numbers to their decimal representation
pub fn safe_string(value: &Value, key: &str) -> Option<String> {
    match safe_value(value, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Get a field as f64; missing, null, or unparseable values yield `default`
pub fn safe_f64(value: &Value, key: &str, default: f64) -> f64 {
    match safe_value(value, key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.parse::<f64>().unwrap_or(default),
        _ => default,
    }
}

/// Get a required field, failing with a serialization error when absent
pub fn required<'a>(value: &'a Value, key: &str) -> Result<&'a Value> {
    safe_value(value, key)
        .ok_or_else(|| ExchangeError::Serialization(format!("missing required field `{key}`")))
}
