//! Text preparation for single-quoted SQL literals
//!
//! The rule is narrow: trim, then double embedded single quotes. No
//! backslash handling, no control-character stripping.

use serde_json::Value;

/// Prepare a raw document value for embedding in a single-quoted literal
///
/// Null yields an empty string. Strings are trimmed and quote-escaped.
/// Any other value is stringified first (its JSON text), so bare numbers
/// and booleans in text fields still convert.
pub fn sanitize(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => escape_single_quotes(text.trim()),
        other => escape_single_quotes(other.to_string().trim()),
    }
}

fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "''")
}
