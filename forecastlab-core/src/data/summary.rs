//! JSON summary record loader.

use super::LoadError;
use crate::domain::SummaryRecord;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Load a summary-statistics file; the top level must be a JSON object.
pub fn load_summary(path: &Path) -> Result<SummaryRecord, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_summary(path, &content)
}

/// Parse a summary record from a string; `source` is used in errors.
pub fn parse_summary(source: &Path, content: &str) -> Result<SummaryRecord, LoadError> {
    let content = null_non_finite(content);
    let value: Value = serde_json::from_str(&content).map_err(|e| LoadError::Json {
        path: source.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(fields) => {
            debug!(path = %source.display(), keys = fields.len(), "loaded summary record");
            Ok(SummaryRecord::new(source, fields))
        }
        other => Err(LoadError::NotARecord {
            path: source.to_path_buf(),
            found: json_kind(&other),
        }),
    }
}

/// Bare non-finite tokens Python's `json.dump` emits by default.
const NON_FINITE_TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Replace bare `NaN`, `Infinity` and `-Infinity` outside string literals
/// with `null`. Text without them is borrowed unchanged.
fn null_non_finite(content: &str) -> Cow<'_, str> {
    if !NON_FINITE_TOKENS.iter().any(|t| content.contains(t)) {
        return Cow::Borrowed(content);
    }

    let bytes = content.as_bytes();
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        let boundary_before = i == 0 || !bytes[i - 1].is_ascii_alphanumeric();
        let token = NON_FINITE_TOKENS.iter().find(|t| {
            bytes[i..].starts_with(t.as_bytes())
                && bytes
                    .get(i + t.len())
                    .map_or(true, |next| !next.is_ascii_alphanumeric())
        });
        match token {
            Some(t) if boundary_before => {
                out.push_str(&content[copied..i]);
                out.push_str("null");
                i += t.len();
                copied = i;
            }
            _ => i += 1,
        }
    }
    out.push_str(&content[copied..]);
    Cow::Owned(out)
}

/// Human name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
