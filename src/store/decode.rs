//! BOM-tolerant decoding of the backing JSON file.

use serde_json::Value;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub(crate) fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

/// Decode raw file bytes into a sequence of record values.
///
/// Attempts a BOM-stripped parse, then a plain UTF-8 parse, then a lenient
/// pass: lossy UTF-8 over the BOM-stripped bytes, also trimming any U+FEFF
/// that survived as text. Content that no step can parse as a JSON array --
/// including empty or whitespace-only files -- yields an empty sequence, not
/// an error.
pub(crate) fn decode_records(bytes: &[u8]) -> Vec<Value> {
    let stripped = strip_bom(bytes);
    for candidate in [stripped, bytes] {
        if let Ok(value) = serde_json::from_slice::<Value>(candidate) {
            return into_records(value);
        }
    }

    let text = String::from_utf8_lossy(stripped);
    let text = text.trim_start_matches('\u{feff}');
    if text.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(text) {
        Ok(value) => into_records(value),
        Err(err) => {
            debug!(error = %err, "backing data unparseable after lenient decode; treating as empty");
            Vec::new()
        }
    }
}

fn into_records(value: Value) -> Vec<Value> {
    match value {
        Value::Array(records) => records,
        other => {
            debug!(
                kind = json_kind(&other),
                "backing data is not an array; treating as empty"
            );
            Vec::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
