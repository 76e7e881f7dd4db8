//! Two-path record normalization: strict schema first, lenient coercion second.
//!
//! Normalization is total. Any JSON value, however malformed, yields a
//! structurally valid [`Article`]; records are never dropped.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::core::Article;

/// How a raw record was turned into an [`Article`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// The record already matched the canonical schema.
    Strict(Article),
    /// The record was rebuilt field-by-field from a foreign shape.
    Coerced(Article),
}

impl Parsed {
    /// Unwrap the normalized article, discarding the parse tag.
    pub fn into_article(self) -> Article {
        match self {
            Parsed::Strict(article) | Parsed::Coerced(article) => article,
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Parsed::Strict(_))
    }
}

/// Normalize one raw record.
pub fn parse_record(raw: &Value) -> Parsed {
    match serde_json::from_value::<Article>(raw.clone()) {
        Ok(article) => Parsed::Strict(article),
        Err(err) => {
            debug!(error = %err, "record failed strict parse; coercing");
            Parsed::Coerced(coerce_record(raw))
        }
    }
}

/// Field-by-field extraction for records that miss the canonical schema.
/// Every field has a defaulting fallback; this path cannot fail.
fn coerce_record(raw: &Value) -> Article {
    let title = str_field(raw, "title").unwrap_or_default();

    let content = str_field(raw, "content")
        .or_else(|| str_field(raw, "description"))
        .unwrap_or_default();

    let published_at = str_field(raw, "published_at")
        .or_else(|| str_field(raw, "publishedAt"))
        .unwrap_or_else(now_utc_iso);

    let id = id_field(raw, "id")
        .or_else(|| id_field(raw, "url"))
        .unwrap_or_else(|| stable_id(&title));

    Article {
        id,
        title,
        content,
        published_at,
        source: source_field(raw),
        tickers: str_seq(raw, "tickers"),
        topics: str_seq(raw, "topics"),
        sentiment: str_field(raw, "sentiment"),
    }
}

/// Non-empty string at `key`, if any. Empty strings count as absent so the
/// next fallback in the chain gets a chance.
pub(crate) fn str_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Identifier at `key`: a non-empty string, or a number rendered as text.
pub(crate) fn id_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// `source` is either a plain string or a nested object carrying `name`.
pub(crate) fn source_field(raw: &Value) -> Option<String> {
    match raw.get("source") {
        Some(Value::Object(map)) => map.get("name").and_then(Value::as_str).map(str::to_owned),
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn str_seq(raw: &Value, key: &str) -> Vec<String> {
    match raw.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Stable fallback identifier for records carrying neither id nor url.
/// Hashes the title explicitly so repeated loads of the same input agree.
pub(crate) fn stable_id(title: &str) -> String {
    hex::encode(Sha256::digest(title.as_bytes()))
}

/// Current UTC instant as ISO-8601 with a `Z` suffix.
pub(crate) fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
