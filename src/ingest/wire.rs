use serde::Deserialize;
use serde_json::Value;

/// One entry of the sources file. Entries without an endpoint are skipped.
#[derive(Debug, Deserialize)]
pub(crate) struct NewsSource {
    #[serde(default)]
    pub(crate) api_endpoint: Option<String>,
}

/// Extract the record list from a feed body: either a bare JSON array or an
/// envelope object carrying `articles`. Anything else yields no records.
pub(crate) fn feed_records(payload: Value) -> Vec<Value> {
    match payload {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("articles") {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
