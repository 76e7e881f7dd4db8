use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::core::{Article, PulseError};
use crate::ingest::wire;
use crate::normalize;

/// Endpoints with this prefix resolve against the data directory instead of
/// going over the network.
const LOCAL_SCHEME: &str = "local://";

/// Counters reported by one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Source descriptors carrying an endpoint.
    pub sources: usize,
    /// Sources that failed to fetch or parse and were skipped.
    pub failed: usize,
    /// Articles mapped across all successful sources, before dedupe.
    pub fetched: usize,
    /// Articles dropped as id duplicates.
    pub duplicates: usize,
    /// Articles written to the output file.
    pub written: usize,
}

pub(super) async fn run(
    http: &reqwest::Client,
    sources_path: &Path,
    output_path: &Path,
    data_dir: &Path,
) -> Result<IngestSummary, PulseError> {
    let bytes = std::fs::read(sources_path)?;
    let sources: Vec<wire::NewsSource> =
        serde_json::from_slice(crate::store::strip_bom(&bytes))?;

    let endpoints: Vec<String> = sources
        .into_iter()
        .filter_map(|s| s.api_endpoint)
        .collect();

    let fetches = endpoints
        .iter()
        .map(|endpoint| fetch_feed(http, data_dir, endpoint));
    let results = futures::future::join_all(fetches).await;

    let mut failed = 0;
    let mut articles: Vec<Article> = Vec::new();
    for (endpoint, result) in endpoints.iter().zip(results) {
        match result {
            Ok(records) => {
                debug!(endpoint = %endpoint, count = records.len(), "source fetched");
                articles.extend(records.iter().map(map_record));
            }
            Err(err) => {
                warn!(endpoint = %endpoint, error = %err, "source failed; skipping");
                failed += 1;
            }
        }
    }
    let fetched = articles.len();

    // dedupe by id, first occurrence wins
    let mut seen = HashSet::new();
    let mut deduped: Vec<Article> = Vec::new();
    for article in articles {
        if seen.insert(article.id.clone()) {
            deduped.push(article);
        }
    }
    let written = deduped.len();

    // plain UTF-8, no BOM
    std::fs::write(output_path, serde_json::to_string_pretty(&deduped)?)?;

    Ok(IngestSummary {
        sources: endpoints.len(),
        failed,
        fetched,
        duplicates: fetched - written,
        written,
    })
}

async fn fetch_feed(
    http: &reqwest::Client,
    data_dir: &Path,
    endpoint: &str,
) -> Result<Vec<Value>, PulseError> {
    if let Some(relpath) = endpoint.strip_prefix(LOCAL_SCHEME) {
        let bytes = std::fs::read(data_dir.join(relpath))?;
        let payload: Value = serde_json::from_slice(crate::store::strip_bom(&bytes))?;
        return Ok(wire::feed_records(payload));
    }

    let url = Url::parse(endpoint)?;
    let resp = http.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(PulseError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    let payload: Value = resp.json().await?;
    Ok(wire::feed_records(payload))
}

/// Map one feed record to the canonical shape.
///
/// Precedence differs from the store-side coercion on purpose: feed records
/// identify by `url` first, timestamp by `publishedAt` first, and an unknown
/// publisher becomes `"unknown"`. Topic and sentiment labels are left for
/// the briefing side to derive.
fn map_record(raw: &Value) -> Article {
    let title = normalize::str_field(raw, "title").unwrap_or_default();

    let content = normalize::str_field(raw, "content")
        .or_else(|| normalize::str_field(raw, "description"))
        .unwrap_or_default();

    let published_at = normalize::str_field(raw, "publishedAt")
        .or_else(|| normalize::str_field(raw, "published_at"))
        .unwrap_or_else(normalize::now_utc_iso);

    let id = normalize::id_field(raw, "url")
        .or_else(|| normalize::id_field(raw, "id"))
        .unwrap_or_else(|| normalize::stable_id(&title));

    Article {
        id,
        title,
        content,
        published_at,
        source: normalize::source_field(raw)
            .filter(|s| !s.is_empty())
            .or_else(|| Some("unknown".to_string())),
        tickers: Vec::new(),
        topics: Vec::new(),
        sentiment: None,
    }
}
