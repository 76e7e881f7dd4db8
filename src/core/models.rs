use serde::{Deserialize, Serialize};

/* ----- ARTICLES (shared by store/, briefing/, ingest/) ----- */

/// A normalized news article.
///
/// After normalization `id`, `title`, `content` and `published_at` are
/// always present, even when the source record omitted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier within a loaded set.
    pub id: String,
    /// The headline of the article.
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// ISO-8601 timestamp text, kept as supplied by the feed.
    pub published_at: String,
    /// The publisher, when known.
    #[serde(default)]
    pub source: Option<String>,
    /// Ticker symbols the article mentions.
    #[serde(default)]
    pub tickers: Vec<String>,
    /// Topic labels, pre-supplied by upstream ingestion or detected later.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Upstream-supplied sentiment label; never computed by this crate.
    #[serde(default)]
    pub sentiment: Option<String>,
}

/* ----- PAGINATION (shared by the listing and search surfaces) ----- */

/// One page of articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub items: Vec<Article>,
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
    /// Total number of matching articles across all pages.
    pub total: usize,
}
