//! File-backed article store and its read surfaces.
//!
//! Every read re-loads and re-normalizes the backing file, so concurrent
//! callers each operate on an independent copy and nothing is cached or
//! shared between invocations.

mod decode;

pub(crate) use decode::strip_bom;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::briefing::{self, DailyBriefing};
use crate::core::{Article, Page};
use crate::normalize;

/// Largest page size accepted by the listing and search surfaces.
const MAX_PER_PAGE: usize = 100;

/// Handle to the backing article collection.
#[derive(Debug, Clone)]
pub struct ArticleStore {
    data_path: PathBuf,
}

impl ArticleStore {
    /// Create a store backed by the given JSON file.
    ///
    /// The file does not need to exist; an absent or empty backing file
    /// yields the built-in demo set.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Load and normalize the current article set, preserving input order.
    pub fn articles(&self) -> Vec<Article> {
        let raw = match std::fs::read(&self.data_path) {
            Ok(bytes) => decode::decode_records(&bytes),
            Err(err) => {
                debug!(path = %self.data_path.display(), error = %err, "backing file unreadable");
                Vec::new()
            }
        };
        if raw.is_empty() {
            return demo_articles();
        }
        raw.iter()
            .map(|record| normalize::parse_record(record).into_article())
            .collect()
    }

    /// One page of the full article set.
    pub fn page(&self, page: usize, per_page: usize) -> Page {
        paginate(self.articles(), page, per_page)
    }

    /// Case-insensitive substring search over title and content, paginated.
    pub fn search(&self, query: &str, page: usize, per_page: usize) -> Page {
        let needle = query.to_lowercase();
        let hits = self
            .articles()
            .into_iter()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.content.to_lowercase().contains(&needle)
            })
            .collect();
        paginate(hits, page, per_page)
    }

    /// Look up a single article by id.
    pub fn article(&self, id: &str) -> Option<Article> {
        self.articles().into_iter().find(|a| a.id == id)
    }

    /// Derive today's briefing from the current article set.
    pub fn daily_briefing(&self) -> DailyBriefing {
        briefing::build(&self.articles())
    }
}

/// Slice a result set into a page. Parameters outside the accepted domain
/// are clamped rather than rejected; a page past the end has empty items
/// with `total` intact.
fn paginate(items: Vec<Article>, page: usize, per_page: usize) -> Page {
    let page = page.max(1);
    let per_page = per_page.clamp(1, MAX_PER_PAGE);
    let total = items.len();
    let start = (page - 1).saturating_mul(per_page);
    let items = items.into_iter().skip(start).take(per_page).collect();
    Page {
        items,
        page,
        per_page,
        total,
    }
}

/// Built-in two-article seed used when no backing data exists.
fn demo_articles() -> Vec<Article> {
    vec![
        Article {
            id: "a1".to_string(),
            title: "Taxa de juros recua".to_string(),
            content: "Banco Central reduz a taxa básica, impulsionando setores sensíveis a crédito."
                .to_string(),
            published_at: "2025-09-28T10:00:00Z".to_string(),
            source: Some("Demo".to_string()),
            tickers: vec!["^BVSP".to_string()],
            topics: vec!["juros".to_string()],
            sentiment: Some("Positivo".to_string()),
        },
        Article {
            id: "a2".to_string(),
            title: "Greve em setor logístico".to_string(),
            content: "Interrupções em portos aumentam risco de desabastecimento e pressionam prazos."
                .to_string(),
            published_at: "2025-09-28T12:00:00Z".to_string(),
            source: Some("Demo".to_string()),
            tickers: Vec::new(),
            topics: vec!["logística".to_string()],
            sentiment: Some("Negativo".to_string()),
        },
    ]
}
