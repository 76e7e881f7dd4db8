#![allow(dead_code)]

use std::path::PathBuf;

use market_pulse_rs::{Article, ArticleStore};
use tempfile::TempDir;

/// Store backed by a temp file holding `contents`. The `TempDir` must stay
/// alive for as long as the store is used.
pub fn store_with(contents: &[u8]) -> (TempDir, ArticleStore) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_articles.json");
    std::fs::write(&path, contents).unwrap();
    (dir, ArticleStore::new(path))
}

/// Store whose backing file does not exist.
pub fn missing_store() -> (TempDir, ArticleStore) {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("missing.json");
    (dir, ArticleStore::new(path))
}

/// Minimal article for aggregation tests. Title and content are caller
/// controlled so tests can keep them free of seed and lexicon terms.
pub fn article(id: &str, title: &str, content: &str, topics: &[&str]) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        published_at: "2025-09-28T10:00:00Z".to_string(),
        source: None,
        tickers: Vec::new(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        sentiment: None,
    }
}

pub fn articles_json(articles: &[Article]) -> Vec<u8> {
    serde_json::to_vec_pretty(articles).unwrap()
}
