//! market-pulse-rs: article normalization and daily briefing engine.
//!
//! Loads news-article records from heterogeneous feeds, reconciles them into
//! a canonical schema, and derives a daily briefing: the top recurring
//! topics, a sentiment label per topic, and a one-paragraph summary.

pub mod briefing;
pub mod core;
pub mod ingest;
pub mod normalize;
pub mod store;

pub use crate::briefing::{DailyBriefing, Sentiment, TopicBriefing};
pub use crate::core::{Article, Page, PulseError};
pub use crate::ingest::{IngestBuilder, IngestSummary};
pub use crate::normalize::Parsed;
pub use crate::store::ArticleStore;
