use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate sentiment label for a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Positivo")]
    Positive,
    #[serde(rename = "Negativo")]
    Negative,
    #[serde(rename = "Neutro")]
    Neutral,
}

impl Sentiment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positivo",
            Sentiment::Negative => "Negativo",
            Sentiment::Neutral => "Neutro",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked topic of the daily briefing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicBriefing {
    pub topic: String,
    /// Number of articles touching this topic. Always at least 1.
    pub count: usize,
    pub sentiment: Sentiment,
    /// Canned explanatory sentence for the topic.
    pub impact: String,
}

/// The daily ranked-topic summary artifact.
///
/// Fully derived on every computation; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBriefing {
    /// Calendar date of computation, ISO formatted.
    pub date: String,
    /// Up to 3 topics, ranked by occurrence count.
    pub topics: Vec<TopicBriefing>,
    pub summary: String,
}
