//! Daily briefing aggregation: topic counting, ranking, per-topic sentiment
//! and the synthesized summary sentence.

mod model;
mod sentiment;
mod topics;

pub use model::{DailyBriefing, Sentiment, TopicBriefing};
pub use sentiment::score as sentiment_score;
pub use topics::{SEED_TOPICS, effective_topics};

use crate::core::Article;

/// Summary used when the article set produced no topics at all.
pub const EMPTY_SUMMARY: &str = "Sem dados suficientes para extrair tópicos hoje.";

/// Occurrence bucket for one topic. Kept in first-seen order so that the
/// stable sort preserves scan order among equal counts.
struct TopicBucket {
    topic: String,
    count: usize,
    articles: Vec<Article>,
}

/// Build today's briefing from the full article set.
///
/// Pure apart from reading the current date; every call owns its working
/// collections and the input articles are never mutated.
pub fn build(articles: &[Article]) -> DailyBriefing {
    let mut buckets: Vec<TopicBucket> = Vec::new();
    for article in articles {
        for topic in topics::effective_topics(article) {
            match buckets.iter().position(|b| b.topic == topic) {
                Some(i) => {
                    buckets[i].count += 1;
                    buckets[i].articles.push(article.clone());
                }
                None => buckets.push(TopicBucket {
                    topic,
                    count: 1,
                    articles: vec![article.clone()],
                }),
            }
        }
    }

    let date = chrono::Local::now().date_naive().to_string();
    if buckets.is_empty() {
        return DailyBriefing {
            date,
            topics: Vec::new(),
            summary: EMPTY_SUMMARY.to_string(),
        };
    }

    // Stable sort: ties keep the order topics were first seen.
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets.truncate(3);

    let ranked: Vec<TopicBriefing> = buckets
        .into_iter()
        .map(|bucket| TopicBriefing {
            sentiment: sentiment::topic_sentiment(&bucket.articles, &bucket.topic),
            impact: topics::impact_for(&bucket.topic).to_string(),
            topic: bucket.topic,
            count: bucket.count,
        })
        .collect();

    let positions: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(i, tb)| format!("{}) {} ({})", i + 1, tb.topic, tb.sentiment))
        .collect();
    let summary = format!("Top 3 do dia: {}.", positions.join("; "));

    DailyBriefing {
        date,
        topics: ranked,
        summary,
    }
}
