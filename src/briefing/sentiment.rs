//! Lexicon-based sentiment scoring.

use super::model::Sentiment;
use crate::core::Article;

/// Positive market-sentiment terms.
const POSITIVE: [&str; 11] = [
    "alta",
    "otimista",
    "positivo",
    "cresce",
    "queda de juros",
    "expansão",
    "recorde",
    "avanço",
    "reduz",
    "redução",
    "aumenta demanda",
];

/// Negative market-sentiment terms.
const NEGATIVE: [&str; 12] = [
    "queda",
    "cai",
    "baixa",
    "piora",
    "crise",
    "greve",
    "atraso",
    "pressão de custos",
    "inflação",
    "risco",
    "escassez",
    "demissão",
];

/// Signed sentiment score for a block of text.
///
/// Each lexicon entry contributes at most +1/-1 regardless of how many
/// times it occurs: membership, not frequency. No length normalization.
pub fn score(text: &str) -> i32 {
    let t = text.to_lowercase();
    let pos = POSITIVE.iter().filter(|w| t.contains(*w)).count() as i32;
    let neg = NEGATIVE.iter().filter(|w| t.contains(*w)).count() as i32;
    pos - neg
}

/// Aggregate label for a topic over its associated articles.
///
/// An article is associated when it carries the topic in its topic list or
/// the topic term occurs in its lower-cased title+content; the union of the
/// two rules is deliberate.
pub(crate) fn topic_sentiment(articles: &[Article], topic: &str) -> Sentiment {
    let mut sum = 0;
    for article in articles {
        let text = format!("{} {}", article.title, article.content);
        if article.topics.iter().any(|t| t == topic) || text.to_lowercase().contains(topic) {
            sum += score(&text);
        }
    }
    if sum > 0 {
        Sentiment::Positive
    } else if sum < 0 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
