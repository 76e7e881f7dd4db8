use chrono::NaiveDate;
use market_pulse_rs::{Sentiment, briefing};

use crate::common;

#[test]
fn ranks_topics_by_occurrence_count() {
    let articles = [
        common::article("r1", "a", "x", &["juros"]),
        common::article("r2", "b", "y", &["juros"]),
        common::article("r3", "c", "z", &["logística"]),
    ];

    let out = briefing::build(&articles);
    assert_eq!(out.topics.len(), 2);
    assert_eq!(out.topics[0].topic, "juros");
    assert_eq!(out.topics[0].count, 2);
    assert_eq!(out.topics[1].topic, "logística");
    assert_eq!(out.topics[1].count, 1);
    assert_eq!(
        out.summary,
        "Top 3 do dia: 1) juros (Neutro); 2) logística (Neutro)."
    );
}

#[test]
fn empty_article_set_yields_placeholder_briefing() {
    let out = briefing::build(&[]);
    assert!(out.topics.is_empty());
    assert_eq!(out.summary, "Sem dados suficientes para extrair tópicos hoje.");
    // the date is today's calendar date, not derived from any article
    assert!(NaiveDate::parse_from_str(&out.date, "%Y-%m-%d").is_ok());
}

#[test]
fn articles_without_topics_yield_placeholder_briefing() {
    let articles = [common::article("n1", "sem assunto", "texto neutro", &[])];
    let out = briefing::build(&articles);
    assert!(out.topics.is_empty());
    assert_eq!(out.summary, "Sem dados suficientes para extrair tópicos hoje.");
}

#[test]
fn equal_counts_keep_first_seen_order_and_truncate_to_three() {
    let articles = [
        common::article("t1", "a", "x", &["um"]),
        common::article("t2", "b", "y", &["dois"]),
        common::article("t3", "c", "z", &["tres"]),
        common::article("t4", "d", "w", &["quatro"]),
    ];

    let out = briefing::build(&articles);
    assert_eq!(out.topics.len(), 3);
    assert_eq!(out.topics[0].topic, "um");
    assert_eq!(out.topics[1].topic, "dois");
    assert_eq!(out.topics[2].topic, "tres");
    assert_eq!(
        out.summary,
        "Top 3 do dia: 1) um (Neutro); 2) dois (Neutro); 3) tres (Neutro)."
    );
}

#[test]
fn substring_matches_count_alongside_preexisting_topics() {
    let articles = [
        common::article("s1", "a", "x", &["juros"]),
        // carries no topic label; detected purely from the text
        common::article("s2", "debate sobre juros", "texto neutro", &[]),
    ];

    let out = briefing::build(&articles);
    assert_eq!(out.topics[0].topic, "juros");
    assert_eq!(out.topics[0].count, 2);
}

#[test]
fn known_topics_get_their_impact_sentence_and_others_the_fallback() {
    let articles = [
        common::article("i1", "a", "x", &["juros"]),
        common::article("i2", "b", "y", &["assunto-proprio"]),
    ];

    let out = briefing::build(&articles);
    let juros = out.topics.iter().find(|t| t.topic == "juros").unwrap();
    assert_eq!(
        juros.impact,
        "Queda de juros tende a favorecer consumo, varejo e construção; alta encarece crédito."
    );

    let other = out.topics.iter().find(|t| t.topic == "assunto-proprio").unwrap();
    assert_eq!(
        other.impact,
        "Impacto varia por setor; monitorar próximos desdobramentos."
    );
}

#[test]
fn topic_sentiment_unions_labeled_and_substring_articles() {
    let articles = [
        // labeled with the topic, positive text
        common::article("u1", "Sobre taxas", "cenário otimista", &["juros"]),
        // matches only by substring, strongly negative text
        common::article("u2", "juros", "crise e greve", &[]),
    ];

    let out = briefing::build(&articles);
    assert_eq!(out.topics[0].topic, "juros");
    assert_eq!(out.topics[0].count, 2);
    // +1 from u1, -2 from u2
    assert_eq!(out.topics[0].sentiment, Sentiment::Negative);
}

#[test]
fn demo_set_end_to_end() {
    let (_dir, store) = common::missing_store();
    let out = store.daily_briefing();

    assert_eq!(out.topics.len(), 2);

    let juros = out.topics.iter().find(|t| t.topic == "juros").unwrap();
    assert_eq!(juros.count, 1);
    assert_eq!(juros.sentiment.as_str(), "Positivo");

    let logistica = out.topics.iter().find(|t| t.topic == "logística").unwrap();
    assert_eq!(logistica.count, 1);
    assert_eq!(logistica.sentiment.as_str(), "Negativo");

    assert_eq!(
        out.summary,
        "Top 3 do dia: 1) juros (Positivo); 2) logística (Negativo)."
    );
}
