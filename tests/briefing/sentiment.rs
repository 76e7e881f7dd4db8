use market_pulse_rs::briefing::sentiment_score;

#[test]
fn single_positive_term_scores_plus_one() {
    assert_eq!(sentiment_score("Produção atinge recorde"), 1);
}

#[test]
fn one_of_each_cancels_out() {
    assert_eq!(sentiment_score("recorde apesar da greve"), 0);
}

#[test]
fn two_distinct_negatives_score_minus_two() {
    assert_eq!(sentiment_score("crise e greve no setor"), -2);
}

#[test]
fn repeated_term_counts_once() {
    // membership, not frequency
    assert_eq!(sentiment_score("greve, greve e mais greve"), -1);
}

#[test]
fn scoring_is_case_insensitive() {
    assert_eq!(sentiment_score("RECORDE"), 1);
    assert_eq!(sentiment_score("Greve"), -1);
}

#[test]
fn overlapping_phrase_entries_both_count() {
    // "queda de juros" is a positive entry whose text also contains the
    // negative entry "queda"; both contribute.
    assert_eq!(sentiment_score("queda de juros"), 0);
}

#[test]
fn neutral_text_scores_zero() {
    assert_eq!(sentiment_score("comunicado sem termos relevantes"), 0);
}
