// tests/thresholds.rs
//
// Label/score agreement under the fixed thresholds, swept across random
// scores spanning [-1, 1] plus the exact boundary values.

use news_sentiment_etl::sentiment::{label_for, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
use news_sentiment_etl::SentimentLabel;
use rand::Rng;

fn expected(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[test]
fn random_scores_label_consistently() {
    let mut rng = rand::rng();
    for _ in 0..10_000 {
        let score: f64 = rng.random_range(-1.0..=1.0);
        assert_eq!(label_for(score), expected(score), "score {score}");
    }
}

#[test]
fn boundary_values_are_neutral() {
    // Thresholds are strict inequalities; the boundaries themselves are Neutral.
    assert_eq!(label_for(POSITIVE_THRESHOLD), SentimentLabel::Neutral);
    assert_eq!(label_for(NEGATIVE_THRESHOLD), SentimentLabel::Neutral);
    assert_eq!(label_for(0.0), SentimentLabel::Neutral);
}

#[test]
fn just_past_boundaries_flip() {
    assert_eq!(label_for(0.050001), SentimentLabel::Positive);
    assert_eq!(label_for(-0.050001), SentimentLabel::Negative);
    assert_eq!(label_for(1.0), SentimentLabel::Positive);
    assert_eq!(label_for(-1.0), SentimentLabel::Negative);
}
