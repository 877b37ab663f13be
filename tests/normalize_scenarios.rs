// tests/normalize_scenarios.rs
//
// End-to-end scenarios for the normalize → classify → aggregate path,
// without a database.

use news_sentiment_etl::aggregate;
use news_sentiment_etl::normalize;
use news_sentiment_etl::{RawRecord, SentimentAnalyzer, SentimentLabel};

fn raw(headline: &str, category: &str, date: &str) -> RawRecord {
    RawRecord {
        headline: headline.to_string(),
        category: category.to_string(),
        date: Some(date.to_string()),
    }
}

#[test]
fn bad_date_record_is_dropped_and_stats_reflect_the_survivor() {
    let input = vec![
        raw("Good news today", "POLITICS", "2021-01-01"),
        raw("", "POLITICS", "not-a-date"),
    ];

    let normalized: Vec<_> = normalize::normalize(input).collect();
    assert_eq!(normalized.len(), 1);
    assert_eq!(normalized[0].headline, "Good news today");

    let scored = SentimentAnalyzer::new().classify_all(&normalized);
    let stats = aggregate::category_counts(&scored);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].category, "POLITICS");
    assert_eq!(stats[0].count, 1);

    // "Good news today" carries a positive lexicon word; the label is
    // deterministic across runs.
    assert_eq!(scored[0].sentiment_label, SentimentLabel::Positive);
    let again = SentimentAnalyzer::new().classify_all(&normalized);
    assert_eq!(again[0].sentiment_score, scored[0].sentiment_score);
    assert_eq!(again[0].sentiment_label, scored[0].sentiment_label);
}

#[test]
fn dropped_records_are_excluded_from_both_sides_of_the_partition_law() {
    let input = vec![
        raw("A", "TECH", "2021-01-01"),
        raw("B", "TECH", "garbage"),
        raw("C", "SPORTS", "2021-01-02"),
    ];
    let normalized: Vec<_> = normalize::normalize(input).collect();
    let scored = SentimentAnalyzer::new().classify_all(&normalized);

    let trend = aggregate::trend_counts(&scored);
    let by_date_total: u64 = trend.iter().map(|t| t.count).sum();
    assert_eq!(by_date_total, normalized.len() as u64);
    assert_eq!(normalized.len(), 2);
}

#[test]
fn empty_corpus_after_filtering_yields_empty_aggregates() {
    let input = vec![raw("A", "TECH", "junk"), raw("B", "TECH", "")];
    let normalized: Vec<_> = normalize::normalize(input).collect();
    assert!(normalized.is_empty());

    let scored = SentimentAnalyzer::new().classify_all(&normalized);
    assert!(aggregate::category_counts(&scored).is_empty());
    assert!(aggregate::trend_counts(&scored).is_empty());
    assert!(aggregate::sentiment_counts(&scored).is_empty());
}
