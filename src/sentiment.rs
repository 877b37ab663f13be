//! # Sentiment Classifier
//! Lexicon-based polarity scoring for headlines. The lexicon maps words to
//! integer valences; the summed valence is squashed into a compound score in
//! (-1, 1) and bucketed into a discrete label by fixed thresholds.
//!
//! Per-headline classification is independent and order-insensitive. An
//! unscorable headline (empty, no known words) scores 0.0 / Neutral — a
//! single bad record never aborts a batch.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::record::{NormalizedRecord, ScoredRecord, SentimentLabel};

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Scores above this are Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores below this are Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Threshold policy: score → discrete label. Fixed, not configurable per run.
pub fn label_for(score: f64) -> SentimentLabel {
    if score > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[derive(Debug, Clone)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Lexicon valence for a word (0 if unknown).
    #[inline]
    fn word_score(&self, w: &str) -> i32 {
        *LEXICON.get(w).unwrap_or(&0)
    }

    /// Summed lexicon valence of a text. A negator within the previous
    /// 1..=3 tokens inverts the sign of a word's valence.
    fn raw_score(&self, text: &str) -> i32 {
        let tokens: Vec<String> = tokenize(text).collect();
        let mut score: i32 = 0;

        for i in 0..tokens.len() {
            let base = self.word_score(tokens[i].as_str());
            if base == 0 {
                continue;
            }
            let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            score += if negated { -base } else { base };
        }

        score
    }

    /// Compound polarity in (-1, 1). Zero for empty or all-unknown text.
    pub fn score_headline(&self, text: &str) -> f64 {
        compound(self.raw_score(text))
    }

    /// Score one record. The label is derived from the score here and
    /// nowhere else, so the two always agree.
    pub fn classify(&self, record: &NormalizedRecord) -> ScoredRecord {
        let sentiment_score = self.score_headline(&record.headline);
        ScoredRecord {
            headline: record.headline.clone(),
            category: record.category.clone(),
            publish_date: record.publish_date,
            sentiment_score,
            sentiment_label: label_for(sentiment_score),
        }
    }

    /// Score a whole batch. Record order is preserved but carries no
    /// meaning; downstream aggregation is order-insensitive.
    pub fn classify_all(&self, records: &[NormalizedRecord]) -> Vec<ScoredRecord> {
        records.iter().map(|r| self.classify(r)).collect()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Squash a summed integer valence into (-1, 1), VADER-style.
fn compound(raw: i32) -> f64 {
    if raw == 0 {
        return 0.0;
    }
    let r = raw as f64;
    r / (r * r + 15.0).sqrt()
}

/// Alphanumeric tokens, lower-cased.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "won't"
            | "can't"
            | "cannot"
            | "without"
    )
}
