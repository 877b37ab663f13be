//! record.rs — canonical record shapes flowing through the pipeline.
//!
//! `RawRecord` is one line of the source dump, untouched. `NormalizedRecord`
//! has a parsed calendar date and only the three fields the rest of the
//! pipeline cares about. `ScoredRecord` adds the classifier's output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One object from the newline-delimited JSON corpus, as extracted.
/// Unknown fields in the source (authors, links, ...) are dropped by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub headline: String,
    pub category: String,
    /// Raw timestamp string; may be absent or unparsable.
    #[serde(default)]
    pub date: Option<String>,
}

/// A record that survived date parsing. `publish_date` is never a sentinel;
/// records without a usable date are dropped during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub headline: String,
    pub category: String,
    pub publish_date: NaiveDate,
}

/// Discrete sentiment bucket derived from the compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// All labels in presentation order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(SentimentLabel::Positive),
            "Neutral" => Ok(SentimentLabel::Neutral),
            "Negative" => Ok(SentimentLabel::Negative),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized record plus the classifier's verdict.
///
/// Invariant: `sentiment_label` always agrees with `sentiment_score` under
/// the thresholds in [`crate::sentiment`]; the only constructor is the
/// classifier itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub headline: String,
    pub category: String,
    pub publish_date: NaiveDate,
    /// Compound polarity in [-1, 1].
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
}
