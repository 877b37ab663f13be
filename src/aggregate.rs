//! # Aggregator
//! Pure, total, deterministic aggregation over scored records: category
//! counts, per-day trend counts, sentiment cross-tabs, busiest-day rankings,
//! and calendar resampling of trend counts.
//!
//! Calendar buckets are labeled by their first day (month → day 1, year →
//! Jan 1) at every resolution, so totals line up across resolutions.
//! Empty input yields empty output, never an error.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::record::{ScoredRecord, SentimentLabel};

/// Product default for busiest-day rankings.
pub const DEFAULT_TOP_DAYS: usize = 10;

/// One row of `category_stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: u64,
}

/// Article count for one (category, bucket date) pair. No zero-filled gaps:
/// a pair only appears if at least one record fell into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendStat {
    pub category: String,
    pub publish_date: NaiveDate,
    pub count: u64,
}

/// Article count for one (category, sentiment label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentStat {
    pub category: String,
    pub sentiment_label: SentimentLabel,
    pub count: u64,
}

/// Total article count for one day, across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStat {
    pub publish_date: NaiveDate,
    pub count: u64,
}

/// Time bucketing for trend counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Daily,
    Monthly,
    Yearly,
}

impl Resolution {
    /// The calendar bucket a date falls into, labeled by the bucket's
    /// first day.
    pub fn bucket(self, date: NaiveDate) -> NaiveDate {
        match self {
            Resolution::Daily => date,
            Resolution::Monthly => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .expect("first of month is a valid date"),
            Resolution::Yearly => NaiveDate::from_ymd_opt(date.year(), 1, 1)
                .expect("first of year is a valid date"),
        }
    }
}

/// Count records per category. Sorted by count descending, then category
/// ascending so re-runs produce identical tables.
pub fn category_counts(records: &[ScoredRecord]) -> Vec<CategoryStat> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for r in records {
        *counts.entry(r.category.as_str()).or_default() += 1;
    }

    let mut out: Vec<CategoryStat> = counts
        .into_iter()
        .map(|(category, count)| CategoryStat {
            category: category.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    out
}

/// Count records per (category, publish date), sorted by category then date.
/// This is the finest granularity; coarser views come from [`resample`].
pub fn trend_counts(records: &[ScoredRecord]) -> Vec<TrendStat> {
    let mut counts: BTreeMap<(&str, NaiveDate), u64> = BTreeMap::new();
    for r in records {
        *counts.entry((r.category.as_str(), r.publish_date)).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((category, publish_date), count)| TrendStat {
            category: category.to_string(),
            publish_date,
            count,
        })
        .collect()
}

/// Cross-tab of (category, sentiment label). Every category that appears
/// gets rows for all three labels, zeros included, so a chart never drops a
/// label that simply had no matches.
pub fn sentiment_counts(records: &[ScoredRecord]) -> Vec<SentimentStat> {
    let mut counts: BTreeMap<(&str, SentimentLabel), u64> = BTreeMap::new();
    for r in records {
        *counts.entry((r.category.as_str(), r.sentiment_label)).or_default() += 1;
    }

    let categories: Vec<&str> = {
        let mut cs: Vec<&str> = counts.keys().map(|(c, _)| *c).collect();
        cs.dedup();
        cs
    };

    let mut out = Vec::with_capacity(categories.len() * SentimentLabel::ALL.len());
    for category in categories {
        for label in SentimentLabel::ALL {
            out.push(SentimentStat {
                category: category.to_string(),
                sentiment_label: label,
                count: counts.get(&(category, label)).copied().unwrap_or(0),
            });
        }
    }
    out
}

/// Re-bucket daily trend counts into coarser calendar buckets by summation.
/// Never synthesizes zero rows: days with no data contribute nothing.
pub fn resample(trend: &[TrendStat], resolution: Resolution) -> Vec<TrendStat> {
    let mut counts: BTreeMap<(&str, NaiveDate), u64> = BTreeMap::new();
    for t in trend {
        let bucket = resolution.bucket(t.publish_date);
        *counts.entry((t.category.as_str(), bucket)).or_default() += t.count;
    }

    counts
        .into_iter()
        .map(|((category, publish_date), count)| TrendStat {
            category: category.to_string(),
            publish_date,
            count,
        })
        .collect()
}

/// Total counts per day across all categories, sorted by count descending
/// with ties broken by date ascending, truncated to `n`.
pub fn top_days(trend: &[TrendStat], n: usize) -> Vec<DayStat> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for t in trend {
        *counts.entry(t.publish_date).or_default() += t.count;
    }

    let mut out: Vec<DayStat> = counts
        .into_iter()
        .map(|(publish_date, count)| DayStat {
            publish_date,
            count,
        })
        .collect();
    out.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.publish_date.cmp(&b.publish_date))
    });
    out.truncate(n);
    out
}
