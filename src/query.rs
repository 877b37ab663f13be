//! # Query surface
//! Read-side helpers the interactive layer calls on demand. These apply the
//! same category filtering and calendar bucketing rules as the aggregator,
//! so a chart drawn at any resolution stays numerically consistent with the
//! pre-aggregated tables.

use crate::aggregate::{self, CategoryStat, DayStat, Resolution, SentimentStat, TrendStat};
use crate::record::SentimentLabel;
use crate::store::{NewsStore, Result};

fn category_selected(selected: Option<&[String]>, category: &str) -> bool {
    match selected {
        Some(set) => set.iter().any(|c| c == category),
        None => true,
    }
}

/// Distinct categories present in the corpus, most frequent first.
pub async fn categories(store: &NewsStore) -> Result<Vec<String>> {
    let stats = store.category_stats().await?;
    Ok(stats.into_iter().map(|s| s.category).collect())
}

/// Category counts, optionally restricted to a selected category set.
pub async fn category_stats(
    store: &NewsStore,
    selected: Option<&[String]>,
) -> Result<Vec<CategoryStat>> {
    let stats = store.category_stats().await?;
    Ok(stats
        .into_iter()
        .filter(|s| category_selected(selected, &s.category))
        .collect())
}

/// Trend counts at the requested resolution for the selected categories.
///
/// Daily rows come straight from the grouped store read; monthly and yearly
/// views resample those rows with the aggregator's bucketing rule.
pub async fn trend(
    store: &NewsStore,
    selected: Option<&[String]>,
    resolution: Resolution,
) -> Result<Vec<TrendStat>> {
    let daily: Vec<TrendStat> = store
        .trend_counts()
        .await?
        .into_iter()
        .filter(|t| category_selected(selected, &t.category))
        .collect();

    Ok(match resolution {
        Resolution::Daily => daily,
        coarser => aggregate::resample(&daily, coarser),
    })
}

/// Sentiment cross-tab for the selected categories. Every selected category
/// with any data gets all three labels, zeros included.
pub async fn sentiment_breakdown(
    store: &NewsStore,
    selected: Option<&[String]>,
) -> Result<Vec<SentimentStat>> {
    let grouped: Vec<SentimentStat> = store
        .sentiment_counts()
        .await?
        .into_iter()
        .filter(|s| category_selected(selected, &s.category))
        .collect();

    // Zero-fill missing labels per category; the store only returns pairs
    // that actually occurred.
    let mut categories: Vec<String> = grouped.iter().map(|s| s.category.clone()).collect();
    categories.dedup();

    let mut out = Vec::with_capacity(categories.len() * SentimentLabel::ALL.len());
    for category in categories {
        for label in SentimentLabel::ALL {
            let count = grouped
                .iter()
                .find(|s| s.category == category && s.sentiment_label == label)
                .map(|s| s.count)
                .unwrap_or(0);
            out.push(SentimentStat {
                category: category.clone(),
                sentiment_label: label,
                count,
            });
        }
    }
    Ok(out)
}

/// The `n` busiest days for the selected categories, count descending,
/// ties broken by date ascending.
pub async fn busiest_days(
    store: &NewsStore,
    selected: Option<&[String]>,
    n: usize,
) -> Result<Vec<DayStat>> {
    let daily: Vec<TrendStat> = store
        .trend_counts()
        .await?
        .into_iter()
        .filter(|t| category_selected(selected, &t.category))
        .collect();

    Ok(aggregate::top_days(&daily, n))
}
