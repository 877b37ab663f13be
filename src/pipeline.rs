//! # Pipeline
//! Single-pass batch run: extract → normalize → classify → aggregate → load.
//! Everything before the load is pure and in-memory; the load is full
//! replace, so re-running on unchanged input is idempotent and a failed run
//! can simply be retried from scratch.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::aggregate;
use crate::config::PipelineConfig;
use crate::extract;
use crate::normalize;
use crate::record::{NormalizedRecord, RawRecord, ScoredRecord};
use crate::sentiment::SentimentAnalyzer;
use crate::store::NewsStore;

/// Per-stage counts from one run, for the operator log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub extracted: usize,
    pub normalized: usize,
    /// Records dropped for an absent or unparsable date.
    pub dropped: usize,
    pub categories: usize,
}

/// The in-memory half of the run: everything up to (not including) the load.
/// Pure, so tests can exercise it without a database.
pub fn transform(raw: Vec<RawRecord>) -> (Vec<NormalizedRecord>, Vec<ScoredRecord>) {
    let extracted = raw.len();
    let normalized: Vec<NormalizedRecord> = normalize::normalize(raw).collect();
    info!(
        kept = normalized.len(),
        dropped = extracted - normalized.len(),
        "normalized records"
    );

    let analyzer = SentimentAnalyzer::new();
    let scored = analyzer.classify_all(&normalized);
    info!(scored = scored.len(), "classified headlines");

    (normalized, scored)
}

/// Write all output tables. Each table is replaced atomically on its own;
/// there is no cross-table transaction. A storage error here fails the run.
pub async fn load(
    store: &NewsStore,
    normalized: &[NormalizedRecord],
    scored: &[ScoredRecord],
    category_stats: &[aggregate::CategoryStat],
) -> Result<()> {
    store
        .replace_raw_news(normalized)
        .await
        .context("replacing raw_news")?;
    store
        .replace_sentiment_news(scored)
        .await
        .context("replacing sentiment_news")?;
    store
        .replace_category_stats(category_stats)
        .await
        .context("replacing category_stats")?;
    Ok(())
}

/// Run the whole pipeline once against an already-open store.
pub async fn run_with_store(input: &Path, store: &NewsStore) -> Result<RunSummary> {
    let raw = extract::read_ndjson(input)?;
    let extracted = raw.len();

    let (normalized, scored) = transform(raw);
    let dropped = extracted - normalized.len();

    let category_stats = aggregate::category_counts(&scored);
    info!(categories = category_stats.len(), "aggregated category counts");

    load(store, &normalized, &scored, &category_stats).await?;
    info!("output tables replaced");

    Ok(RunSummary {
        extracted,
        normalized: normalized.len(),
        dropped,
        categories: category_stats.len(),
    })
}

/// Convenience entrypoint used by the binary: opens the store from config.
pub async fn run(cfg: &PipelineConfig) -> Result<RunSummary> {
    let store = NewsStore::open(&cfg.db_path)
        .await
        .with_context(|| format!("opening store at {}", cfg.db_path.display()))?;
    run_with_store(&cfg.input_path, &store).await
}
