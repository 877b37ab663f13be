//! News Sentiment ETL — Binary Entrypoint
//! Runs the batch pipeline once: extract the corpus, score headlines,
//! aggregate, and replace the output tables.
//!
//! Configuration comes from env vars (NEWS_CORPUS_PATH, NEWS_DB_PATH),
//! with `.env` support for local runs.

use news_sentiment_etl::{pipeline, PipelineConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = PipelineConfig::from_env();
    tracing::info!(
        input = %cfg.input_path.display(),
        db = %cfg.db_path.display(),
        "starting pipeline run"
    );

    let summary = pipeline::run(&cfg).await?;
    tracing::info!(
        extracted = summary.extracted,
        normalized = summary.normalized,
        dropped = summary.dropped,
        categories = summary.categories,
        "pipeline finished"
    );

    Ok(())
}
