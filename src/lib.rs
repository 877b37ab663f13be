// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod aggregate;
pub mod config;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod sentiment;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::aggregate::{CategoryStat, DayStat, Resolution, SentimentStat, TrendStat};
pub use crate::config::PipelineConfig;
pub use crate::pipeline::{run, RunSummary};
pub use crate::record::{NormalizedRecord, RawRecord, ScoredRecord, SentimentLabel};
pub use crate::sentiment::SentimentAnalyzer;
pub use crate::store::NewsStore;
