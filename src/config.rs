// src/config.rs
use std::path::PathBuf;

const ENV_INPUT_PATH: &str = "NEWS_CORPUS_PATH";
const ENV_DB_PATH: &str = "NEWS_DB_PATH";

const DEFAULT_INPUT_PATH: &str = "data/News_Category_Dataset_v3.json";
const DEFAULT_DB_PATH: &str = "news.db";

/// Where the pipeline reads from and writes to. Thresholds and the top-days
/// default are policy constants, not configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub db_path: PathBuf,
}

impl PipelineConfig {
    /// Build from env vars with defaults:
    /// 1) $NEWS_CORPUS_PATH, else data/News_Category_Dataset_v3.json
    /// 2) $NEWS_DB_PATH, else news.db
    pub fn from_env() -> Self {
        let input_path = std::env::var(ENV_INPUT_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT_PATH));
        let db_path = std::env::var(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH));
        Self {
            input_path,
            db_path,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_env() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(cfg.db_path, PathBuf::from(DEFAULT_DB_PATH));
    }
}
