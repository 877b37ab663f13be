//! # Persistence Gateway
//! SQLite-backed store for the pipeline's output tables. All database work
//! goes through [`tokio_rusqlite`] so it runs on a dedicated thread without
//! blocking the async runtime.
//!
//! Write policy is full replace: each `replace_*` method clears and refills
//! one table inside a single transaction, so a concurrent reader sees the
//! old contents or the new ones, never a mix. There is no cross-table
//! transaction; a reader mid-run may observe tables from different runs.
//! That staleness window is accepted — callers serialize pipeline runs.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use crate::aggregate::{CategoryStat, SentimentStat, TrendStat};
use crate::record::{NormalizedRecord, ScoredRecord, SentimentLabel};

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] tokio_rusqlite::Error),

    #[error("malformed stored date: {0}")]
    DateParse(String),

    #[error("unknown stored sentiment label: {0}")]
    Label(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Dates are stored as plain ISO strings; SQLite has no date type.
const DATE_FMT: &str = "%Y-%m-%d";

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS raw_news (
    headline     TEXT NOT NULL,
    category     TEXT NOT NULL,
    publish_date TEXT NOT NULL    -- ISO date, never NULL by pipeline contract
);

CREATE TABLE IF NOT EXISTS sentiment_news (
    headline        TEXT NOT NULL,
    category        TEXT NOT NULL,
    publish_date    TEXT NOT NULL,
    sentiment_score REAL NOT NULL,
    sentiment_label TEXT NOT NULL  -- 'Positive' | 'Neutral' | 'Negative'
);

CREATE TABLE IF NOT EXISTS category_stats (
    category TEXT NOT NULL,
    count    INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS raw_news_category_idx  ON raw_news(category);
CREATE INDEX IF NOT EXISTS raw_news_date_idx      ON raw_news(publish_date);
CREATE INDEX IF NOT EXISTS sentiment_category_idx ON sentiment_news(category);
";

fn encode_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

fn decode_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).map_err(|_| Error::DateParse(s.to_string()))
}

fn decode_label(s: &str) -> Result<SentimentLabel> {
    s.parse().map_err(|_| Error::Label(s.to_string()))
}

// Row shapes as they come off the wire; decoded into typed rows outside
// the connection closure.
struct RawTrendRow {
    category: String,
    publish_date: String,
    count: u64,
}

struct RawSentimentRow {
    category: String,
    sentiment_label: String,
    count: u64,
}

struct RawNewsRow {
    headline: String,
    category: String,
    publish_date: String,
}

/// The pipeline's gateway to the relational store.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct NewsStore {
    conn: tokio_rusqlite::Connection,
}

impl NewsStore {
    /// Open (or create) a store at `path` and run schema initialisation.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = tokio_rusqlite::Connection::open(path).await?;
        let store = Self { conn };
        store.init_schema().await?;
        Ok(store)
    }

    /// Open an in-memory store — useful for testing.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = tokio_rusqlite::Connection::open_in_memory().await?;
        let store = Self { conn };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(SCHEMA)?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    // ── Full-replace writes ──────────────────────────────────────────────

    /// Replace `raw_news` with the given normalized records.
    pub async fn replace_raw_news(&self, rows: &[NormalizedRecord]) -> Result<()> {
        let encoded: Vec<(String, String, String)> = rows
            .iter()
            .map(|r| {
                (
                    r.headline.clone(),
                    r.category.clone(),
                    encode_date(r.publish_date),
                )
            })
            .collect();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute("DELETE FROM raw_news", [])?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO raw_news (headline, category, publish_date)
                         VALUES (?1, ?2, ?3)",
                    )?;
                    for (headline, category, publish_date) in &encoded {
                        stmt.execute(rusqlite::params![headline, category, publish_date])?;
                    }
                }
                tx.commit()?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Replace `sentiment_news` with the given scored records.
    pub async fn replace_sentiment_news(&self, rows: &[ScoredRecord]) -> Result<()> {
        let encoded: Vec<(String, String, String, f64, &'static str)> = rows
            .iter()
            .map(|r| {
                (
                    r.headline.clone(),
                    r.category.clone(),
                    encode_date(r.publish_date),
                    r.sentiment_score,
                    r.sentiment_label.as_str(),
                )
            })
            .collect();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute("DELETE FROM sentiment_news", [])?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO sentiment_news
                           (headline, category, publish_date, sentiment_score, sentiment_label)
                         VALUES (?1, ?2, ?3, ?4, ?5)",
                    )?;
                    for (headline, category, publish_date, score, label) in &encoded {
                        stmt.execute(rusqlite::params![
                            headline,
                            category,
                            publish_date,
                            score,
                            label
                        ])?;
                    }
                }
                tx.commit()?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    /// Replace `category_stats` with the given counts, preserving row order.
    pub async fn replace_category_stats(&self, rows: &[CategoryStat]) -> Result<()> {
        let encoded: Vec<(String, u64)> = rows
            .iter()
            .map(|s| (s.category.clone(), s.count))
            .collect();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                tx.execute("DELETE FROM category_stats", [])?;
                {
                    let mut stmt = tx
                        .prepare("INSERT INTO category_stats (category, count) VALUES (?1, ?2)")?;
                    for (category, count) in &encoded {
                        stmt.execute(rusqlite::params![category, count])?;
                    }
                }
                tx.commit()?;
                Ok(())
            })
            .await?;
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────────

    /// All of `raw_news`, ordered by category then date then headline so
    /// reads are reproducible.
    pub async fn raw_news(&self) -> Result<Vec<NormalizedRecord>> {
        let raws: Vec<RawNewsRow> = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT headline, category, publish_date
                     FROM raw_news
                     ORDER BY category ASC, publish_date ASC, headline ASC",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(RawNewsRow {
                            headline: row.get(0)?,
                            category: row.get(1)?,
                            publish_date: row.get(2)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await?;

        raws.into_iter()
            .map(|r| {
                Ok(NormalizedRecord {
                    headline: r.headline,
                    category: r.category,
                    publish_date: decode_date(&r.publish_date)?,
                })
            })
            .collect()
    }

    /// `category_stats` in stored order (count descending).
    pub async fn category_stats(&self) -> Result<Vec<CategoryStat>> {
        let rows: Vec<CategoryStat> = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare("SELECT category, count FROM category_stats")?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(CategoryStat {
                            category: row.get(0)?,
                            count: row.get(1)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await?;
        Ok(rows)
    }

    /// Daily trend counts, grouped in SQL exactly as the dashboard reads
    /// them: per (category, publish_date), dates ascending.
    pub async fn trend_counts(&self) -> Result<Vec<TrendStat>> {
        let raws: Vec<RawTrendRow> = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT category, publish_date, COUNT(*)
                     FROM raw_news
                     GROUP BY category, publish_date
                     ORDER BY category ASC, publish_date ASC",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(RawTrendRow {
                            category: row.get(0)?,
                            publish_date: row.get(1)?,
                            count: row.get(2)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await?;

        raws.into_iter()
            .map(|r| {
                Ok(TrendStat {
                    category: r.category,
                    publish_date: decode_date(&r.publish_date)?,
                    count: r.count,
                })
            })
            .collect()
    }

    /// Sentiment counts grouped in SQL per (category, label). Zero rows for
    /// absent labels are the query layer's concern, not the store's.
    pub async fn sentiment_counts(&self) -> Result<Vec<SentimentStat>> {
        let raws: Vec<RawSentimentRow> = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT category, sentiment_label, COUNT(*)
                     FROM sentiment_news
                     GROUP BY category, sentiment_label
                     ORDER BY category ASC, sentiment_label ASC",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(RawSentimentRow {
                            category: row.get(0)?,
                            sentiment_label: row.get(1)?,
                            count: row.get(2)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await?;

        raws.into_iter()
            .map(|r| {
                Ok(SentimentStat {
                    category: r.category,
                    sentiment_label: decode_label(&r.sentiment_label)?,
                    count: r.count,
                })
            })
            .collect()
    }

    /// All scored rows from `sentiment_news`, for consumers that re-group
    /// on demand.
    pub async fn sentiment_news(&self) -> Result<Vec<ScoredRecord>> {
        struct Raw {
            headline: String,
            category: String,
            publish_date: String,
            sentiment_score: f64,
            sentiment_label: String,
        }

        let raws: Vec<Raw> = self
            .conn
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT headline, category, publish_date, sentiment_score, sentiment_label
                     FROM sentiment_news
                     ORDER BY category ASC, publish_date ASC, headline ASC",
                )?;
                let rows = stmt
                    .query_map([], |row| {
                        Ok(Raw {
                            headline: row.get(0)?,
                            category: row.get(1)?,
                            publish_date: row.get(2)?,
                            sentiment_score: row.get(3)?,
                            sentiment_label: row.get(4)?,
                        })
                    })?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(rows)
            })
            .await?;

        raws.into_iter()
            .map(|r| {
                Ok(ScoredRecord {
                    headline: r.headline,
                    category: r.category,
                    publish_date: decode_date(&r.publish_date)?,
                    sentiment_score: r.sentiment_score,
                    sentiment_label: decode_label(&r.sentiment_label)?,
                })
            })
            .collect()
    }
}
