// src/extract.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::record::RawRecord;

/// Read a newline-delimited JSON corpus into memory.
///
/// An unreadable file is a hard error. Individual lines that are not valid
/// `RawRecord` objects are skipped and counted; the source dump is known to
/// carry the occasional broken line and a single one must not sink the run.
pub fn read_ndjson(path: &Path) -> Result<Vec<RawRecord>> {
    let file =
        File::open(path).with_context(|| format!("opening corpus at {}", path.display()))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("reading line {} of {}", idx + 1, path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawRecord>(&line) {
            Ok(rec) => records.push(rec),
            Err(e) => {
                skipped += 1;
                tracing::debug!(line = idx + 1, error = %e, "skipping malformed corpus line");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "malformed corpus lines skipped");
    }
    tracing::info!(total = records.len(), path = %path.display(), "extracted raw records");

    Ok(records)
}
