//! Raw positional fields → `UpdateRecord`. Pure: callers count and report skips.

use super::{
    MessageType, UpdateRecord, AS_PATH_COL, MESSAGE_TYPE_COL, ORIGIN_AS_COL, PREFIX_COL,
    TIMESTAMP_COL,
};
use crate::error::{FeatureError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Integer seconds before any decimal point. Fails when that part is empty or not numeric.
pub fn parse_timestamp(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    let whole = raw.split('.').next().unwrap_or_default();
    whole
        .parse::<i64>()
        .map_err(|_| FeatureError::Parse(raw.to_string()))
}

fn field<S: AsRef<str>>(fields: &[S], idx: usize) -> &str {
    fields.get(idx).map(|f| f.as_ref().trim()).unwrap_or("")
}

/// Normalize one raw field list. Only an unparsable timestamp rejects the record;
/// missing route fields come through empty and are filtered per feature.
pub fn normalize<S: AsRef<str>>(fields: &[S]) -> Result<UpdateRecord> {
    let timestamp = parse_timestamp(field(fields, TIMESTAMP_COL))?;
    Ok(UpdateRecord {
        timestamp,
        message_type: MessageType::from_field(field(fields, MESSAGE_TYPE_COL)),
        prefix: field(fields, PREFIX_COL).to_string(),
        as_path: field(fields, AS_PATH_COL)
            .split_whitespace()
            .map(String::from)
            .collect(),
        origin_as: field(fields, ORIGIN_AS_COL).to_string(),
    })
}

/// Per-run tally of normalization outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeStats {
    pub rows_read: u64,
    pub normalized: u64,
    pub invalid_timestamp: u64,
}

impl NormalizeStats {
    pub fn skipped(&self) -> u64 {
        self.rows_read - self.normalized
    }
}

/// Normalize every row, dropping (and counting) those with an unparsable timestamp.
pub fn normalize_all<I, R, S>(rows: I) -> (Vec<UpdateRecord>, NormalizeStats)
where
    I: IntoIterator<Item = R>,
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut stats = NormalizeStats::default();
    let mut out = Vec::new();
    for row in rows {
        stats.rows_read += 1;
        match normalize(row.as_ref()) {
            Ok(record) => {
                stats.normalized += 1;
                out.push(record);
            }
            Err(e) => {
                stats.invalid_timestamp += 1;
                debug!(row = stats.rows_read, error = %e, "skipping record");
            }
        }
    }
    (out, stats)
}
