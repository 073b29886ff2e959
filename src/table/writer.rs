//! Feature CSV: `feature_name,window_start,timestamp,value`.

use crate::error::Result;
use crate::features::WindowResult;
use chrono::{TimeZone, Utc};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize)]
pub struct FeatureRow<'a> {
    pub feature_name: &'a str,
    pub window_start: i64,
    /// RFC 3339 UTC rendering of `window_start`
    pub timestamp: String,
    pub value: f64,
}

impl<'a> From<&'a WindowResult> for FeatureRow<'a> {
    fn from(w: &'a WindowResult) -> Self {
        let timestamp = Utc
            .timestamp_opt(w.window_start, 0)
            .single()
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default();
        Self {
            feature_name: &w.label,
            window_start: w.window_start,
            timestamp,
            value: w.value,
        }
    }
}

pub fn write_windows<W: Write>(out: W, windows: &[WindowResult]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for w in windows {
        writer.serialize(FeatureRow::from(w))?;
    }
    // Header is only written with the first row; keep it for empty output too.
    if windows.is_empty() {
        writer.write_record(["feature_name", "window_start", "timestamp", "value"])?;
    }
    writer.flush()?;
    Ok(())
}
