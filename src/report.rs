//! End-of-run summary: input accounting and a digest of everything emitted.

use crate::features::WindowResult;
use crate::records::NormalizeStats;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub rows_read: u64,
    pub records_normalized: u64,
    pub invalid_timestamp: u64,
    pub windows_emitted: usize,
    /// SHA-256 over the emitted rows; equal inputs give equal digests
    pub digest: String,
}

impl RunReport {
    pub fn new(stats: &NormalizeStats, windows: &[WindowResult]) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            rows_read: stats.rows_read,
            records_normalized: stats.normalized,
            invalid_timestamp: stats.invalid_timestamp,
            windows_emitted: windows.len(),
            digest: digest_windows(windows),
        }
    }
}

pub fn digest_windows(windows: &[WindowResult]) -> String {
    let mut h = Sha256::new();
    for w in windows {
        h.update(format!("{},{},{}\n", w.label, w.window_start, w.value).as_bytes());
    }
    format!("{:x}", h.finalize())
}
