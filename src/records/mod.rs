//! Typed BGP update records: normalization from raw positional fields and timestamp ordering.

mod normalize;
mod ordering;

pub use normalize::{normalize, normalize_all, parse_timestamp, NormalizeStats};
pub use ordering::{is_sorted_by_timestamp, sort_by_timestamp};

use serde::{Deserialize, Serialize};

/// Positional columns of one pipe-delimited update line (0-based).
pub const MESSAGE_TYPE_COL: usize = 1;
pub const TIMESTAMP_COL: usize = 2;
pub const PREFIX_COL: usize = 9;
pub const AS_PATH_COL: usize = 11;
pub const ORIGIN_AS_COL: usize = 12;

/// Message-type marker for announcements
pub const ANNOUNCE_MARKER: &str = "A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Announce,
    Other,
}

impl MessageType {
    pub fn from_field(field: &str) -> Self {
        if field == ANNOUNCE_MARKER {
            MessageType::Announce
        } else {
            MessageType::Other
        }
    }
}

/// One normalized update message. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Seconds since epoch, fractional part discarded
    pub timestamp: i64,
    pub message_type: MessageType,
    pub prefix: String,
    pub as_path: Vec<String>,
    pub origin_as: String,
}

impl UpdateRecord {
    pub fn is_announce(&self) -> bool {
        self.message_type == MessageType::Announce
    }

    pub fn path_len(&self) -> usize {
        self.as_path.len()
    }

    pub fn has_path(&self) -> bool {
        !self.as_path.is_empty()
    }

    /// Prefix, path and origin, or the first of them that is empty.
    pub fn route(&self) -> crate::Result<(&str, &[String], &str)> {
        if self.prefix.is_empty() {
            return Err(crate::FeatureError::MissingField("prefix"));
        }
        if self.as_path.is_empty() {
            return Err(crate::FeatureError::MissingField("as_path"));
        }
        if self.origin_as.is_empty() {
            return Err(crate::FeatureError::MissingField("origin_as"));
        }
        Ok((&self.prefix, &self.as_path, &self.origin_as))
    }
}
