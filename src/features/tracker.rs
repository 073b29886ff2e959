//! Per-prefix last announcement, kept for the whole run.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixState {
    pub as_path: Vec<String>,
    pub origin_as: String,
}

/// Detects "AS path changed, origin AS unchanged" per prefix.
///
/// State is never evicted, so memory grows with the number of distinct prefixes.
/// A parallel implementation has to partition this map by prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixChangeTracker {
    last: HashMap<String, PrefixState>,
}

impl PrefixChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this announcement changes the stored path while keeping the stored
    /// origin, then records it as the prefix's latest state. The first observation of a
    /// prefix never fires.
    pub fn observe(&mut self, prefix: &str, as_path: &[String], origin_as: &str) -> bool {
        match self.last.get_mut(prefix) {
            Some(state) => {
                let changed = state.as_path != as_path && state.origin_as == origin_as;
                state.as_path = as_path.to_vec();
                state.origin_as = origin_as.to_string();
                changed
            }
            None => {
                self.last.insert(
                    prefix.to_string(),
                    PrefixState {
                        as_path: as_path.to_vec(),
                        origin_as: origin_as.to_string(),
                    },
                );
                false
            }
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&PrefixState> {
        self.last.get(prefix)
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}
