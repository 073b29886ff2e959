//! Ordering stage: the window pass requires ascending timestamps.

use super::UpdateRecord;

/// Stable sort, so records sharing a timestamp keep input order and reruns are identical.
pub fn sort_by_timestamp(records: &mut [UpdateRecord]) {
    records.sort_by_key(|r| r.timestamp);
}

pub fn is_sorted_by_timestamp(records: &[UpdateRecord]) -> bool {
    records.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}
