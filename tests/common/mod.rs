//! Shared record builders for integration tests.

#![allow(dead_code)]

use bgp_features::records::{MessageType, UpdateRecord};

pub fn announce(ts: i64, prefix: &str, path: &str, origin: &str) -> UpdateRecord {
    UpdateRecord {
        timestamp: ts,
        message_type: MessageType::Announce,
        prefix: prefix.to_string(),
        as_path: path.split_whitespace().map(String::from).collect(),
        origin_as: origin.to_string(),
    }
}

pub fn withdraw(ts: i64, prefix: &str) -> UpdateRecord {
    UpdateRecord {
        timestamp: ts,
        message_type: MessageType::Other,
        prefix: prefix.to_string(),
        as_path: Vec::new(),
        origin_as: String::new(),
    }
}

/// One 13-column raw line as positional fields.
pub fn raw_line(kind: &str, ts: &str, prefix: &str, path: &str, origin: &str) -> Vec<String> {
    let mut fields = vec![String::new(); 13];
    fields[0] = "BGP4MP".into();
    fields[1] = kind.into();
    fields[2] = ts.into();
    fields[9] = prefix.into();
    fields[11] = path.into();
    fields[12] = origin.into();
    fields
}
