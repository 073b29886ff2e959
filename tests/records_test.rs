//! Normalizer and ordering stage.

mod common;

use bgp_features::records::{
    is_sorted_by_timestamp, normalize, normalize_all, parse_timestamp, sort_by_timestamp,
    MessageType,
};
use bgp_features::FeatureError;
use common::{announce, raw_line, withdraw};

#[test]
fn timestamp_drops_fraction() {
    assert_eq!(parse_timestamp("1117486800.123").unwrap(), 1117486800);
    assert_eq!(parse_timestamp("1117486800").unwrap(), 1117486800);
    assert_eq!(parse_timestamp(" 42.9 ").unwrap(), 42);
}

#[test]
fn timestamp_rejects_non_numeric_integer_part() {
    for raw in ["", ".5", "abc", "abc.5", "12a.0"] {
        assert!(
            matches!(parse_timestamp(raw), Err(FeatureError::Parse(_))),
            "{raw:?} should not parse"
        );
    }
}

#[test]
fn normalize_announcement() {
    let r = normalize(&raw_line("A", "1117486800.5", "10.0.0.0/8", "3356 1299 65001", "65001"))
        .unwrap();
    assert_eq!(r.timestamp, 1117486800);
    assert_eq!(r.message_type, MessageType::Announce);
    assert_eq!(r.prefix, "10.0.0.0/8");
    assert_eq!(r.as_path, vec!["3356", "1299", "65001"]);
    assert_eq!(r.path_len(), 3);
    assert_eq!(r.origin_as, "65001");
}

#[test]
fn normalize_non_announcement_is_other() {
    let r = normalize(&raw_line("W", "10", "10.0.0.0/8", "", "")).unwrap();
    assert_eq!(r.message_type, MessageType::Other);
    assert!(!r.has_path());
}

#[test]
fn short_row_keeps_timestamp_and_empty_route() {
    let r = normalize(&["BGP4MP", "A", "100"]).unwrap();
    assert_eq!(r.timestamp, 100);
    assert!(r.prefix.is_empty());
    assert!(matches!(r.route(), Err(FeatureError::MissingField("prefix"))));
}

#[test]
fn route_reports_first_missing_field() {
    let no_origin = announce(0, "10.0.0.0/8", "1 2", "");
    assert!(matches!(no_origin.route(), Err(FeatureError::MissingField("origin_as"))));
    let no_path = announce(0, "10.0.0.0/8", "", "2");
    assert!(matches!(no_path.route(), Err(FeatureError::MissingField("as_path"))));
    assert!(announce(0, "10.0.0.0/8", "1 2", "2").route().is_ok());
}

#[test]
fn normalize_all_counts_skips() {
    let rows = vec![
        raw_line("A", "10", "p", "1", "1"),
        raw_line("A", "bad", "p", "1", "1"),
        raw_line("W", "5.5", "p", "", ""),
        raw_line("A", "", "p", "1", "1"),
    ];
    let (records, stats) = normalize_all(&rows);
    assert_eq!(records.len(), 2);
    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.normalized, 2);
    assert_eq!(stats.invalid_timestamp, 2);
    assert_eq!(stats.skipped(), 2);
}

#[test]
fn sort_is_stable_and_ascending() {
    let mut records = vec![
        announce(30, "a", "1", "1"),
        withdraw(10, "b"),
        announce(10, "c", "1", "1"),
        announce(20, "d", "1", "1"),
    ];
    assert!(!is_sorted_by_timestamp(&records));
    sort_by_timestamp(&mut records);
    assert!(is_sorted_by_timestamp(&records));
    let order: Vec<&str> = records.iter().map(|r| r.prefix.as_str()).collect();
    assert_eq!(order, vec!["b", "c", "d", "a"]);
}
