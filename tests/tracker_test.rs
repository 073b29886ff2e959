//! Prefix change tracker, standalone and through the change-count feature.

mod common;

use bgp_features::config::FeatureConfig;
use bgp_features::features::{Feature, FeatureExtractor, PrefixChangeTracker};
use common::{announce, withdraw};

fn path(p: &str) -> Vec<String> {
    p.split_whitespace().map(String::from).collect()
}

#[test]
fn fires_on_path_change_with_same_origin() {
    let mut tracker = PrefixChangeTracker::new();
    let p1 = path("1 2 3");
    let p2 = path("1 4 3");
    let fired: Vec<bool> = [&p1, &p1, &p2, &p1]
        .iter()
        .map(|p| tracker.observe("10.0.0.0/8", p, "3"))
        .collect();
    assert_eq!(fired, vec![false, false, true, true]);
    assert_eq!(tracker.get("10.0.0.0/8").unwrap().as_path, p1);
}

#[test]
fn origin_change_is_not_an_event_but_updates_state() {
    let mut tracker = PrefixChangeTracker::new();
    assert!(!tracker.observe("p", &path("1 2"), "2"));
    assert!(!tracker.observe("p", &path("1 5"), "5"));
    assert_eq!(tracker.get("p").unwrap().origin_as, "5");
    assert!(tracker.observe("p", &path("1 6 5"), "5"));
}

#[test]
fn prefixes_are_tracked_independently() {
    let mut tracker = PrefixChangeTracker::new();
    assert!(!tracker.observe("a", &path("1 2"), "2"));
    assert!(!tracker.observe("b", &path("1 3 2"), "2"));
    assert!(!tracker.observe("a", &path("1 2"), "2"));
    assert_eq!(tracker.len(), 2);
}

fn change_config() -> FeatureConfig {
    FeatureConfig {
        window_secs: 300,
        features: vec![Feature::AsPathChangeCount],
        ..FeatureConfig::default()
    }
}

#[test]
fn repeated_event_in_one_window_counts_once() {
    let records = vec![
        announce(0, "10.0.0.0/8", "1 2 3", "3"),
        announce(10, "10.0.0.0/8", "1 2 3", "3"),
        announce(20, "10.0.0.0/8", "1 4 3", "3"),
        announce(30, "10.0.0.0/8", "1 2 3", "3"),
    ];
    let extractor = FeatureExtractor::new(change_config()).unwrap();
    let windows = extractor.run(Feature::AsPathChangeCount, &records).unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].value, 1.0);
    assert_eq!(windows[0].label, "as_path_change_count");
}

#[test]
fn events_in_different_windows_count_per_window() {
    let records = vec![
        announce(0, "10.0.0.0/8", "1 2 3", "3"),
        announce(10, "10.0.0.0/8", "1 2 3", "3"),
        announce(20, "10.0.0.0/8", "1 4 3", "3"),
        announce(400, "10.0.0.0/8", "1 2 3", "3"),
    ];
    let extractor = FeatureExtractor::new(change_config()).unwrap();
    let windows = extractor.run(Feature::AsPathChangeCount, &records).unwrap();
    let got: Vec<(i64, f64)> = windows.iter().map(|w| (w.window_start, w.value)).collect();
    assert_eq!(got, vec![(0, 1.0), (300, 1.0)]);
}

#[test]
fn state_carries_across_windows_and_skips_incomplete_records() {
    let records = vec![
        announce(0, "p", "1 2", "2"),
        withdraw(100, "p"),
        announce(150, "p", "", "2"),
        announce(200, "q", "7 8", "8"),
        // Compared against the t=0 announcement, not anything since.
        announce(650, "p", "1 9 2", "2"),
    ];
    let extractor = FeatureExtractor::new(change_config()).unwrap();
    let windows = extractor.run(Feature::AsPathChangeCount, &records).unwrap();
    let got: Vec<(i64, f64)> = windows.iter().map(|w| (w.window_start, w.value)).collect();
    assert_eq!(got, vec![(0, 0.0), (300, 0.0), (600, 1.0)]);
}
