//! Feature extraction pipeline: sorted records → filter → window accumulator → window results.

use super::{Feature, Member, PrefixChangeTracker, WindowAccumulator, WindowResult};
use crate::config::FeatureConfig;
use crate::error::{FeatureError, Result};
use crate::records::{is_sorted_by_timestamp, UpdateRecord};
use tracing::{debug, info};

pub struct FeatureExtractor {
    config: FeatureConfig,
}

impl FeatureExtractor {
    /// Fails on an invalid configuration, before any record is looked at.
    pub fn new(config: FeatureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Compute one feature over records already sorted by timestamp.
    pub fn run(&self, feature: Feature, records: &[UpdateRecord]) -> Result<Vec<WindowResult>> {
        if !is_sorted_by_timestamp(records) {
            return Err(FeatureError::Configuration(
                "records must be sorted by timestamp".into(),
            ));
        }
        let policy = self.config.policy_for(feature);
        let mut acc = WindowAccumulator::new(
            feature.label(),
            self.config.window_secs,
            policy,
            feature.aggregate(),
            self.config.start_time,
        )?;

        let mut considered: u64 = 0;
        match feature {
            Feature::UpdateCount => {
                for r in records {
                    considered += 1;
                    acc.push(r.timestamp, Member::Unit)?;
                }
            }
            Feature::AnnouncementCount => {
                for r in records.iter().filter(|r| r.is_announce()) {
                    considered += 1;
                    acc.push(r.timestamp, Member::Unit)?;
                }
            }
            Feature::AvgAsPathLength => {
                for r in records.iter().filter(|r| r.has_path()) {
                    considered += 1;
                    acc.push(r.timestamp, Member::Value(r.path_len() as f64))?;
                }
            }
            Feature::AsPathChangeCount => {
                let mut tracker = PrefixChangeTracker::new();
                for r in records.iter().filter(|r| r.is_announce()) {
                    let (prefix, as_path, origin_as) = match r.route() {
                        Ok(route) => route,
                        Err(e) => {
                            debug!(ts = r.timestamp, error = %e, "excluded from change tracking");
                            continue;
                        }
                    };
                    considered += 1;
                    // Close elapsed windows before the event can land in one.
                    acc.observe(r.timestamp);
                    if tracker.observe(prefix, as_path, origin_as) {
                        acc.insert(Member::Key(prefix.to_string()))?;
                    }
                }
                debug!(prefixes = tracker.len(), "prefix state size");
            }
        }

        let windows = acc.finish();
        info!(
            feature = feature.label(),
            policy = ?policy,
            considered,
            excluded = records.len() as u64 - considered,
            windows = windows.len(),
            "feature computed"
        );
        Ok(windows)
    }

    /// Every configured feature, in configuration order, concatenated.
    pub fn run_all(&self, records: &[UpdateRecord]) -> Result<Vec<WindowResult>> {
        let mut out = Vec::new();
        for feature in &self.config.features {
            out.extend(self.run(*feature, records)?);
        }
        Ok(out)
    }
}
