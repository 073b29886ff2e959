//! Windowed BGP features: catalogue, window accumulator, prefix change tracking.

mod pipeline;
mod tracker;
mod window;

pub use pipeline::FeatureExtractor;
pub use tracker::{PrefixChangeTracker, PrefixState};
pub use window::{Aggregate, BoundaryPolicy, Member, Window, WindowAccumulator, WindowResult};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Every update message
    UpdateCount,
    /// Announcements only
    AnnouncementCount,
    /// Mean AS path length of updates carrying a path
    AvgAsPathLength,
    /// Prefixes whose AS path changed while the origin AS stayed the same
    AsPathChangeCount,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::UpdateCount,
        Feature::AnnouncementCount,
        Feature::AvgAsPathLength,
        Feature::AsPathChangeCount,
    ];

    /// Value written to the `feature_name` output column
    pub fn label(&self) -> &'static str {
        match self {
            Feature::UpdateCount => "update_count",
            Feature::AnnouncementCount => "announcement_count",
            Feature::AvgAsPathLength => "avg_as_path_length",
            Feature::AsPathChangeCount => "as_path_change_count",
        }
    }

    pub fn aggregate(&self) -> Aggregate {
        match self {
            Feature::UpdateCount | Feature::AnnouncementCount => Aggregate::Count,
            Feature::AvgAsPathLength => Aggregate::Mean,
            Feature::AsPathChangeCount => Aggregate::DistinctCount,
        }
    }

    /// Update counts historically restart windows at the triggering record; every other
    /// feature tiles the timeline. Callers can override this per run.
    pub fn default_policy(&self) -> BoundaryPolicy {
        match self {
            Feature::UpdateCount => BoundaryPolicy::AdvanceToRecord,
            _ => BoundaryPolicy::AdvanceBySize,
        }
    }
}
