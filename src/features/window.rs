//! Tumbling time windows over a timestamp-ordered stream.
//!
//! One accumulator serves every feature; the boundary policy and aggregate are parameters.
//! Window closure is checked before a record's member is inserted, so a record stamped
//! exactly at `end` lands in the next window.

use crate::error::{FeatureError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the next window's start is chosen when a record crosses the current `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// `start += window_secs` until the record fits. Windows tile the timeline and
    /// data gaps produce empty windows.
    AdvanceBySize,
    /// `start = record timestamp`. No empty windows, boundaries follow the data.
    AdvanceToRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Count,
    Mean,
    DistinctCount,
}

/// One contribution to the open window.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Unit,
    Value(f64),
    Key(String),
}

/// A closed window's aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowResult {
    pub label: String,
    pub window_start: i64,
    pub value: f64,
}

#[derive(Debug, Clone)]
enum Members {
    Count(u64),
    Mean { sum: f64, n: u64 },
    Distinct(HashSet<String>),
}

impl Members {
    fn empty(aggregate: Aggregate) -> Self {
        match aggregate {
            Aggregate::Count => Members::Count(0),
            Aggregate::Mean => Members::Mean { sum: 0.0, n: 0 },
            Aggregate::DistinctCount => Members::Distinct(HashSet::new()),
        }
    }

    fn insert(&mut self, member: Member) -> Result<()> {
        match (self, member) {
            (Members::Count(n), _) => *n += 1,
            (Members::Mean { sum, n }, Member::Value(v)) => {
                *sum += v;
                *n += 1;
            }
            (Members::Distinct(keys), Member::Key(k)) => {
                keys.insert(k);
            }
            (members, member) => {
                return Err(FeatureError::Configuration(format!(
                    "{member:?} cannot be aggregated by {members:?}"
                )))
            }
        }
        Ok(())
    }

    fn value(&self) -> f64 {
        match self {
            Members::Count(n) => *n as f64,
            Members::Mean { n: 0, .. } => 0.0,
            Members::Mean { sum, n } => sum / *n as f64,
            Members::Distinct(keys) => keys.len() as f64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Window {
    pub start: i64,
    /// `None` when `start + window_secs` overflows; such a window never closes.
    pub end: Option<i64>,
    members: Members,
}

impl Window {
    fn open(start: i64, window_secs: i64, aggregate: Aggregate) -> Self {
        Self {
            start,
            end: start.checked_add(window_secs),
            members: Members::empty(aggregate),
        }
    }

    fn is_closed_by(&self, ts: i64) -> bool {
        self.end.is_some_and(|end| ts >= end)
    }

    fn close(self, label: &str) -> WindowResult {
        WindowResult {
            label: label.to_string(),
            window_start: self.start,
            value: self.members.value(),
        }
    }
}

/// Single forward pass: `NoWindowOpen` → `WindowOpen` (closing/reopening on boundaries)
/// → flushed by [`WindowAccumulator::finish`].
#[derive(Debug)]
pub struct WindowAccumulator {
    label: String,
    window_secs: i64,
    policy: BoundaryPolicy,
    aggregate: Aggregate,
    anchor: Option<i64>,
    current: Option<Window>,
    emitted: Vec<WindowResult>,
}

impl WindowAccumulator {
    /// `start_time` anchors the first window; without it the first observed timestamp does.
    pub fn new(
        label: impl Into<String>,
        window_secs: i64,
        policy: BoundaryPolicy,
        aggregate: Aggregate,
        start_time: Option<i64>,
    ) -> Result<Self> {
        if window_secs <= 0 {
            return Err(FeatureError::Configuration(format!(
                "window size must be positive, got {window_secs}"
            )));
        }
        Ok(Self {
            label: label.into(),
            window_secs,
            policy,
            aggregate,
            anchor: start_time,
            current: None,
            emitted: Vec::new(),
        })
    }

    /// Advance the clock to `ts`: open the first window if needed, then close and emit
    /// every window that ends at or before `ts`.
    pub fn observe(&mut self, ts: i64) {
        let mut window = match self.current.take() {
            Some(w) => w,
            None => Window::open(self.anchor.unwrap_or(ts), self.window_secs, self.aggregate),
        };
        while window.is_closed_by(ts) {
            let next_start = match self.policy {
                BoundaryPolicy::AdvanceBySize => window.start + self.window_secs,
                BoundaryPolicy::AdvanceToRecord => ts,
            };
            self.emitted.push(window.close(&self.label));
            window = Window::open(next_start, self.window_secs, self.aggregate);
        }
        self.current = Some(window);
    }

    /// Add a member to the open window. Call [`observe`](Self::observe) first.
    pub fn insert(&mut self, member: Member) -> Result<()> {
        let window = self.current.as_mut().ok_or_else(|| {
            FeatureError::Configuration("insert before any window was opened".into())
        })?;
        window.members.insert(member)
    }

    pub fn push(&mut self, ts: i64, member: Member) -> Result<()> {
        self.observe(ts);
        self.insert(member)
    }

    pub fn current(&self) -> Option<&Window> {
        self.current.as_ref()
    }

    /// Windows closed so far.
    pub fn emitted(&self) -> &[WindowResult] {
        &self.emitted
    }

    /// Flush the open window, if any, and return every emitted window in order.
    pub fn finish(mut self) -> Vec<WindowResult> {
        if let Some(window) = self.current.take() {
            self.emitted.push(window.close(&self.label));
        }
        self.emitted
    }
}
