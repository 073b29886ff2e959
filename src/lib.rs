//! BGP feature extraction: windowed time-series statistics over BGP update logs.
//!
//! Modular structure:
//! - [`records`] — Normalization of raw update lines and timestamp ordering
//! - [`features`] — Window accumulator, prefix change tracker, feature catalogue
//! - [`table`] — Pipe-delimited input and CSV output
//! - [`report`] — Run summary and output digest
//! - [`logging`] — Structured logging

pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod records;
pub mod report;
pub mod table;

pub use config::FeatureConfig;
pub use error::{FeatureError, Result};
pub use features::{BoundaryPolicy, Feature, FeatureExtractor, WindowAccumulator, WindowResult};
pub use logging::StructuredLogger;
pub use records::{normalize, UpdateRecord};
pub use report::RunReport;
