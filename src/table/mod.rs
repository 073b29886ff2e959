//! Tabular I/O around the engine: pipe-delimited update logs in, feature CSV out.

mod reader;
mod writer;

pub use reader::read_rows;
pub use writer::{write_windows, FeatureRow};
