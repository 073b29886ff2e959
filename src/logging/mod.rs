//! Structured logging (plain or JSON lines) on stderr.

mod format;

pub use format::StructuredLogger;
