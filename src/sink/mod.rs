//! Structured-logging sink.
//!
//! # Responsibilities
//! - Accept one classified record per tick
//! - Serialize records as JSON lines on the record stream
//! - Keep internal diagnostics off the record stream
//!
//! # Design Decisions
//! - Backed by a `tracing::Dispatch` owned by the sink, not a global subscriber
//! - Writes are synchronous; the caller waits for each one
//! - Any write error is fatal to the caller

pub mod format;
pub mod tracing_sink;

use std::io;

use thiserror::Error;

use crate::generator::Severity;

pub use format::RecordFormat;
pub use tracing_sink::TracingSink;

/// Failure while writing a record.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to write record: {0}")]
    Write(#[from] io::Error),
}

/// Destination for synthetic records.
pub trait Sink {
    fn write(&mut self, severity: Severity, message: &str) -> Result<(), EmitError>;
}
