//! Synthetic log-event generator.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌───────────┐  tick   ┌─────────────────────────────────┐  write  ┌──────────────┐
//!   │ scheduler │───────▶│            generator              │───────▶│     sink     │──▶ stdout (JSON lines)
//!   │ (10 ms)   │         │ sample → classify → Classified  │         │ TracingSink  │──▶ stderr (diagnostics)
//!   └───────────┘         └─────────────────────────────────┘         └──────────────┘
//!
//!   lifecycle: config validation → sink construction → scheduler (until signal or failure)
//! ```
//!
//! Each tick draws one integer in `[0, i32::MAX]`, classifies it by
//! divisibility into debug/info/warn/error, and writes one record.

pub mod config;
pub mod generator;
pub mod lifecycle;
pub mod scheduler;
pub mod sink;

pub use config::schema::GeneratorConfig;
pub use generator::{classify, Classified, Emitter, Severity};
pub use scheduler::Scheduler;
pub use sink::{Sink, TracingSink};
