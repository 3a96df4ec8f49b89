//! Synthetic record generation.
//!
//! # Data Flow
//! ```text
//! sample.rs (one uniform draw in [0, i32::MAX])
//!     → classify.rs (pure severity/message rule)
//!     → emitter.rs (hands the result to the sink)
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function with no history across ticks
//! - The sample source is a trait so tests can feed exact values

pub mod classify;
pub mod emitter;
pub mod sample;

pub use classify::{classify, Classified, Severity};
pub use emitter::Emitter;
pub use sample::{RandomSamples, SampleSource};
