//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Build sink → Build emitter
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → main returns, process exits
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and happens before the first tick
//! - No graceful shutdown: nothing is buffered, so there is nothing to drain

pub mod signals;
pub mod startup;

pub use startup::StartupError;
