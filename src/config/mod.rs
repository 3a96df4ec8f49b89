//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! GeneratorConfig::default()
//!     → validation.rs (semantic checks)
//!     → lifecycle::startup (sink construction)
//!     → TracingSink (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; the binary never reads a config file
//! - Tick interval and classification divisors are constants, not config
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::GeneratorConfig;
pub use schema::SinkConfig;
pub use schema::{RECORD_TARGET, TICK_INTERVAL};
