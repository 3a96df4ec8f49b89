//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Construct the sink
//! - Wire the emitter to a fresh random source
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Nothing is written to the record stream before startup succeeds

use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::validation::{validate_config, ValidationError};
use crate::config::GeneratorConfig;
use crate::generator::{Emitter, RandomSamples};
use crate::sink::TracingSink;

/// The sink could not be constructed.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join(.0))]
    InvalidConfig(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate `config` and build the sink it describes.
pub fn initialize(config: &GeneratorConfig) -> Result<TracingSink, StartupError> {
    let settings = validate_config(config).map_err(StartupError::InvalidConfig)?;
    Ok(TracingSink::from_settings(&settings))
}

/// Emitter drawing from OS-seeded randomness into `sink`.
pub fn emitter(sink: TracingSink) -> Emitter<RandomSamples<StdRng>, TracingSink> {
    Emitter::new(RandomSamples::from_entropy(), sink)
}
