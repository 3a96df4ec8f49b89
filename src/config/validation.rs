//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Resolve stream names and level strings into typed settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: SinkConfig → Result<SinkSettings, Vec<ValidationError>>
//! - Runs before the sink is constructed

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::schema::{GeneratorConfig, SinkConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unsupported encoding {0:?} (expected \"json\")")]
    UnsupportedEncoding(String),

    #[error("invalid level {0:?}")]
    InvalidLevel(String),

    /// Records below the threshold would be dropped by the sink.
    #[error("level {0:?} filters out debug records")]
    LevelTooStrict(String),

    #[error("invalid {field} stream {value:?} (expected \"stdout\" or \"stderr\")")]
    InvalidStream { field: &'static str, value: String },

    #[error("invalid diagnostics filter {directives:?}: {reason}")]
    InvalidDiagnostics { directives: String, reason: String },
}

/// Standard process stream a layer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStream {
    Stdout,
    Stderr,
}

impl FromStr for OutputStream {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdout" => Ok(OutputStream::Stdout),
            "stderr" => Ok(OutputStream::Stderr),
            _ => Err(()),
        }
    }
}

/// Sink settings after validation.
#[derive(Debug, Clone)]
pub struct SinkSettings {
    pub level: LevelFilter,
    pub output: OutputStream,
    pub error_output: OutputStream,
    pub diagnostics: String,
}

/// Validate the whole configuration.
pub fn validate_config(config: &GeneratorConfig) -> Result<SinkSettings, Vec<ValidationError>> {
    validate_sink(&config.sink)
}

/// Validate sink settings, collecting every error.
pub fn validate_sink(config: &SinkConfig) -> Result<SinkSettings, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.encoding != "json" {
        errors.push(ValidationError::UnsupportedEncoding(config.encoding.clone()));
    }

    let level = match config.level.parse::<LevelFilter>() {
        Ok(level) if level < LevelFilter::DEBUG => {
            errors.push(ValidationError::LevelTooStrict(config.level.clone()));
            None
        }
        Ok(level) => Some(level),
        Err(_) => {
            errors.push(ValidationError::InvalidLevel(config.level.clone()));
            None
        }
    };

    let output = parse_stream("output", &config.output, &mut errors);
    let error_output = parse_stream("error_output", &config.error_output, &mut errors);

    if let Err(e) = EnvFilter::try_new(&config.diagnostics) {
        errors.push(ValidationError::InvalidDiagnostics {
            directives: config.diagnostics.clone(),
            reason: e.to_string(),
        });
    }

    match (level, output, error_output) {
        (Some(level), Some(output), Some(error_output)) if errors.is_empty() => Ok(SinkSettings {
            level,
            output,
            error_output,
            diagnostics: config.diagnostics.clone(),
        }),
        _ => Err(errors),
    }
}

fn parse_stream(
    field: &'static str,
    value: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<OutputStream> {
    match value.parse() {
        Ok(stream) => Some(stream),
        Err(()) => {
            errors.push(ValidationError::InvalidStream {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}
