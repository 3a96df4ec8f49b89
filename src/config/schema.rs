//! Configuration schema definitions.
//!
//! The defaults reproduce the logger setup the generator has always shipped
//! with: JSON records at debug level on stdout, internal errors on stderr.

use std::time::Duration;

use serde::Deserialize;

/// Period between two emissions.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Tracing target carried by every synthetic record.
///
/// The record layer only accepts this target; the diagnostics layer rejects it.
pub const RECORD_TARGET: &str = "synthetic";

/// Root configuration for the generator.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Structured-logging sink settings.
    pub sink: SinkConfig,
}

/// Sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Record encoding. Only `json` is supported.
    pub encoding: String,

    /// Minimum record level (`debug` or `trace`).
    pub level: String,

    /// Stream receiving records (`stdout` or `stderr`).
    pub output: String,

    /// Stream receiving diagnostics and internal errors.
    pub error_output: String,

    /// Fallback `EnvFilter` directives for diagnostics when `RUST_LOG` is unset.
    pub diagnostics: String,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            encoding: "json".to_string(),
            level: "debug".to_string(),
            output: "stdout".to_string(),
            error_output: "stderr".to_string(),
            diagnostics: "log_generator=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"sink": {"output": "stderr"}}"#).unwrap();
        assert_eq!(config.sink.output, "stderr");
        assert_eq!(config.sink.level, "debug");
        assert_eq!(config.sink.encoding, "json");
        assert_eq!(config.sink.error_output, "stderr");
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(TICK_INTERVAL.as_millis(), 10);
    }
}
