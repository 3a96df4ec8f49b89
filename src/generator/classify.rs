//! Severity classification of a sample.

use std::fmt;

/// Severity attached to a synthetic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Lowercase name as it appears in the `severity` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error => tracing::Level::ERROR,
        }
    }
}

/// Outcome of classifying one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub sample: i32,
    pub severity: Severity,
    pub message: String,
}

/// Classify a sample. The first matching rule wins, so 0 is an error.
///
/// Downstream matchers key on the exact message text, "devided" included.
pub fn classify(i: i32) -> Classified {
    let (severity, message) = if i % 3571 == 0 {
        (Severity::Error, format!("the value was devided by 3571: {i}"))
    } else if i % 1123 == 0 {
        (Severity::Warn, format!("the value was devided by 1123: {i}"))
    } else if i % 9 == 0 || i % 11 == 0 || i % 13 == 0 {
        (Severity::Info, format!("the value was devided by 9, 11 or 13: {i}"))
    } else {
        (Severity::Debug, format!("the value is {i}"))
    };

    Classified {
        sample: i,
        severity,
        message,
    }
}
