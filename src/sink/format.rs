//! JSON line formatting for synthetic records.

use std::fmt;

use chrono::{DateTime, Local, Offset, TimeZone};
use serde::Serialize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// ISO-8601 local time with milliseconds, `Z` for UTC and `+hhmm` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso8601Time;

impl FormatTime for Iso8601Time {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", iso8601(&Local::now()))
    }
}

pub fn iso8601<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if time.offset().fix().local_minus_utc() == 0 {
        time.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    } else {
        time.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string()
    }
}

/// Formats each event as `{"severity","timestamp","caller","message"}`.
#[derive(Debug, Clone, Default)]
pub struct RecordFormat<T = Iso8601Time> {
    timer: T,
}

impl<T> RecordFormat<T> {
    pub fn with_timer(timer: T) -> Self {
        Self { timer }
    }
}

#[derive(Serialize)]
struct RecordLine<'a> {
    severity: &'static str,
    timestamp: &'a str,
    caller: &'a str,
    message: &'a str,
}

impl<S, N, T> FormatEvent<S, N> for RecordFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        let mut timestamp = String::new();
        self.timer.format_time(&mut Writer::new(&mut timestamp))?;

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let caller = short_caller(meta.file(), meta.line());
        let line = RecordLine {
            severity: level_name(meta.level()),
            timestamp: &timestamp,
            caller: &caller,
            message: &visitor.message,
        };

        let json = serde_json::to_string(&line).map_err(|_| fmt::Error)?;
        writeln!(writer, "{json}")
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Last two path components of `file` plus the line, e.g. `sink/tracing_sink.rs:42`.
pub fn short_caller(file: Option<&str>, line: Option<u32>) -> String {
    let Some(file) = file else {
        return "undefined".to_string();
    };

    let mut parts = file.rsplitn(3, ['/', '\\']);
    let name = parts.next().unwrap_or(file);
    let short = match parts.next() {
        Some(dir) => format!("{dir}/{name}"),
        None => name.to_string(),
    };

    match line {
        Some(line) => format!("{short}:{line}"),
        None => short,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt;

    struct FixedTime;

    impl FormatTime for FixedTime {
        fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
            write!(w, "2019-10-01T12:00:00.000+0900")
        }
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .event_format(RecordFormat::with_timer(FixedTime))
                .with_writer(buffer.clone()),
        );
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_record_shape() {
        let out = capture(|| tracing::warn!("the value was devided by 1123: {}", 1123));
        let line: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();

        assert_eq!(line["severity"], "warn");
        assert_eq!(line["timestamp"], "2019-10-01T12:00:00.000+0900");
        assert_eq!(line["message"], "the value was devided by 1123: 1123");
        assert!(line["caller"].as_str().unwrap().starts_with("sink/format.rs:"));
        assert_eq!(line.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_key_order() {
        let out = capture(|| tracing::debug!("the value is 1"));
        let severity = out.find("\"severity\"").unwrap();
        let timestamp = out.find("\"timestamp\"").unwrap();
        let caller = out.find("\"caller\"").unwrap();
        let message = out.find("\"message\"").unwrap();
        assert!(severity < timestamp && timestamp < caller && caller < message);
    }

    #[test]
    fn test_one_line_per_event() {
        let out = capture(|| {
            tracing::info!("first");
            tracing::error!("second");
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("\"severity\":\"error\""));
    }

    #[test]
    fn test_iso8601_offsets() {
        let utc = chrono::Utc.with_ymd_and_hms(2019, 10, 1, 3, 0, 0).unwrap();
        assert_eq!(iso8601(&utc), "2019-10-01T03:00:00.000Z");

        let tokyo = chrono::FixedOffset::east_opt(9 * 3600).unwrap();
        let local = tokyo.with_ymd_and_hms(2019, 10, 1, 12, 0, 0).unwrap();
        assert_eq!(iso8601(&local), "2019-10-01T12:00:00.000+0900");

        let zero = chrono::FixedOffset::east_opt(0).unwrap();
        let at_zero = zero.with_ymd_and_hms(2019, 10, 1, 3, 0, 0).unwrap();
        assert_eq!(iso8601(&at_zero), "2019-10-01T03:00:00.000Z");
    }

    #[test]
    fn test_short_caller() {
        assert_eq!(short_caller(Some("src/sink/format.rs"), Some(12)), "sink/format.rs:12");
        assert_eq!(short_caller(Some("main.rs"), Some(3)), "main.rs:3");
        assert_eq!(short_caller(Some("src\\generator\\emitter.rs"), None), "generator/emitter.rs");
        assert_eq!(short_caller(None, Some(1)), "undefined");
    }
}
