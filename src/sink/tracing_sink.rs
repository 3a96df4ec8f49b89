//! `Sink` backed by a dedicated tracing dispatcher.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Dispatch;
use tracing_subscriber::filter::{filter_fn, FilterExt, LevelFilter, Targets};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::validation::{OutputStream, SinkSettings};
use crate::config::RECORD_TARGET;
use crate::generator::Severity;
use crate::sink::format::RecordFormat;
use crate::sink::{EmitError, Sink};

/// Writes records as JSON lines and diagnostics as plain text.
///
/// Both layers live in one `Dispatch` that the sink owns. Callers that want
/// their own `tracing` events routed through it install it with
/// [`tracing::dispatcher::set_default`].
#[derive(Clone)]
pub struct TracingSink {
    dispatch: Dispatch,
    failure: WriteFailure,
}

impl TracingSink {
    /// Build a sink writing to the streams named in `settings`.
    ///
    /// `RUST_LOG` takes precedence over the configured diagnostics directives.
    pub fn from_settings(settings: &SinkSettings) -> Self {
        let diagnostics = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.diagnostics));

        Self::with_writers(
            settings.level,
            stream_writer(settings.output),
            stream_writer(settings.error_output),
            diagnostics,
        )
    }

    /// Build a sink over arbitrary writers.
    pub fn with_writers(
        level: LevelFilter,
        records: BoxMakeWriter,
        errors: BoxMakeWriter,
        diagnostics: EnvFilter,
    ) -> Self {
        let failure = WriteFailure::default();

        let format: RecordFormat = RecordFormat::default();
        let record_layer = tracing_subscriber::fmt::layer()
            .event_format(format)
            .with_writer(CheckedWriter {
                inner: records,
                failure: failure.clone(),
            })
            .log_internal_errors(false)
            .with_filter(Targets::new().with_target(RECORD_TARGET, level));

        let diagnostics_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(errors)
            .with_filter(diagnostics.and(filter_fn(|meta| meta.target() != RECORD_TARGET)));

        let subscriber = tracing_subscriber::registry()
            .with(record_layer)
            .with(diagnostics_layer);

        Self {
            dispatch: Dispatch::new(subscriber),
            failure,
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }
}

impl Sink for TracingSink {
    fn write(&mut self, severity: Severity, message: &str) -> Result<(), EmitError> {
        tracing::dispatcher::with_default(&self.dispatch, || match severity {
            Severity::Error => tracing::error!(target: RECORD_TARGET, "{message}"),
            Severity::Warn => tracing::warn!(target: RECORD_TARGET, "{message}"),
            Severity::Info => tracing::info!(target: RECORD_TARGET, "{message}"),
            Severity::Debug => tracing::debug!(target: RECORD_TARGET, "{message}"),
        });

        match self.failure.take() {
            Some(e) => Err(EmitError::Write(e)),
            None => Ok(()),
        }
    }
}

fn stream_writer(stream: OutputStream) -> BoxMakeWriter {
    match stream {
        OutputStream::Stdout => BoxMakeWriter::new(std::io::stdout),
        OutputStream::Stderr => BoxMakeWriter::new(std::io::stderr),
    }
}

/// First record-stream error since the last `take`.
#[derive(Clone, Default)]
struct WriteFailure(Arc<Mutex<Option<io::Error>>>);

impl WriteFailure {
    /// Keep `e` and hand back an equivalent error for the formatter.
    fn store(&self, e: io::Error) -> io::Error {
        let returned = io::Error::new(e.kind(), e.to_string());
        if let Ok(mut slot) = self.0.lock() {
            slot.get_or_insert(e);
        }
        returned
    }

    fn take(&self) -> Option<io::Error> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

/// Record-stream `MakeWriter` that reports write errors back to the sink.
struct CheckedWriter {
    inner: BoxMakeWriter,
    failure: WriteFailure,
}

impl<'a> MakeWriter<'a> for CheckedWriter {
    type Writer = Checked<<BoxMakeWriter as MakeWriter<'a>>::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Checked {
            inner: self.inner.make_writer(),
            failure: self.failure.clone(),
        }
    }
}

struct Checked<W> {
    inner: W,
    failure: WriteFailure,
}

impl<W: io::Write> io::Write for Checked<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).map_err(|e| self.failure.store(e))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().map_err(|e| self.failure.store(e))
    }
}
