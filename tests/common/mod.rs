//! Shared utilities for integration testing.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use log_generator::generator::SampleSource;
use log_generator::TracingSink;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// In-memory writer shared between the sink and the test.
#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    /// Every captured line parsed as JSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .map(|line| serde_json::from_str(line).expect("record is not JSON"))
            .collect()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// A debug-level sink writing records and diagnostics into two buffers.
pub fn capture_sink() -> (TracingSink, Capture, Capture) {
    let records = Capture::default();
    let errors = Capture::default();
    let sink = TracingSink::with_writers(
        LevelFilter::DEBUG,
        BoxMakeWriter::new(records.clone()),
        BoxMakeWriter::new(errors.clone()),
        EnvFilter::new("log_generator=info"),
    );
    (sink, records, errors)
}

/// Replays a fixed list of samples.
pub struct FixedSamples(VecDeque<i32>);

impl FixedSamples {
    pub fn new(samples: impl IntoIterator<Item = i32>) -> Self {
        Self(samples.into_iter().collect())
    }
}

impl SampleSource for FixedSamples {
    fn next_sample(&mut self) -> i32 {
        self.0.pop_front().expect("fixed samples exhausted")
    }
}
