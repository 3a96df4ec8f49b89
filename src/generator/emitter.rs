//! One tick's worth of work: draw, classify, write.

use crate::generator::classify::{classify, Classified};
use crate::generator::sample::SampleSource;
use crate::sink::{EmitError, Sink};

/// Owns the sample source and the sink for the process lifetime.
pub struct Emitter<R, S> {
    source: R,
    sink: S,
}

impl<R: SampleSource, S: Sink> Emitter<R, S> {
    pub fn new(source: R, sink: S) -> Self {
        Self { source, sink }
    }

    /// Draw exactly one sample and write exactly one record for it.
    pub fn emit(&mut self) -> Result<Classified, EmitError> {
        let sample = self.source.next_sample();
        let classified = classify(sample);
        self.sink.write(classified.severity, &classified.message)?;
        Ok(classified)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (R, S) {
        (self.source, self.sink)
    }
}
