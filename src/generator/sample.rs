//! Sample sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces one non-negative 31-bit sample per call.
pub trait SampleSource {
    fn next_sample(&mut self) -> i32;
}

/// Uniform draws over `[0, i32::MAX]` from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSamples<R> {
    rng: R,
}

impl<R: Rng> RandomSamples<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSamples<StdRng> {
    /// Seeded from OS entropy; no reproducibility across runs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SampleSource for RandomSamples<R> {
    fn next_sample(&mut self) -> i32 {
        self.rng.gen_range(0..=i32::MAX)
    }
}
