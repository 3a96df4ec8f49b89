//! Fixed-period emission loop.
//!
//! # Responsibilities
//! - Fire the emitter once per interval, forever
//! - Stop only when an emission fails
//!
//! # Design Decisions
//! - One emission in flight at a time; a slow write delays the next tick
//! - Missed ticks are not caught up (`MissedTickBehavior::Delay`)
//! - No cancellation API: dropping the future is the only way out

use std::convert::Infallible;
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};

use crate::generator::{Emitter, SampleSource};
use crate::sink::{EmitError, Sink};

pub struct Scheduler {
    period: Duration,
}

impl Scheduler {
    /// `period` must be non-zero.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Run until an emission fails. The first tick fires immediately.
    pub async fn run<R, S>(&self, emitter: &mut Emitter<R, S>) -> Result<Infallible, EmitError>
    where
        R: SampleSource,
        S: Sink,
    {
        tracing::info!(period_ms = self.period.as_millis() as u64, "Scheduler starting");

        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            emitter.emit()?;
        }
    }
}
