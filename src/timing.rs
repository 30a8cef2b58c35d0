// Timer: one sample, no warm-up
// The clock starts right before the strategy is called, so allocation of the
// workload buffer is part of the measured time.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use crate::context::ExecContext;
use crate::error::Result;
use crate::strategies::Strategy;

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub strategy: Strategy,
    pub len: usize,
    pub threads: usize,
    pub result: f64,
    pub duration: Duration,
}

impl Measurement {
    pub fn duration_us(&self) -> u128 {
        self.duration.as_micros()
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, result = {}, duration = {}us",
            self.strategy,
            self.result,
            self.duration_us()
        )
    }
}

/// Time a single call of `op`.
pub fn time_it<F>(op: F) -> Result<(f64, Duration)>
where
    F: FnOnce() -> Result<f64>,
{
    let start = Instant::now();
    let result = op()?;
    let elapsed = start.elapsed();
    Ok((result, elapsed))
}

/// Run `strategy` once over a fresh buffer of `len` and time it.
pub fn measure(strategy: Strategy, len: usize, ctx: &ExecContext) -> Result<Measurement> {
    info!(%strategy, len, threads = ctx.threads(), "running strategy");

    let (result, duration) = time_it(|| strategy.run(len, ctx))?;

    info!(%strategy, result, elapsed_us = duration.as_micros() as u64, "strategy finished");
    Ok(Measurement {
        strategy,
        len,
        threads: ctx.threads(),
        result,
        duration,
    })
}
