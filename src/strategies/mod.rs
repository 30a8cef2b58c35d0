// Strategy dispatcher
// One variant per CLI token; each maps to a (transform, reduce) backend.
//   seq       - single thread, left-fold sum
//   unseq     - single thread, lane-blocked kernels
//   par       - rayon parallel iterators
//   par_unseq - rayon over blocks + lane kernels
//   tbb       - blocked-range split on a work-stealing runtime (feature "task-parallel")
//   omp       - fork-join team with static schedule and reduction (feature "fork-join")

#[cfg(feature = "fork-join")]
pub mod fork_join;
pub mod parallel;
pub mod sequential;
#[cfg(feature = "task-parallel")]
pub mod task_parallel;
pub mod vectorized;

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::context::ExecContext;
use crate::error::Result;
use crate::workload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[value(name = "seq")]
    Seq,
    #[value(name = "par")]
    Par,
    #[value(name = "par_unseq")]
    ParUnseq,
    #[value(name = "unseq")]
    Unseq,
    #[cfg(feature = "task-parallel")]
    #[value(name = "tbb")]
    Tbb,
    #[cfg(feature = "fork-join")]
    #[value(name = "omp")]
    Omp,
}

impl Strategy {
    /// Every strategy compiled into this build, in usage order.
    pub fn all() -> &'static [Strategy] {
        <Strategy as ValueEnum>::value_variants()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Seq => "seq",
            Strategy::Par => "par",
            Strategy::ParUnseq => "par_unseq",
            Strategy::Unseq => "unseq",
            #[cfg(feature = "task-parallel")]
            Strategy::Tbb => "tbb",
            #[cfg(feature = "fork-join")]
            Strategy::Omp => "omp",
        }
    }

    /// Allocate a zeroed buffer of `len`, transform it and return its sum.
    pub fn run(self, len: usize, ctx: &ExecContext) -> Result<f64> {
        let mut values = workload::allocate(len);
        self.execute(&mut values, ctx)
    }

    /// Transform `values` in place and return their sum.
    pub fn execute(self, values: &mut [f64], ctx: &ExecContext) -> Result<f64> {
        let total = match self {
            Strategy::Seq => sequential::transform_reduce(values),
            Strategy::Unseq => vectorized::transform_reduce(values),
            Strategy::Par => ctx.install(|| parallel::transform_reduce(values)),
            Strategy::ParUnseq => ctx.install(|| parallel::transform_reduce_vectorized(values)),
            #[cfg(feature = "task-parallel")]
            Strategy::Tbb => {
                let grain = ctx.grain();
                ctx.install(|| task_parallel::transform_reduce(values, grain))
            }
            #[cfg(feature = "fork-join")]
            Strategy::Omp => fork_join::transform_reduce(values, ctx.threads(), ctx.affinity())?,
        };
        Ok(total)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `<seq|par|...>` placeholder listing every compiled-in token.
pub fn token_list() -> String {
    let tokens: Vec<&str> = Strategy::all().iter().map(|s| s.as_str()).collect();
    format!("<{}>", tokens.join("|"))
}
