// Transform/reduce benchmark: sigmoid(sin(v * 0.001)) over a large buffer,
// summed under one of several execution strategies.

pub mod context;
pub mod error;
pub mod logging;
pub mod report;
pub mod strategies;
pub mod timing;
pub mod workload;

pub use context::{BenchConfig, ExecContext};
pub use error::{BenchError, Result};
pub use report::OutputFormat;
pub use strategies::Strategy;
pub use timing::Measurement;
