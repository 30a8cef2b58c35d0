//! Error types for benchmark setup and execution

/// Result type for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while preparing or running a strategy
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The dedicated rayon pool could not be created
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Blocked ranges need at least one element per leaf
    #[error("grain size must be positive")]
    ZeroGrain,

    /// A fork-join team member panicked
    #[error("worker {worker} panicked in {region} region")]
    WorkerPanicked { worker: usize, region: &'static str },
}
