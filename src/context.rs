// Runtime knobs shared by every strategy
// The rayon pool is built once per run, like the per-benchmark pools in the
// overhead and histogram suites, and optionally pins its workers to cores.

use crate::error::{BenchError, Result};
use tracing::{debug, warn};

/// Minimum blocked-range length for the task-parallel strategy.
pub const DEFAULT_GRAIN: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// 0 = all available cores
    pub threads: usize,
    pub grain: usize,
    pub affinity: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            grain: DEFAULT_GRAIN,
            affinity: false,
        }
    }
}

/// Resolved configuration plus the worker pool strategies run on.
pub struct ExecContext {
    threads: usize,
    grain: usize,
    affinity: bool,
    pool: rayon::ThreadPool,
}

impl ExecContext {
    pub fn new(config: &BenchConfig) -> Result<Self> {
        if config.grain == 0 {
            return Err(BenchError::ZeroGrain);
        }

        let threads = if config.threads == 0 {
            available_threads()
        } else {
            config.threads
        };

        let affinity = config.affinity;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("bench-worker-{}", idx))
            .start_handler(move |idx| {
                if affinity {
                    pin_to_core(idx);
                }
            })
            .build()?;

        debug!(threads, grain = config.grain, affinity, "execution context ready");

        Ok(Self {
            threads,
            grain: config.grain,
            affinity,
            pool,
        })
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn grain(&self) -> usize {
        self.grain
    }

    pub fn affinity(&self) -> bool {
        self.affinity
    }

    /// Run `op` inside the context's rayon pool.
    pub fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

pub fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Pin the calling thread to core `worker mod cores`.
pub fn pin_to_core(worker: usize) {
    match core_affinity::get_core_ids() {
        Some(core_ids) if !core_ids.is_empty() => {
            let core = core_ids[worker % core_ids.len()];
            if !core_affinity::set_for_current(core) {
                warn!(worker, core = core.id, "failed to pin worker");
            }
        }
        _ => warn!(worker, "core ids unavailable, worker left unpinned"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.threads, 0);
        assert_eq!(config.grain, DEFAULT_GRAIN);
        assert!(!config.affinity);
    }

    #[test]
    fn test_zero_threads_resolves_to_cores() {
        let ctx = ExecContext::new(&BenchConfig::default()).unwrap();
        assert_eq!(ctx.threads(), available_threads());
        assert_eq!(ctx.install(rayon::current_num_threads), ctx.threads());
    }

    #[test]
    fn test_explicit_threads() {
        let config = BenchConfig {
            threads: 3,
            ..BenchConfig::default()
        };
        let ctx = ExecContext::new(&config).unwrap();
        assert_eq!(ctx.threads(), 3);
        assert_eq!(ctx.install(rayon::current_num_threads), 3);
    }

    #[test]
    fn test_zero_grain_rejected() {
        let config = BenchConfig {
            grain: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(ExecContext::new(&config), Err(BenchError::ZeroGrain)));
    }

    #[test]
    fn test_affinity_pool_builds() {
        let config = BenchConfig {
            threads: 2,
            affinity: true,
            ..BenchConfig::default()
        };
        let ctx = ExecContext::new(&config).unwrap();
        assert!(ctx.affinity());
        assert_eq!(ctx.install(|| 40 + 2), 42);
    }
}
