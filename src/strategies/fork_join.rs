// omp: fork-join team with a static schedule
// Mirrors `#pragma omp parallel for` followed by
// `#pragma omp parallel for reduction(+: total)`:
//   - each region forks `threads` scoped workers
//   - worker i owns the i-th contiguous chunk of ceil(len / threads) elements
//   - the reduction region returns one partial per worker, combined in worker order

use tracing::debug;

use crate::context::pin_to_core;
use crate::error::{BenchError, Result};
use crate::workload::sigmoid_of_sine;

/// Chunk length of the static schedule. Never 0, so chunking an empty buffer is safe.
pub fn static_chunk(len: usize, threads: usize) -> usize {
    len.div_ceil(threads.max(1)).max(1)
}

pub fn transform_reduce(values: &mut [f64], threads: usize, affinity: bool) -> Result<f64> {
    let chunk = static_chunk(values.len(), threads);
    debug!(threads, chunk, affinity, "omp team");

    parallel_for(values, chunk, affinity)?;
    parallel_sum(values, chunk, affinity)
}

fn parallel_for(values: &mut [f64], chunk: usize, affinity: bool) -> Result<()> {
    std::thread::scope(|s| {
        let team: Vec<_> = values
            .chunks_mut(chunk)
            .enumerate()
            .map(|(worker, part)| {
                s.spawn(move || {
                    if affinity {
                        pin_to_core(worker);
                    }
                    for v in part.iter_mut() {
                        *v = sigmoid_of_sine(*v);
                    }
                })
            })
            .collect();

        let mut failed = None;
        for (worker, handle) in team.into_iter().enumerate() {
            if handle.join().is_err() {
                failed.get_or_insert(worker);
            }
        }
        match failed {
            Some(worker) => Err(BenchError::WorkerPanicked { worker, region: "parallel for" }),
            None => Ok(()),
        }
    })
}

fn parallel_sum(values: &[f64], chunk: usize, affinity: bool) -> Result<f64> {
    std::thread::scope(|s| {
        let team: Vec<_> = values
            .chunks(chunk)
            .enumerate()
            .map(|(worker, part)| {
                s.spawn(move || {
                    if affinity {
                        pin_to_core(worker);
                    }
                    let mut partial = 0.0;
                    for &v in part {
                        partial += v;
                    }
                    partial
                })
            })
            .collect();

        // every handle is joined so a panicking worker never escapes the scope
        let mut total = 0.0;
        let mut failed = None;
        for (worker, handle) in team.into_iter().enumerate() {
            match handle.join() {
                Ok(partial) => total += partial,
                Err(_) => {
                    failed.get_or_insert(worker);
                }
            }
        }
        match failed {
            Some(worker) => Err(BenchError::WorkerPanicked { worker, region: "reduction" }),
            None => Ok(total),
        }
    })
}
