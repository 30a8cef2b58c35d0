// par / par_unseq: rayon data parallelism
// Callers run these inside ExecContext::install so the pool size applies.

use rayon::prelude::*;
use tracing::debug;

use super::vectorized;
use crate::workload::sigmoid_of_sine;

/// Elements per rayon task in par_unseq (128 KiB of f64).
pub const BLOCK: usize = 1 << 14;

pub fn transform_reduce(values: &mut [f64]) -> f64 {
    values.par_iter_mut().for_each(|v| *v = sigmoid_of_sine(*v));
    values.par_iter().sum()
}

/// Thread-parallel over blocks, lane kernel inside each block.
pub fn transform_reduce_vectorized(values: &mut [f64]) -> f64 {
    debug!(
        blocks = values.len().div_ceil(BLOCK),
        block = BLOCK,
        "par_unseq partition"
    );

    values.par_chunks_mut(BLOCK).for_each(vectorized::transform);
    values.par_chunks(BLOCK).map(vectorized::reduce).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::sequential;
    use crate::workload::{allocate, expected_zero_sum};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pool(threads: usize) -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .unwrap()
    }

    #[test]
    fn test_zero_buffer() {
        let len = 3 * BLOCK + 17;
        let pool = pool(4);

        let mut values = allocate(len);
        assert_eq!(pool.install(|| transform_reduce(&mut values)), expected_zero_sum(len));

        let mut values = allocate(len);
        assert_eq!(
            pool.install(|| transform_reduce_vectorized(&mut values)),
            expected_zero_sum(len)
        );
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(transform_reduce(&mut []), 0.0);
        assert_eq!(transform_reduce_vectorized(&mut []), 0.0);
    }

    #[test]
    fn test_matches_sequential_on_random_input() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<f64> = (0..250_000).map(|_| rng.gen_range(-1.0e4..1.0e4)).collect();

        let mut seq = input.clone();
        let expected = sequential::transform_reduce(&mut seq);

        let pool = pool(8);
        let mut par = input.clone();
        let mut par_unseq = input;
        let got_par = pool.install(|| transform_reduce(&mut par));
        let got_par_unseq = pool.install(|| transform_reduce_vectorized(&mut par_unseq));

        assert_eq!(par, seq);
        assert_eq!(par_unseq, seq);
        for got in [got_par, got_par_unseq] {
            assert!(((got - expected) / expected).abs() < 1e-9, "{} vs {}", got, expected);
        }
    }
}
