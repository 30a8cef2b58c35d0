//! unseq: single thread, lane-blocked kernels.
//!
//! The buffer is walked in fixed blocks of [`LANES`] so every block is a
//! straight-line body the compiler can keep in vector registers. The sum keeps
//! one accumulator per lane and folds them pairwise at the end, the same shape
//! as a SIMD horizontal reduction.

use crate::workload::sigmoid_of_sine;

/// f64 lanes per 512-bit register.
pub const LANES: usize = 8;

pub fn transform(values: &mut [f64]) {
    let mut blocks = values.chunks_exact_mut(LANES);
    for block in blocks.by_ref() {
        for v in block.iter_mut() {
            *v = sigmoid_of_sine(*v);
        }
    }
    for v in blocks.into_remainder() {
        *v = sigmoid_of_sine(*v);
    }
}

pub fn reduce(values: &[f64]) -> f64 {
    let mut acc = [0.0f64; LANES];
    let mut blocks = values.chunks_exact(LANES);
    for block in blocks.by_ref() {
        for (a, &v) in acc.iter_mut().zip(block) {
            *a += v;
        }
    }
    let tail: f64 = blocks.remainder().iter().sum();
    horizontal_sum(acc) + tail
}

pub fn transform_reduce(values: &mut [f64]) -> f64 {
    transform(values);
    reduce(values)
}

// pairwise fold: 8 -> 4 -> 2 -> 1
#[inline(always)]
fn horizontal_sum(mut acc: [f64; LANES]) -> f64 {
    let mut width = LANES / 2;
    while width > 0 {
        for i in 0..width {
            acc[i] += acc[i + width];
        }
        width /= 2;
    }
    acc[0]
}
