// Workload for the transform/reduce benchmark
// One buffer of zeros, mapped through sigmoid(sin(v * 0.001)) and summed.

/// Number of elements processed by every strategy (2^29).
pub const N: usize = 2 << 28;

const SCALE: f64 = 0.001;

/// Fresh zero-initialised workload buffer of `len` elements.
pub fn allocate(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

#[inline(always)]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// The per-element transform applied by every strategy.
#[inline(always)]
pub fn sigmoid_of_sine(v: f64) -> f64 {
    sigmoid((v * SCALE).sin())
}

/// Sum a run over `len` untouched elements must produce.
pub fn expected_zero_sum(len: usize) -> f64 {
    sigmoid_of_sine(0.0) * len as f64
}
