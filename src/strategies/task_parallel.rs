//! tbb: blocked-range parallel_for / parallel_reduce on a work-stealing runtime.
//!
//! A [`BlockedRange`] is split in half while it is longer than its grain, and
//! each split is handed to `rayon::join`, so idle workers steal the untouched
//! halves. Leaves run a plain loop over their sub-slice.

use tracing::debug;

use crate::workload::sigmoid_of_sine;

/// Half-open index range `[begin, end)` that divides down to `grain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedRange {
    begin: usize,
    end: usize,
    grain: usize,
}

impl BlockedRange {
    pub fn new(begin: usize, end: usize, grain: usize) -> Self {
        Self {
            begin,
            end: end.max(begin),
            grain: grain.max(1),
        }
    }

    pub fn begin(&self) -> usize {
        self.begin
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub fn is_divisible(&self) -> bool {
        self.len() > self.grain
    }

    /// Split at the midpoint. Both halves keep the grain.
    pub fn split(self) -> (Self, Self) {
        let mid = self.begin + self.len() / 2;
        (
            Self::new(self.begin, mid, self.grain),
            Self::new(mid, self.end, self.grain),
        )
    }
}

/// Run `body` on every leaf of `range`, where `values` covers exactly `range`.
pub fn parallel_for<F>(values: &mut [f64], range: BlockedRange, body: &F)
where
    F: Fn(BlockedRange, &mut [f64]) + Sync,
{
    debug_assert_eq!(values.len(), range.len());
    if range.is_divisible() {
        let (left, right) = range.split();
        let (lv, rv) = values.split_at_mut(left.len());
        rayon::join(
            || parallel_for(lv, left, body),
            || parallel_for(rv, right, body),
        );
    } else {
        body(range, values);
    }
}

/// Fold every leaf with `body` starting from `identity`, combine halves with `join`.
pub fn parallel_reduce<T, B, J>(values: &[f64], range: BlockedRange, identity: T, body: &B, join: &J) -> T
where
    T: Copy + Send + Sync,
    B: Fn(BlockedRange, &[f64], T) -> T + Sync,
    J: Fn(T, T) -> T + Sync,
{
    debug_assert_eq!(values.len(), range.len());
    if range.is_divisible() {
        let (left, right) = range.split();
        let (lv, rv) = values.split_at(left.len());
        let (a, b) = rayon::join(
            || parallel_reduce(lv, left, identity, body, join),
            || parallel_reduce(rv, right, identity, body, join),
        );
        join(a, b)
    } else {
        body(range, values, identity)
    }
}

pub fn transform_reduce(values: &mut [f64], grain: usize) -> f64 {
    let range = BlockedRange::new(0, values.len(), grain);
    debug!(len = range.len(), grain, "tbb blocked range");

    parallel_for(values, range, &|_, block: &mut [f64]| {
        for v in block.iter_mut() {
            *v = sigmoid_of_sine(*v);
        }
    });

    parallel_reduce(
        values,
        range,
        0.0,
        &|_, block: &[f64], mut init: f64| {
            for &v in block {
                init += v;
            }
            init
        },
        &|a, b| a + b,
    )
}
