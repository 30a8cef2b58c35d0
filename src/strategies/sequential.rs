// seq: one thread, element by element, left-fold sum

use crate::workload::sigmoid_of_sine;

pub fn transform(values: &mut [f64]) {
    values.iter_mut().for_each(|v| *v = sigmoid_of_sine(*v));
}

pub fn reduce(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn transform_reduce(values: &mut [f64]) -> f64 {
    transform(values);
    reduce(values)
}
