//! Accumulation helpers shared by template plans and the scalar kernel.

use crate::image::{ImageView, Intensity};

/// Arithmetic mean of a view, accumulated in row-major order.
pub(crate) fn mean<T: Intensity>(view: ImageView<'_, T>) -> f64 {
    let mut sum = 0.0f64;
    for row in view.rows() {
        for &value in row {
            sum += value.into();
        }
    }
    sum / view.len() as f64
}

/// Sum of squared deviations from `mean`, row-major.
pub(crate) fn sum_sq_dev<T: Intensity>(view: ImageView<'_, T>, mean: f64) -> f64 {
    let mut acc = 0.0f64;
    for row in view.rows() {
        for &value in row {
            let d = value.into() - mean;
            acc += d * d;
        }
    }
    acc
}
