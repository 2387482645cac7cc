//! Template plan precomputation for NCC scoring.

use crate::image::{ImageView, Intensity};
use crate::util::math;

/// Precomputed mean, zero-mean buffer and energy of a template.
#[derive(Clone, Debug)]
pub struct TemplatePlan {
    width: usize,
    height: usize,
    mean: f64,
    sum_sq: f64,
    zero_mean: Vec<f64>,
}

impl TemplatePlan {
    /// Builds a plan from a template view.
    ///
    /// Uniform templates are accepted here; scoring against them reports
    /// [`crate::NccMatchError::DegenerateInput`].
    pub fn from_view<T: Intensity>(tpl: ImageView<'_, T>) -> Self {
        let mean = math::mean(tpl);
        let mut zero_mean = Vec::with_capacity(tpl.len());
        for row in tpl.rows() {
            for &value in row {
                zero_mean.push(value.into() - mean);
            }
        }
        let sum_sq = math::sum_sq_dev(tpl, mean);

        Self {
            width: tpl.width(),
            height: tpl.height(),
            mean,
            sum_sq,
            zero_mean,
        }
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the mean intensity of the template.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns `Σ (t - mean)²`.
    pub fn sum_sq(&self) -> f64 {
        self.sum_sq
    }

    /// Returns the zero-mean template values in row-major order.
    pub fn zero_mean(&self) -> &[f64] {
        &self.zero_mean
    }

    /// True when the template has zero variance.
    pub fn is_degenerate(&self) -> bool {
        self.sum_sq == 0.0
    }
}
