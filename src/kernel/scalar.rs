//! Scalar reference kernel for normalized cross-correlation.
//!
//! Both entry points accumulate in `f64` and walk pixels in row-major order.
//! [`score_ncc`] builds a [`TemplatePlan`] and defers to [`score_with_plan`],
//! so a standalone score and the score seen by the search loop are
//! bit-identical.

use crate::image::{ImageView, Intensity};
use crate::template::TemplatePlan;
use crate::util::{math, NccMatchError, NccMatchResult};

/// Computes the NCC between two equally sized grids.
///
/// # Errors
///
/// - [`NccMatchError::ShapeMismatch`] if the grids differ in shape.
/// - [`NccMatchError::DegenerateInput`] if either grid is uniform.
pub fn score_ncc<T: Intensity>(
    patch: ImageView<'_, T>,
    template: ImageView<'_, T>,
) -> NccMatchResult<f64> {
    check_shape(patch, template.width(), template.height())?;
    let plan = TemplatePlan::from_view(template);
    score_with_plan(patch, &plan)
}

/// Computes the NCC of `patch` against a precomputed template plan.
pub fn score_with_plan<T: Intensity>(
    patch: ImageView<'_, T>,
    plan: &TemplatePlan,
) -> NccMatchResult<f64> {
    let tpl_width = plan.width();
    let tpl_height = plan.height();
    check_shape(patch, tpl_width, tpl_height)?;

    if plan.is_degenerate() {
        return Err(NccMatchError::DegenerateInput {
            which: "template",
            width: tpl_width,
            height: tpl_height,
        });
    }

    let mean_p = math::mean(patch);
    let t_prime = plan.zero_mean();

    let mut numerator = 0.0f64;
    let mut denom_p = 0.0f64;
    for (ty, row) in patch.rows().enumerate() {
        let base = ty * tpl_width;
        for (tx, &value) in row.iter().enumerate() {
            let d = value.into() - mean_p;
            numerator += t_prime[base + tx] * d;
            denom_p += d * d;
        }
    }

    let degenerate_patch = NccMatchError::DegenerateInput {
        which: "patch",
        width: tpl_width,
        height: tpl_height,
    };
    if denom_p == 0.0 {
        return Err(degenerate_patch);
    }

    let denominator = (plan.sum_sq() * denom_p).sqrt();
    let score = numerator / denominator;
    if score.is_finite() {
        Ok(score)
    } else {
        Err(degenerate_patch)
    }
}

fn check_shape<T>(patch: ImageView<'_, T>, width: usize, height: usize) -> NccMatchResult<()> {
    if patch.width() != width || patch.height() != height {
        return Err(NccMatchError::ShapeMismatch {
            patch_width: patch.width(),
            patch_height: patch.height(),
            tpl_width: width,
            tpl_height: height,
        });
    }
    Ok(())
}
