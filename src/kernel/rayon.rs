//! Rayon-parallel placement scans (feature-gated).
//!
//! Each candidate row is scanned independently. Row results come back in row
//! order from `collect`, and are folded left to right, so the merged result
//! is the same as a sequential scan, ties included.

use crate::image::{ImageView, Intensity};
use crate::kernel::ScanParams;
use crate::search::scan::{scan_best, scan_peaks, PeakTally, ScanTally};
use crate::template::TemplatePlan;
use crate::util::NccMatchResult;
use rayon::prelude::*;

/// Row-parallel best-placement scan over `0..=max_row` x `0..=max_col`.
pub(crate) fn scan_best_par<T: Intensity>(
    image: ImageView<'_, T>,
    plan: &TemplatePlan,
    max_row: usize,
    max_col: usize,
) -> NccMatchResult<ScanTally> {
    let row_results: Vec<ScanTally> = (0..=max_row)
        .into_par_iter()
        .map(|row| scan_best(image, plan, row..=row, max_col))
        .collect::<NccMatchResult<_>>()?;

    Ok(row_results
        .into_iter()
        .fold(ScanTally::default(), ScanTally::merge))
}

/// Row-parallel peak collection; peaks come back in row-major order.
pub(crate) fn scan_peaks_par<T: Intensity>(
    image: ImageView<'_, T>,
    plan: &TemplatePlan,
    max_row: usize,
    max_col: usize,
    params: ScanParams,
) -> NccMatchResult<PeakTally> {
    let row_results: Vec<PeakTally> = (0..=max_row)
        .into_par_iter()
        .map(|row| scan_peaks(image, plan, row..=row, max_col, params))
        .collect::<NccMatchResult<_>>()?;

    Ok(row_results
        .into_iter()
        .fold(PeakTally::default(), PeakTally::merge))
}
