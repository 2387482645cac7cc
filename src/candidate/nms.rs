//! Non-maximum suppression for scored placements.

use crate::candidate::topk::{sort_peaks_desc, Peak};

/// Applies 2D non-maximum suppression using Chebyshev distance.
///
/// Peaks are sorted by descending score and kept if they are farther than
/// `radius` in Chebyshev distance from all previously kept peaks.
pub fn nms_2d(peaks: &mut [Peak], radius: usize) -> Vec<Peak> {
    sort_peaks_desc(peaks);
    if radius == 0 {
        return peaks.to_owned();
    }

    let mut kept: Vec<Peak> = Vec::new();
    'outer: for peak in peaks.iter().copied() {
        for kept_peak in kept.iter() {
            let dr = peak.row.abs_diff(kept_peak.row);
            let dc = peak.col.abs_diff(kept_peak.col);
            if dr.max(dc) <= radius {
                continue 'outer;
            }
        }
        kept.push(peak);
    }

    kept
}
