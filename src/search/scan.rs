//! Dense placement scan.
//!
//! Every scan walks rows top to bottom and columns left to right. Degenerate
//! placements are counted and skipped; any other scoring error aborts the
//! scan.

use crate::candidate::topk::Peak;
use crate::image::{ImageView, Intensity};
use crate::kernel::scalar::score_with_plan;
use crate::kernel::ScanParams;
use crate::patch::window;
use crate::search::MatchResult;
use crate::template::TemplatePlan;
use crate::util::{NccMatchError, NccMatchResult};
use std::ops::RangeInclusive;

/// Running best placement and visit counters for a block of rows.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ScanTally {
    pub best: Option<MatchResult>,
    pub visited: usize,
    pub degenerate: usize,
}

impl ScanTally {
    fn offer(&mut self, candidate: MatchResult) {
        match self.best {
            Some(best) if candidate.score <= best.score => {}
            _ => self.best = Some(candidate),
        }
    }

    /// Combines with a tally of rows that come later in scan order.
    ///
    /// `later` only wins on a strictly greater score.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub fn merge(self, later: ScanTally) -> ScanTally {
        let mut merged = ScanTally {
            best: self.best,
            visited: self.visited + later.visited,
            degenerate: self.degenerate + later.degenerate,
        };
        if let Some(candidate) = later.best {
            merged.offer(candidate);
        }
        merged
    }
}

/// Every scored placement of a block of rows.
#[derive(Clone, Debug, Default)]
pub(crate) struct PeakTally {
    pub peaks: Vec<Peak>,
    pub visited: usize,
    pub degenerate: usize,
}

impl PeakTally {
    /// Appends a tally of later rows.
    #[cfg_attr(not(feature = "rayon"), allow(dead_code))]
    pub fn merge(mut self, later: PeakTally) -> PeakTally {
        self.peaks.extend(later.peaks);
        self.visited += later.visited;
        self.degenerate += later.degenerate;
        self
    }
}

/// Returns the last valid `(row, col)` placement of the template.
pub(crate) fn placement_range<T>(
    image: ImageView<'_, T>,
    plan: &TemplatePlan,
) -> NccMatchResult<(usize, usize)> {
    let img_width = image.width();
    let img_height = image.height();
    let tpl_width = plan.width();
    let tpl_height = plan.height();
    if tpl_width > img_width || tpl_height > img_height {
        return Err(NccMatchError::TemplateTooLarge {
            tpl_width,
            tpl_height,
            img_width,
            img_height,
        });
    }
    Ok((img_height - tpl_height, img_width - tpl_width))
}

fn scan_rows<T, F>(
    image: ImageView<'_, T>,
    plan: &TemplatePlan,
    rows: RangeInclusive<usize>,
    max_col: usize,
    mut on_score: F,
) -> NccMatchResult<(usize, usize)>
where
    T: Intensity,
    F: FnMut(usize, usize, f64),
{
    let tpl_width = plan.width();
    let tpl_height = plan.height();
    let mut visited = 0usize;
    let mut degenerate = 0usize;

    for row in rows {
        for col in 0..=max_col {
            let patch = window(image, row, row + tpl_height, col, col + tpl_width)?;
            visited += 1;
            match score_with_plan(patch, plan) {
                Ok(score) => on_score(row, col, score),
                Err(NccMatchError::DegenerateInput { .. }) => degenerate += 1,
                Err(err) => return Err(err),
            }
        }
    }

    Ok((visited, degenerate))
}

/// Finds the best placement among `rows`, first-found winning ties.
pub(crate) fn scan_best<T: Intensity>(
    image: ImageView<'_, T>,
    plan: &TemplatePlan,
    rows: RangeInclusive<usize>,
    max_col: usize,
) -> NccMatchResult<ScanTally> {
    let mut tally = ScanTally::default();
    let (visited, degenerate) = scan_rows(image, plan, rows, max_col, |row, col, score| {
        tally.offer(MatchResult { row, col, score });
    })?;
    tally.visited = visited;
    tally.degenerate = degenerate;
    Ok(tally)
}

/// Collects every placement among `rows` scoring at least `params.min_score`.
pub(crate) fn scan_peaks<T: Intensity>(
    image: ImageView<'_, T>,
    plan: &TemplatePlan,
    rows: RangeInclusive<usize>,
    max_col: usize,
    params: ScanParams,
) -> NccMatchResult<PeakTally> {
    let mut peaks = Vec::new();
    let (visited, degenerate) = scan_rows(image, plan, rows, max_col, |row, col, score| {
        if score >= params.min_score {
            peaks.push(Peak { row, col, score });
        }
    })?;
    Ok(PeakTally {
        peaks,
        visited,
        degenerate,
    })
}
