//! Exhaustive NCC search.
//!
//! [`Matcher`] slides a template over every integer placement that fits
//! inside the image, scores each placement with the scalar NCC kernel and
//! keeps the strictly greatest score. Placements are visited row-major
//! (row outer, column inner), so on equal scores the earliest placement wins.
//! Placements whose patch has zero variance are skipped; the search only
//! fails with [`NccMatchError::NoValidMatch`] when every placement was
//! skipped.

pub(crate) mod scan;

use crate::candidate::nms::nms_2d;
use crate::candidate::topk::{Peak, TopK};
use crate::image::{ImageView, Intensity};
use crate::kernel::scalar::score_ncc;
use crate::kernel::ScanParams;
use crate::template::TemplatePlan;
use crate::trace::{trace_event, trace_span};
use crate::util::{NccMatchError, NccMatchResult};
use scan::{PeakTally, ScanTally};

/// Seed for the running best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialBest {
    /// The first non-degenerate placement seeds the best; negative maxima are
    /// reported as observed.
    #[default]
    FirstCandidate,
    /// Seed with `(0, 0, 0.0)`. A placement must score above zero to replace
    /// it, so an image whose scores are all `<= 0` reports `(0, 0, 0.0)`.
    /// Kept for compatibility with results produced by zero-seeded scans.
    Zero,
}

/// Configuration for [`Matcher`].
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Scan rows in parallel when the `rayon` feature is enabled.
    pub parallel: bool,
    /// How the running best is seeded in [`Matcher::search`].
    pub initial_best: InitialBest,
    /// Chebyshev suppression radius for [`Matcher::search_topk`]; `0` disables NMS.
    pub nms_radius: usize,
    /// Minimum score kept by [`Matcher::search_topk`].
    pub min_score: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            initial_best: InitialBest::FirstCandidate,
            nms_radius: 0,
            min_score: f64::NEG_INFINITY,
        }
    }
}

/// Best placement found by a search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    /// Zero-based top-left row of the placement.
    pub row: usize,
    /// Zero-based top-left column of the placement.
    pub col: usize,
    /// NCC score at the placement.
    pub score: f64,
}

impl From<Peak> for MatchResult {
    fn from(peak: Peak) -> Self {
        Self {
            row: peak.row,
            col: peak.col,
            score: peak.score,
        }
    }
}

/// Search outcome with scan counters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchReport {
    /// Reported best placement.
    pub best: MatchResult,
    /// Number of placements evaluated, `(H - h + 1) * (W - w + 1)`.
    pub visited: usize,
    /// Placements skipped because their patch had zero variance.
    pub degenerate: usize,
}

/// Exhaustive NCC template matcher.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a matcher using `cfg`.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Scores a single patch against a template of the same shape.
    pub fn score<T: Intensity>(
        &self,
        patch: ImageView<'_, T>,
        template: ImageView<'_, T>,
    ) -> NccMatchResult<f64> {
        score_ncc(patch, template)
    }

    /// Returns the best placement of `template` in `image`.
    pub fn search<T: Intensity>(
        &self,
        image: ImageView<'_, T>,
        template: ImageView<'_, T>,
    ) -> NccMatchResult<MatchResult> {
        self.search_report(image, template)
            .map(|report| report.best)
    }

    /// Runs [`Matcher::search`] and also returns the scan counters.
    pub fn search_report<T: Intensity>(
        &self,
        image: ImageView<'_, T>,
        template: ImageView<'_, T>,
    ) -> NccMatchResult<SearchReport> {
        let plan = TemplatePlan::from_view(template);
        let (max_row, max_col) = scan::placement_range(image, &plan)?;

        trace_span!(
            _span,
            "search",
            img_width = image.width(),
            img_height = image.height(),
            tpl_width = plan.width(),
            tpl_height = plan.height()
        );

        let tally = self.scan_best(image, &plan, max_row, max_col)?;
        let Some(observed) = tally.best else {
            return Err(NccMatchError::NoValidMatch {
                visited: tally.visited,
                tpl_width: plan.width(),
                tpl_height: plan.height(),
            });
        };

        let best = match self.cfg.initial_best {
            InitialBest::FirstCandidate => observed,
            InitialBest::Zero if observed.score > 0.0 => observed,
            InitialBest::Zero => MatchResult {
                row: 0,
                col: 0,
                score: 0.0,
            },
        };

        trace_event!(
            "search finished",
            visited = tally.visited,
            degenerate = tally.degenerate,
            row = best.row,
            col = best.col,
            score = best.score
        );

        Ok(SearchReport {
            best,
            visited: tally.visited,
            degenerate: tally.degenerate,
        })
    }

    /// Returns up to `k` placements, best first.
    ///
    /// Placements scoring below `min_score` are dropped and, when
    /// `nms_radius > 0`, placements within that Chebyshev radius of a better
    /// one are suppressed. Equal scores are ordered row-major. The
    /// `initial_best` setting does not apply here.
    pub fn search_topk<T: Intensity>(
        &self,
        image: ImageView<'_, T>,
        template: ImageView<'_, T>,
        k: usize,
    ) -> NccMatchResult<Vec<MatchResult>> {
        let plan = TemplatePlan::from_view(template);
        let (max_row, max_col) = scan::placement_range(image, &plan)?;
        if k == 0 {
            return Ok(Vec::new());
        }

        trace_span!(
            _span,
            "search_topk",
            k = k,
            nms_radius = self.cfg.nms_radius
        );

        let params = ScanParams {
            min_score: self.cfg.min_score,
        };
        let PeakTally {
            mut peaks,
            visited,
            degenerate,
        } = self.scan_peaks(image, &plan, max_row, max_col, params)?;
        if degenerate == visited {
            return Err(NccMatchError::NoValidMatch {
                visited,
                tpl_width: plan.width(),
                tpl_height: plan.height(),
            });
        }

        let kept = if self.cfg.nms_radius == 0 {
            let mut topk = TopK::new(k);
            for peak in peaks {
                topk.push(peak);
            }
            topk.into_sorted_desc()
        } else {
            let mut kept = nms_2d(&mut peaks, self.cfg.nms_radius);
            kept.truncate(k);
            kept
        };

        trace_event!(
            "top-k search finished",
            visited = visited,
            kept = kept.len()
        );
        Ok(kept.into_iter().map(MatchResult::from).collect())
    }

    fn scan_best<T: Intensity>(
        &self,
        image: ImageView<'_, T>,
        plan: &TemplatePlan,
        max_row: usize,
        max_col: usize,
    ) -> NccMatchResult<ScanTally> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return crate::kernel::rayon::scan_best_par(image, plan, max_row, max_col);
        }
        scan::scan_best(image, plan, 0..=max_row, max_col)
    }

    fn scan_peaks<T: Intensity>(
        &self,
        image: ImageView<'_, T>,
        plan: &TemplatePlan,
        max_row: usize,
        max_col: usize,
        params: ScanParams,
    ) -> NccMatchResult<PeakTally> {
        #[cfg(feature = "rayon")]
        if self.cfg.parallel {
            return crate::kernel::rayon::scan_peaks_par(image, plan, max_row, max_col, params);
        }
        scan::scan_peaks(image, plan, 0..=max_row, max_col, params)
    }
}

/// Scores `patch` against `template` with normalized cross-correlation.
pub fn score<T: Intensity>(
    patch: ImageView<'_, T>,
    template: ImageView<'_, T>,
) -> NccMatchResult<f64> {
    score_ncc(patch, template)
}

/// Searches with the default [`MatchConfig`].
pub fn search<T: Intensity>(
    image: ImageView<'_, T>,
    template: ImageView<'_, T>,
) -> NccMatchResult<MatchResult> {
    Matcher::new().search(image, template)
}
