//! NCC kernel implementations.
//!
//! `scalar` holds the reference score; `rayon` (feature-gated) spreads the
//! placement scan across rows.

/// Scan configuration for multi-peak collection.
#[derive(Clone, Copy, Debug)]
pub struct ScanParams {
    /// Minimum score threshold (discard below this value).
    pub min_score: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            min_score: f64::NEG_INFINITY,
        }
    }
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;
