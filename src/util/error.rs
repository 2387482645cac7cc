//! Error types for nccmatch.

use thiserror::Error;

/// Result alias for nccmatch operations.
pub type NccMatchResult<T> = std::result::Result<T, NccMatchError>;

/// Errors that can occur when extracting patches or running NCC searches.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NccMatchError {
    /// Width or height is zero (or overflows when multiplied).
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Stride is smaller than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer cannot hold the requested grid.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Nested rows passed to a constructor have different lengths.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Extraction rectangle is empty or inverted.
    #[error("invalid range rows {row_start}..{row_end}, cols {col_start}..{col_end}")]
    InvalidRange {
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    },
    /// Extraction rectangle extends past the image.
    #[error(
        "rectangle ending at row {row_end}, col {col_end} exceeds image {img_width}x{img_height}"
    )]
    OutOfBounds {
        row_end: usize,
        col_end: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Patch and template do not have the same shape.
    #[error(
        "shape mismatch: patch {patch_width}x{patch_height}, template {tpl_width}x{tpl_height}"
    )]
    ShapeMismatch {
        patch_width: usize,
        patch_height: usize,
        tpl_width: usize,
        tpl_height: usize,
    },
    /// Template does not fit inside the image.
    #[error("template {tpl_width}x{tpl_height} does not fit image {img_width}x{img_height}")]
    TemplateTooLarge {
        tpl_width: usize,
        tpl_height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Zero-variance input makes the NCC denominator vanish.
    #[error("degenerate {which} ({width}x{height}): zero variance")]
    DegenerateInput {
        which: &'static str,
        width: usize,
        height: usize,
    },
    /// Every candidate placement was degenerate.
    #[error("no valid match among {visited} placements of a {tpl_width}x{tpl_height} template")]
    NoValidMatch {
        visited: usize,
        tpl_width: usize,
        tpl_height: usize,
    },
    /// Image decoding failed.
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
