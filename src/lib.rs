//! nccmatch locates a template inside a larger image with normalized
//! cross-correlation (NCC).
//!
//! The search is exhaustive and single-scale: every integer placement that
//! fits inside the image is scored, and the strictly greatest score wins,
//! scanning row-major so that ties resolve to the earliest placement.
//! Row-parallel scanning is available with the `rayon` feature and gives the
//! same results as the sequential scan.
//!
//! ```
//! use nccmatch::{search, OwnedImage};
//!
//! let image = OwnedImage::from_rows(vec![
//!     vec![0, 0, 0, 0],
//!     vec![0, 1, 2, 0],
//!     vec![0, 3, 4, 0],
//! ])?;
//! let template = OwnedImage::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! let best = search(image.view(), template.view())?;
//! assert_eq!((best.row, best.col), (1, 1));
//! # Ok::<(), nccmatch::NccMatchError>(())
//! ```

mod candidate;
pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod patch;
pub mod search;
pub mod template;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{ImageView, Intensity, OwnedImage};
pub use patch::{extract, window};
pub use search::{score, search, InitialBest, MatchConfig, MatchResult, Matcher, SearchReport};
pub use util::{NccMatchError, NccMatchResult};
