//! Building blocks below the [`crate::Matcher`] API.
//!
//! Useful for callers that score placements themselves, for example to reuse
//! one [`TemplatePlan`] across many images.

pub use crate::candidate::nms::nms_2d;
pub use crate::candidate::topk::{Peak, TopK};
pub use crate::kernel::scalar::{score_ncc, score_with_plan};
pub use crate::kernel::ScanParams;
pub use crate::template::TemplatePlan;
