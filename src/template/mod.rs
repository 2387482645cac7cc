//! Template preprocessing.
//!
//! A [`TemplatePlan`] is built once per search and reused for every
//! candidate placement.

mod plan;

pub use plan::TemplatePlan;
