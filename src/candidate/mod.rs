//! Candidate collection for multi-match queries.

pub mod nms;
pub mod topk;
