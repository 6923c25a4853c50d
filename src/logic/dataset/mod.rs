//! Dataset Module - Labeled Corpus Readiness
//!
//! Decides whether the labeled flow corpus itself is adequate for training,
//! independent of memory.

pub mod evaluator;
pub mod types;

pub use evaluator::evaluate;
pub use types::{DatasetReadiness, DatasetStatistics};
