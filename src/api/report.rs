//! Readiness Report - the sole contract toward callers
//!
//! Field names and meanings are stable across invocations and safe to
//! serialize directly as JSON for operational tooling.

use serde::{Deserialize, Serialize};

use crate::logic::dataset::types::DatasetReadiness;

/// Combined admission verdict produced by the readiness gate.
///
/// Recomputed fresh on every invocation; identical inputs yield
/// byte-identical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Labeled corpus adequate for training
    pub dataset_ready: bool,
    /// Estimated footprint fits within the sufficiency threshold
    pub memory_ok: bool,
    /// `dataset_ready && memory_ok`
    pub admit: bool,
    /// Estimated in-memory footprint of the full dataset (GB)
    pub estimated_gb: f64,
    /// Safe chunk size for streaming the dataset if training proceeds
    pub recommended_batch_size: u64,
    /// Human-readable diagnostics, dataset message first, then memory
    pub messages: Vec<String>,
    /// Tagged dataset outcome so callers can branch without parsing messages
    pub dataset: DatasetReadiness,
}
