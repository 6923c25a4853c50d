//! Readiness Gate
//!
//! Combines the dataset readiness evaluation and the memory admission
//! check into one report. Both inputs arrive as already-resolved values;
//! the gate itself performs no I/O and keeps no state between calls, so
//! concurrent invocations are always safe and identical inputs always
//! produce identical reports.

use crate::api::report::ReadinessReport;
use crate::logic::config::GateConfig;
use crate::logic::dataset::{self, DatasetStatistics};
use crate::logic::error::GateResult;
use crate::logic::memory::{batch, budget, sufficiency, MemoryReading};

/// The combined admission gate. Construction validates the configuration;
/// after that, `run` is infallible.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    config: GateConfig,
}

impl ReadinessGate {
    /// Build a gate, rejecting contract-violating configuration up front.
    pub fn new(config: GateConfig) -> GateResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Run one admission check.
    ///
    /// Messages are aggregated dataset-first, then memory, and
    /// `admit = dataset_ready && memory_ok`.
    pub fn run(&self, stats: &DatasetStatistics, reading: MemoryReading) -> ReadinessReport {
        let cfg = &self.config;

        let readiness = dataset::evaluate(stats, cfg.min_total_samples, cfg.require_both_classes);

        let estimate = budget::estimate(stats.total_samples, cfg.feature_count, cfg.bytes_per_value);
        let verdict = sufficiency::check(
            estimate.estimated_gb,
            reading,
            cfg.memory_threshold,
            cfg.block_when_probe_unavailable,
        );
        let recommendation =
            batch::recommend(reading, cfg.feature_count, cfg.batch_min, cfg.batch_max);

        let dataset_ready = readiness.is_ready();
        let memory_ok = verdict.sufficient;

        log::debug!(
            "gate: dataset_ready={} memory_ok={} estimated={:.2} GB batch={}",
            dataset_ready,
            memory_ok,
            estimate.estimated_gb,
            recommendation.batch_size
        );

        ReadinessReport {
            dataset_ready,
            memory_ok,
            admit: dataset_ready && memory_ok,
            estimated_gb: estimate.estimated_gb,
            recommended_batch_size: recommendation.batch_size,
            messages: vec![readiness.message(), verdict.message],
            dataset: readiness,
        }
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self {
            config: GateConfig::default(),
        }
    }
}
