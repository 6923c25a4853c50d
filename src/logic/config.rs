//! Gate Configuration
//!
//! All numeric policy of the admission gate in one place.
//! Can be loaded from environment variables or set at runtime.

use serde::{Deserialize, Serialize};

use crate::constants::{
    env_or, DEFAULT_BATCH_MAX, DEFAULT_BATCH_MIN, DEFAULT_BYTES_PER_VALUE, DEFAULT_FEATURE_COUNT,
    DEFAULT_MEMORY_THRESHOLD, DEFAULT_MIN_TOTAL_SAMPLES, DEFAULT_REQUIRE_BOTH_CLASSES,
};
use crate::logic::error::{GateError, GateResult};

// ============================================================================
// GATE CONFIG
// ============================================================================

/// Admission gate configuration (can be loaded from environment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Minimum total samples before the corpus counts as adequate
    pub min_total_samples: u64,
    /// Require at least one sample of each class (benign and malicious)
    pub require_both_classes: bool,
    /// Feature vector width used for footprint estimation
    pub feature_count: u32,
    /// Bytes per feature value used for footprint estimation
    pub bytes_per_value: u32,
    /// Fraction of available memory the job may consume, in (0, 1]
    pub memory_threshold: f64,
    /// Batch size floor
    pub batch_min: u64,
    /// Batch size ceiling
    pub batch_max: u64,
    /// Treat a missing memory probe as insufficient instead of permissive
    pub block_when_probe_unavailable: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_total_samples: DEFAULT_MIN_TOTAL_SAMPLES,
            require_both_classes: DEFAULT_REQUIRE_BOTH_CLASSES,
            feature_count: DEFAULT_FEATURE_COUNT,
            bytes_per_value: DEFAULT_BYTES_PER_VALUE,
            memory_threshold: DEFAULT_MEMORY_THRESHOLD,
            batch_min: DEFAULT_BATCH_MIN,
            batch_max: DEFAULT_BATCH_MAX,
            block_when_probe_unavailable: false,
        }
    }
}

impl GateConfig {
    /// Load configuration from environment variables with built-in fallbacks
    pub fn from_env() -> Self {
        Self {
            min_total_samples: env_or("TRAINGATE_MIN_TOTAL_SAMPLES", DEFAULT_MIN_TOTAL_SAMPLES),
            require_both_classes: env_or(
                "TRAINGATE_REQUIRE_BOTH_CLASSES",
                DEFAULT_REQUIRE_BOTH_CLASSES,
            ),
            feature_count: env_or("TRAINGATE_FEATURE_COUNT", DEFAULT_FEATURE_COUNT),
            bytes_per_value: env_or("TRAINGATE_BYTES_PER_VALUE", DEFAULT_BYTES_PER_VALUE),
            memory_threshold: env_or("TRAINGATE_MEMORY_THRESHOLD", DEFAULT_MEMORY_THRESHOLD),
            batch_min: env_or("TRAINGATE_BATCH_MIN", DEFAULT_BATCH_MIN),
            batch_max: env_or("TRAINGATE_BATCH_MAX", DEFAULT_BATCH_MAX),
            block_when_probe_unavailable: env_or("TRAINGATE_BLOCK_ON_NO_PROBE", false),
        }
    }

    /// Strict mode - probe unavailability blocks admission
    pub fn strict() -> Self {
        Self {
            block_when_probe_unavailable: true,
            ..Default::default()
        }
    }

    /// Permissive mode - no class-balance requirement, lenient threshold
    pub fn permissive() -> Self {
        Self {
            require_both_classes: false,
            memory_threshold: 0.95,
            ..Default::default()
        }
    }

    /// Reject contract violations before the gate is built.
    ///
    /// Invalid values here are caller errors, not runtime conditions, so
    /// they fail fast with a descriptive message instead of being coerced.
    pub fn validate(&self) -> GateResult<()> {
        if self.feature_count == 0 {
            return Err(GateError::InvalidConfig(
                "feature_count must be > 0".to_string(),
            ));
        }
        if self.bytes_per_value == 0 {
            return Err(GateError::InvalidConfig(
                "bytes_per_value must be > 0".to_string(),
            ));
        }
        if !(self.memory_threshold > 0.0 && self.memory_threshold <= 1.0) {
            return Err(GateError::InvalidConfig(format!(
                "memory_threshold must be in (0, 1], got {}",
                self.memory_threshold
            )));
        }
        if self.batch_min == 0 || self.batch_min > self.batch_max {
            return Err(GateError::InvalidConfig(format!(
                "batch bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.batch_min, self.batch_max
            )));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
