//! Memory Budget Estimator
//!
//! Estimates the footprint of loading the full dataset into memory:
//! raw feature matrix plus a fixed 20% overhead allowance for the
//! intermediate structures built on top of it during preprocessing.

use serde::{Deserialize, Serialize};

use crate::constants::{BYTES_PER_GB, MEMORY_OVERHEAD_FACTOR};

/// Footprint estimate for a full in-memory load. Derived value, not
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemoryBudgetEstimate {
    pub samples: u64,
    pub features: u32,
    pub bytes_per_value: u32,
    pub estimated_gb: f64,
}

/// Estimate the in-memory footprint in GB.
///
/// `estimated_gb = samples * features * bytes_per_value * 1.2 / 2^30`.
/// The 1.2 multiplier is a policy constant, not a measured quantity.
///
/// `features > 0` and `bytes_per_value > 0` are caller contract, checked
/// at the config boundary. `samples == 0` yields 0.0.
pub fn estimate(samples: u64, features: u32, bytes_per_value: u32) -> MemoryBudgetEstimate {
    let raw_bytes = samples as f64 * features as f64 * bytes_per_value as f64;
    MemoryBudgetEstimate {
        samples,
        features,
        bytes_per_value,
        estimated_gb: raw_bytes * MEMORY_OVERHEAD_FACTOR / BYTES_PER_GB,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BYTES_PER_VALUE, DEFAULT_FEATURE_COUNT};

    #[test]
    fn test_formula_exact() {
        for samples in [0u64, 1, 1000, 250_000, 10_000_000] {
            let est = estimate(samples, DEFAULT_FEATURE_COUNT, DEFAULT_BYTES_PER_VALUE);
            let expected = samples as f64 * 81.0 * 8.0 * 1.2 / (1u64 << 30) as f64;
            assert_eq!(est.estimated_gb, expected, "samples = {}", samples);
        }
    }

    #[test]
    fn test_zero_samples_is_zero() {
        assert_eq!(estimate(0, 81, 8).estimated_gb, 0.0);
    }

    #[test]
    fn test_estimate_carries_inputs() {
        let est = estimate(500, 42, 4);
        assert_eq!(est.samples, 500);
        assert_eq!(est.features, 42);
        assert_eq!(est.bytes_per_value, 4);
    }

    #[test]
    fn test_million_flows_rough_magnitude() {
        // 1M samples x 81 features x 8 bytes x 1.2 ~ 0.72 GB
        let est = estimate(1_000_000, 81, 8);
        assert!(est.estimated_gb > 0.7 && est.estimated_gb < 0.75);
    }
}
