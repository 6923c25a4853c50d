//! Batch Size Recommender
//!
//! Computes a safe chunk size for streaming/batched loading when the full
//! dataset cannot (or should not) be held in memory at once.

use serde::{Deserialize, Serialize};

use crate::constants::{BYTES_PER_GB, FALLBACK_BATCH_SIZE, MEMORY_OVERHEAD_FACTOR, USABLE_MEMORY_FRACTION};

use super::probe::MemoryReading;

/// Recommended streaming chunk size. `batch_size` is always within
/// `[bounded_low, bounded_high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecommendation {
    pub batch_size: u64,
    pub bounded_low: u64,
    pub bounded_high: u64,
}

/// Recommend a batch size for the given memory reading.
///
/// With no probe reading the fixed fallback of 100k samples is used: safe
/// on typical commodity hardware without requiring an estimate. Otherwise
/// the recommendation plans against half of currently-free memory and a
/// per-sample cost that always assumes 8-byte values, regardless of the
/// configured dtype width, to stay conservative.
///
/// `features > 0` is caller contract (checked at the config boundary).
pub fn recommend(reading: MemoryReading, features: u32, low: u64, high: u64) -> BatchRecommendation {
    let batch_size = match reading {
        // Clamped as well, so the [low, high] invariant holds for
        // non-default bounds; with the defaults this is exactly 100k.
        MemoryReading::Unavailable => FALLBACK_BATCH_SIZE.clamp(low, high),
        MemoryReading::Available { available_gb } => {
            let usable_gb = available_gb * USABLE_MEMORY_FRACTION;
            let per_sample_gb = features as f64 * 8.0 * MEMORY_OVERHEAD_FACTOR / BYTES_PER_GB;
            let raw_batch = (usable_gb / per_sample_gb).floor().max(0.0);

            // Clamp in f64 space first so the u64 cast cannot overflow
            raw_batch.min(high as f64).max(low as f64) as u64
        }
    };

    BatchRecommendation {
        batch_size,
        bounded_low: low,
        bounded_high: high,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_BATCH_MAX, DEFAULT_BATCH_MIN};

    fn recommend_default(reading: MemoryReading) -> BatchRecommendation {
        recommend(reading, 81, DEFAULT_BATCH_MIN, DEFAULT_BATCH_MAX)
    }

    #[test]
    fn test_unavailable_probe_yields_fallback() {
        let rec = recommend_default(MemoryReading::Unavailable);
        assert_eq!(rec.batch_size, 100_000);
    }

    #[test]
    fn test_tiny_memory_clamps_to_floor() {
        let rec = recommend_default(MemoryReading::available(0.001));
        assert_eq!(rec.batch_size, 10_000);
    }

    #[test]
    fn test_zero_memory_clamps_to_floor() {
        let rec = recommend_default(MemoryReading::available(0.0));
        assert_eq!(rec.batch_size, 10_000);
    }

    #[test]
    fn test_huge_memory_clamps_to_ceiling() {
        let rec = recommend_default(MemoryReading::available(1024.0));
        assert_eq!(rec.batch_size, 500_000);
    }

    #[test]
    fn test_midrange_memory_unclamped() {
        // 0.2 GB free -> 0.1 GB usable; per sample = 81*8*1.2/2^30 GB,
        // which lands between the clamp bounds (~138k samples)
        let per_sample = 81.0 * 8.0 * 1.2 / (1u64 << 30) as f64;
        let expected = (0.2 * 0.5 / per_sample).floor() as u64;
        assert!(expected > 10_000 && expected < 500_000);

        let rec = recommend_default(MemoryReading::available(0.2));
        assert_eq!(rec.batch_size, expected);
    }

    #[test]
    fn test_always_within_bounds() {
        let readings = [
            MemoryReading::Unavailable,
            MemoryReading::available(0.0),
            MemoryReading::available(0.5),
            MemoryReading::available(4.0),
            MemoryReading::available(64.0),
            MemoryReading::available(100_000.0),
        ];
        for reading in readings {
            for features in [1u32, 10, 81, 4096] {
                let rec = recommend(reading, features, DEFAULT_BATCH_MIN, DEFAULT_BATCH_MAX);
                assert!(
                    (rec.bounded_low..=rec.bounded_high).contains(&rec.batch_size),
                    "out of bounds for {:?} / {} features",
                    reading,
                    features
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = recommend_default(MemoryReading::available(7.3));
        let b = recommend_default(MemoryReading::available(7.3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fallback_clamped_to_custom_bounds() {
        let rec = recommend(MemoryReading::Unavailable, 81, 1_000, 50_000);
        assert_eq!(rec.batch_size, 50_000);
    }

    #[test]
    fn test_custom_bounds_respected() {
        let rec = recommend(MemoryReading::available(1024.0), 81, 1_000, 50_000);
        assert_eq!(rec.batch_size, 50_000);
        assert_eq!(rec.bounded_low, 1_000);
        assert_eq!(rec.bounded_high, 50_000);
    }
}
