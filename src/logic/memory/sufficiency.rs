//! Memory Sufficiency Checker
//!
//! Compares an estimated footprint against available memory and the
//! configured threshold. Over-threshold usage and a missing probe are
//! modeled as data (verdict + message), never as errors.

use serde::{Deserialize, Serialize};

use super::probe::MemoryReading;

/// Verdict of the memory sufficiency check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SufficiencyVerdict {
    pub sufficient: bool,
    pub message: String,
}

/// Check whether the estimated footprint fits in available memory.
///
/// With no probe reading the default policy is permissive: absence of
/// information does not block environments without memory introspection.
/// `block_when_unavailable` flips that branch to insufficient for
/// deployments that prefer the conservative stance.
///
/// `threshold` is the fraction of available memory the job may consume,
/// in (0, 1]; checked at the config boundary.
pub fn check(
    estimated_gb: f64,
    reading: MemoryReading,
    threshold: f64,
    block_when_unavailable: bool,
) -> SufficiencyVerdict {
    let available_gb = match reading {
        MemoryReading::Unavailable => {
            return SufficiencyVerdict {
                sufficient: !block_when_unavailable,
                message: "Cannot verify memory (probe unavailable)".to_string(),
            };
        }
        MemoryReading::Available { available_gb } => available_gb,
    };

    // Zero free memory makes the ratio infinite, which fails the check
    let usage_ratio = if available_gb > 0.0 {
        estimated_gb / available_gb
    } else {
        f64::INFINITY
    };

    if usage_ratio > threshold {
        SufficiencyVerdict {
            sufficient: false,
            message: format!(
                "Estimated footprint {:.2} GB exceeds {:.0}% of available {:.2} GB; \
                 enable batched loading",
                estimated_gb,
                threshold * 100.0,
                available_gb
            ),
        }
    } else {
        SufficiencyVerdict {
            sufficient: true,
            message: "Memory check passed".to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
