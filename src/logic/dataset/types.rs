//! Dataset Types
//!
//! Data structures only - no evaluation logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// DATASET STATISTICS
// ============================================================================

/// Aggregate counts over the labeled flow corpus, as reported by the
/// external statistics source.
///
/// An immutable snapshot per call. `labeled_samples >= benign_count +
/// malicious_count` is expected from upstream but not enforced here; the
/// gate only applies thresholds to the supplied counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub total_samples: u64,
    pub labeled_samples: u64,
    pub benign_count: u64,
    pub malicious_count: u64,
}

// ============================================================================
// READINESS OUTCOME
// ============================================================================

/// Three-tier readiness outcome for the labeled corpus.
///
/// The tiers are distinct on purpose: operators pick the next corrective
/// action from the tier (re-run collection vs. wait for more data vs.
/// proceed), so callers branch on the variant instead of parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DatasetReadiness {
    /// Counts meet the minimum and (if required) both classes are present
    Ready {
        total: u64,
        benign: u64,
        malicious: u64,
    },
    /// Collection has run but the corpus is below minimum or single-class
    Unbalanced {
        total: u64,
        benign: u64,
        malicious: u64,
        min_total: u64,
    },
    /// No samples at all - the upstream collection step never ran
    Empty,
}

impl DatasetReadiness {
    pub fn is_ready(&self) -> bool {
        matches!(self, DatasetReadiness::Ready { .. })
    }

    /// Human-readable diagnostic for this tier
    pub fn message(&self) -> String {
        match self {
            DatasetReadiness::Ready {
                total,
                benign,
                malicious,
            } => format!(
                "Dataset ready: {} samples ({} benign / {} malicious)",
                total, benign, malicious
            ),
            DatasetReadiness::Unbalanced {
                total,
                benign,
                malicious,
                min_total,
            } => format!(
                "Dataset incomplete or unbalanced: {} samples ({} benign / {} malicious), \
                 need at least {} with both classes present",
                total, benign, malicious, min_total
            ),
            DatasetReadiness::Empty => {
                "No samples found in the dataset; run collection before training".to_string()
            }
        }
    }
}
