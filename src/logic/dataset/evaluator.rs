//! Dataset Readiness Evaluator
//!
//! Pure classification of the corpus counts into the three readiness tiers.
//! Input: DatasetStatistics + thresholds. Output: DatasetReadiness.

use super::types::{DatasetReadiness, DatasetStatistics};

/// Evaluate whether the labeled corpus is adequate for training.
///
/// `total_samples == 0` is its own tier ("empty"), distinct from a corpus
/// that is merely below the minimum, because it means collection never ran.
pub fn evaluate(
    stats: &DatasetStatistics,
    min_total: u64,
    require_both_classes: bool,
) -> DatasetReadiness {
    if stats.total_samples == 0 {
        return DatasetReadiness::Empty;
    }

    let meets_minimum = stats.total_samples >= min_total;
    let classes_ok =
        !require_both_classes || (stats.benign_count > 0 && stats.malicious_count > 0);

    if meets_minimum && classes_ok {
        DatasetReadiness::Ready {
            total: stats.total_samples,
            benign: stats.benign_count,
            malicious: stats.malicious_count,
        }
    } else {
        DatasetReadiness::Unbalanced {
            total: stats.total_samples,
            benign: stats.benign_count,
            malicious: stats.malicious_count,
            min_total,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(total: u64, benign: u64, malicious: u64) -> DatasetStatistics {
        DatasetStatistics {
            total_samples: total,
            labeled_samples: benign + malicious,
            benign_count: benign,
            malicious_count: malicious,
        }
    }

    #[test]
    fn test_ready_dataset() {
        let outcome = evaluate(&stats(1500, 900, 600), 1000, true);
        assert!(outcome.is_ready());
        assert_eq!(
            outcome,
            DatasetReadiness::Ready {
                total: 1500,
                benign: 900,
                malicious: 600,
            }
        );
        assert!(outcome.message().contains("900 benign / 600 malicious"));
    }

    #[test]
    fn test_empty_is_its_own_tier() {
        let outcome = evaluate(&stats(0, 0, 0), 1000, true);
        assert_eq!(outcome, DatasetReadiness::Empty);
        assert!(outcome.message().contains("No samples found"));
    }

    #[test]
    fn test_single_class_is_unbalanced() {
        let outcome = evaluate(&stats(500, 500, 0), 1000, true);
        assert!(!outcome.is_ready());
        assert!(matches!(outcome, DatasetReadiness::Unbalanced { .. }));
        assert!(outcome.message().contains("incomplete or unbalanced"));
        assert!(outcome.message().contains("500 benign / 0 malicious"));
    }

    #[test]
    fn test_unbalanced_distinct_from_empty() {
        let unbalanced = evaluate(&stats(500, 500, 0), 1000, true);
        let empty = evaluate(&stats(0, 0, 0), 1000, true);
        assert_ne!(unbalanced, empty);
        assert_ne!(unbalanced.message(), empty.message());
    }

    #[test]
    fn test_minimum_boundary() {
        assert!(evaluate(&stats(1000, 600, 400), 1000, true).is_ready());
        assert!(!evaluate(&stats(999, 600, 399), 1000, true).is_ready());
    }

    #[test]
    fn test_zero_minimum_is_vacuous_but_empty_still_flagged() {
        // min_total = 0 disables the size requirement without collapsing
        // the empty tier
        assert!(evaluate(&stats(5, 3, 2), 0, true).is_ready());
        assert_eq!(evaluate(&stats(0, 0, 0), 0, true), DatasetReadiness::Empty);
    }

    #[test]
    fn test_class_requirement_can_be_disabled() {
        let outcome = evaluate(&stats(2000, 2000, 0), 1000, false);
        assert!(outcome.is_ready());
    }

    #[test]
    fn test_above_minimum_but_single_class() {
        // Plenty of samples, still not ready when one class is missing
        let outcome = evaluate(&stats(5000, 0, 5000), 1000, true);
        assert!(matches!(outcome, DatasetReadiness::Unbalanced { .. }));
    }
}
