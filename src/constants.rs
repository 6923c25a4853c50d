//! Central Configuration Constants
//!
//! Single source of truth for all gate policy defaults.
//! To change a default threshold, only edit this file.

/// Minimum labeled samples before training is considered worthwhile
pub const DEFAULT_MIN_TOTAL_SAMPLES: u64 = 1000;

/// Require at least one benign and one malicious sample by default
pub const DEFAULT_REQUIRE_BOTH_CLASSES: bool = true;

/// Feature vector width of a flow record
pub const DEFAULT_FEATURE_COUNT: u32 = 81;

/// Bytes per feature value (double precision)
pub const DEFAULT_BYTES_PER_VALUE: u32 = 8;

/// Overhead allowance for intermediate processing structures built on top
/// of the raw values. Policy constant, not a measured quantity.
pub const MEMORY_OVERHEAD_FACTOR: f64 = 1.2;

/// Fraction of available memory an estimated job may consume before being
/// flagged unsafe
pub const DEFAULT_MEMORY_THRESHOLD: f64 = 0.8;

/// Fraction of free memory the batch recommender plans against, leaving
/// headroom for the OS, other processes, and estimation error
pub const USABLE_MEMORY_FRACTION: f64 = 0.5;

/// Batch size floor
pub const DEFAULT_BATCH_MIN: u64 = 10_000;

/// Batch size ceiling
pub const DEFAULT_BATCH_MAX: u64 = 500_000;

/// Memory-agnostic fallback batch size when the probe is unavailable.
/// Conservative for typical commodity hardware.
pub const FALLBACK_BATCH_SIZE: u64 = 100_000;

/// Bytes in a gibibyte
pub const BYTES_PER_GB: f64 = (1u64 << 30) as f64;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "traingate";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Read a parseable value from the environment, falling back to the default
pub fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
