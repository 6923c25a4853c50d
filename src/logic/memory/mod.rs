//! Memory Module - Footprint Estimation & Admission
//!
//! - `probe` - reads available system memory (sysinfo-backed)
//! - `budget` - estimates the in-memory footprint of the full dataset
//! - `batch` - recommends a safe chunk size for streaming loads
//! - `sufficiency` - footprint vs. available memory verdict
//!
//! Policy constants live in `crate::constants`.

pub mod batch;
pub mod budget;
pub mod probe;
pub mod sufficiency;

pub use probe::{FixedMemoryProbe, MemoryProbe, MemoryReading, SystemMemoryProbe};
