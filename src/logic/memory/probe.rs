//! Memory Probe
//!
//! Reads currently available system memory via the sysinfo crate.
//! Environments without memory introspection report `Unavailable` -
//! never a sentinel number - so downstream checks can branch on absence.

use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::constants::BYTES_PER_GB;

// ============================================================================
// MEMORY READING
// ============================================================================

/// A single reading of available system memory.
///
/// Absence of information is a distinct variant, never coerced to zero:
/// zero available memory and an unavailable probe lead to different
/// admission behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MemoryReading {
    Available { available_gb: f64 },
    Unavailable,
}

impl MemoryReading {
    pub fn available(gb: f64) -> Self {
        MemoryReading::Available { available_gb: gb }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, MemoryReading::Available { .. })
    }
}

// ============================================================================
// PROBE
// ============================================================================

/// Source of memory readings. The gate itself never probes; callers
/// resolve a reading first and pass it in.
pub trait MemoryProbe {
    fn read(&self) -> MemoryReading;
}

/// sysinfo-backed probe for the host OS.
#[derive(Debug, Default)]
pub struct SystemMemoryProbe;

impl MemoryProbe for SystemMemoryProbe {
    fn read(&self) -> MemoryReading {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            log::warn!("Memory introspection not supported on this platform");
            return MemoryReading::Unavailable;
        }

        let mut sys = System::new();
        sys.refresh_memory();

        // A zero total means the refresh produced nothing usable
        if sys.total_memory() == 0 {
            log::warn!("Memory probe returned no data");
            return MemoryReading::Unavailable;
        }

        let available_gb = sys.available_memory() as f64 / BYTES_PER_GB;
        log::debug!("Memory probe: {:.2} GB available", available_gb);
        MemoryReading::available(available_gb)
    }
}

/// Fixed probe for tests and for embedding services that resolve memory
/// through their own channel.
#[derive(Debug, Clone, Copy)]
pub struct FixedMemoryProbe(pub MemoryReading);

impl MemoryProbe for FixedMemoryProbe {
    fn read(&self) -> MemoryReading {
        self.0
    }
}
