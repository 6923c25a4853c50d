//! Logic Module - Admission Decision Engines
//!
//! - `memory/` - footprint estimation, batch sizing, sufficiency check
//! - `dataset/` - labeled-corpus readiness evaluation
//! - `gate` - combines both sides into one admission report

pub mod config;
pub mod error;
pub mod gate;

pub mod dataset;
pub mod memory;
