//! API Module - External Contract
//!
//! Wire types and input parsing for callers (CLIs, training entry points,
//! status endpoints). No decision logic lives here.

pub mod report;
pub mod stats_input;
