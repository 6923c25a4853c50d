//! Error handling
//!
//! Expected conditions (probe unavailable, empty dataset, over-threshold
//! usage) are modeled as data, never as errors. The only failure class is
//! a contract violation by the caller, rejected fail-fast at the boundary.

use thiserror::Error;

pub type GateResult<T> = Result<T, GateError>;

#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration value outside its contract (zero widths, bad threshold,
    /// inverted bounds)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed caller input (e.g. an unparseable statistics document)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
