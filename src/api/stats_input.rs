//! Dataset statistics input parsing
//!
//! The statistics source is an external collaborator (whatever store holds
//! the labeled flow records). CLIs hand its output to the gate as a JSON
//! document; this module turns that document into `DatasetStatistics`
//! before the core is invoked.

use std::io::Read;
use std::path::Path;

use crate::logic::dataset::types::DatasetStatistics;
use crate::logic::error::GateError;

/// Parse dataset statistics from a JSON string
pub fn parse_stats(json: &str) -> Result<DatasetStatistics, GateError> {
    serde_json::from_str(json)
        .map_err(|e| GateError::InvalidInput(format!("bad statistics document: {}", e)))
}

/// Read dataset statistics from a JSON file
pub fn read_stats_file(path: &Path) -> Result<DatasetStatistics, GateError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GateError::InvalidInput(format!("cannot read {}: {}", path.display(), e)))?;
    parse_stats(&content)
}

/// Read dataset statistics from any reader (e.g. stdin)
pub fn read_stats<R: Read>(mut reader: R) -> Result<DatasetStatistics, GateError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| GateError::InvalidInput(format!("cannot read statistics input: {}", e)))?;
    parse_stats(&content)
}
