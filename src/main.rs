//! Traingate CLI - one readiness check per invocation
//!
//! Reads a dataset-statistics JSON document (file path or `-` for stdin),
//! probes host memory, runs the gate once, and prints the report as JSON.
//! Exit code: 0 = admit, 1 = deny, 2 = usage or input error.

use std::path::Path;
use std::process::ExitCode;

use traingate::api::stats_input;
use traingate::constants::{APP_NAME, APP_VERSION};
use traingate::logic::config::GateConfig;
use traingate::logic::error::GateError;
use traingate::logic::gate::ReadinessGate;
use traingate::logic::memory::{MemoryProbe, SystemMemoryProbe};

fn usage() {
    eprintln!("{} {}", APP_NAME, APP_VERSION);
    eprintln!("Usage: {} <stats.json | ->", APP_NAME);
    eprintln!();
    eprintln!("Reads dataset statistics as JSON (from a file, or stdin with '-'),");
    eprintln!("checks training readiness and memory admission, prints the report.");
}

fn run() -> Result<bool, GateError> {
    let arg = match std::env::args().nth(1) {
        Some(a) => a,
        None => {
            return Err(GateError::InvalidInput(
                "missing statistics argument".to_string(),
            ))
        }
    };

    let stats = if arg == "-" {
        stats_input::read_stats(std::io::stdin().lock())?
    } else {
        stats_input::read_stats_file(Path::new(&arg))?
    };

    let config = GateConfig::from_env();
    let gate = ReadinessGate::new(config)?;

    let reading = SystemMemoryProbe.read();
    let report = gate.run(&stats, reading);

    if report.admit {
        log::info!("Training admitted (batch size {})", report.recommended_batch_size);
    } else {
        for msg in &report.messages {
            log::warn!("{}", msg);
        }
    }

    // Report is the contract; print it verbatim as JSON
    println!(
        "{}",
        serde_json::to_string_pretty(&report)
            .map_err(|e| GateError::InvalidInput(format!("report serialization: {}", e)))?
    );

    Ok(report.admit)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            usage();
            ExitCode::from(2)
        }
    }
}
