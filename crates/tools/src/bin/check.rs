//!
//! Parses and validates a circuit description without simulating it.
//!
//! Usage: `check <file.hw>`

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use gatework_dsl::{parse, validate};
use gatework_runtime::Circuit;

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(about = "Check a .hw circuit and report problems")]
struct Args {
    /// Path to the circuit description
    file: PathBuf,
}

fn main() {
    gatework_tools::init_logging();

    let args = Args::parse();

    if !args.file.exists() {
        error!("File '{}' does not exist", args.file.display());
        process::exit(1);
    }

    let source = match fs::read_to_string(&args.file) {
        Ok(s) => s,
        Err(e) => {
            error!("Error reading file '{}': {}", args.file.display(), e);
            process::exit(1);
        }
    };

    let def = match parse(&source) {
        Ok(def) => def,
        Err(e) => {
            error!("Parse error in '{}': {}", args.file.display(), e);
            process::exit(1);
        }
    };

    let problems = validate(&def);
    if !problems.is_empty() {
        error!("Problems found:");
        for problem in &problems {
            error!("  - {}", problem);
        }
        process::exit(1);
    }

    info!("Successfully parsed circuit '{}'", def.name);
    info!("  - Inputs: {}", def.inputs.len());
    info!("  - Outputs: {}", def.outputs.len());
    info!("  - Latches: {}", def.latches.len());
    info!("  - Functions: {}", def.definitions.len());
    info!("  - Updates: {}", def.updates.len());
    info!("  - Simulate rows: {}", def.siminputs.len());

    let circuit = match Circuit::new(def) {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid simulation input: {}", e);
            process::exit(1);
        }
    };
    info!("  - Cycles: {}", circuit.simlength());

    info!("No problems found.");
}
