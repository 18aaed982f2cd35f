//!
//! Parses, validates, and simulates a circuit description.
//!
//! Usage: `run <file.hw>`
//!
//! Prints one line per recorded trace, inputs first, in the same
//! `0101 Name` notation used by .simulate sections.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use gatework_dsl::{parse, validate};
use gatework_runtime::Circuit;

#[derive(Parser, Debug)]
#[command(name = "run")]
#[command(about = "Simulate a .hw circuit and print its traces")]
struct Args {
    /// Path to the circuit description
    file: PathBuf,
}

fn main() {
    gatework_tools::init_logging();

    let args = Args::parse();

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
        error!("Problems found in '{}':", args.file.display());
        for problem in &problems {
            error!("  - {}", problem);
        }
        process::exit(1);
    }

    info!("Loaded circuit: {}", def.name);

    let mut circuit = match Circuit::new(def) {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid simulation input: {}", e);
            process::exit(1);
        }
    };

    info!("Running {} cycles...", circuit.simlength());

    let traces = match circuit.run() {
        Ok(traces) => traces,
        Err(e) => {
            error!("Simulation failed: {}", e);
            process::exit(1);
        }
    };

    for trace in traces {
        println!("{trace}");
    }

    info!("Simulation complete!");
}
