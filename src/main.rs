//! Qucsim - tiny DC circuit simulator
//!
//! Reads a Qucs-style netlist and writes a Qucs dataset.
//!
//! # Usage
//!
//! ```bash
//! qucsim -i circuit.net -o circuit.dat
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use qucsim_core::{
    decode_file,
    error::Result,
    files::simulate_file,
    solver::DEFAULT_PIVOT_TOLERANCE,
    SimulatorConfig,
};

/// Tiny MNA solver for DC resistive circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(short = 'i', long = "input", value_name = "NETLIST")]
    input: PathBuf,

    /// Path of the dataset file to write
    #[arg(short = 'o', long = "output", value_name = "DATASET")]
    output: PathBuf,

    /// Pivots below this magnitude are treated as zero
    #[arg(long, default_value_t = DEFAULT_PIVOT_TOLERANCE)]
    pivot_tolerance: f64,

    /// Decode the written dataset and print a summary of each block
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = SimulatorConfig::new().with_pivot_tolerance(args.pivot_tolerance);
    simulate_file(&args.input, &args.output, config)?;

    if args.summary {
        let mut results: Vec<_> = decode_file(&args.output)?.into_iter().collect();
        results.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, values) in results {
            match (values.first(), values.last()) {
                (Some(first), Some(last)) => {
                    println!("{}: {} .. {} ({} points)", name, first, last, values.len())
                }
                _ => println!("{}: (no points)", name),
            }
        }
    }

    Ok(())
}
