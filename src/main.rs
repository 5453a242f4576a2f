//! Circuit Tree - resistive circuit simulator
//!
//! Loads a saved circuit snapshot, steps it forward and prints the state of
//! every component.
//!
//! # Usage
//!
//! ```bash
//! circuit-tree saved.json --steps 600 --time-step 0.0166
//! RUST_LOG=debug circuit-tree saved.json --json > solved.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use circuit_tree::{
    circuit::validate_circuit,
    error::Result,
    snapshot,
    solver::{SimulatorConfig, DEFAULT_TIME_STEP},
    Circuit, Component, Simulator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Resistive circuit tree simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit snapshot (.json)
    #[arg(value_name = "SNAPSHOT_FILE")]
    snapshot_file: PathBuf,

    /// Number of steps to simulate
    #[arg(short, long, default_value_t = 1)]
    steps: u64,

    /// Simulated seconds per step
    #[arg(short, long, default_value_t = DEFAULT_TIME_STEP)]
    time_step: f64,

    /// Zero consumption counters before simulating
    #[arg(long)]
    reset_consumption: bool,

    /// Print the solved circuit as a JSON snapshot instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load and rebuild the circuit
    let snapshot = snapshot::read_file(&args.snapshot_file)?;
    let circuit = Circuit::from_snapshot(&snapshot);
    validate_circuit(&circuit)?;
    info!(path = %args.snapshot_file.display(), components = circuit.len(), "snapshot loaded");

    // Simulate
    let config = SimulatorConfig::new()
        .with_time_step(args.time_step)
        .with_reset_consumption(args.reset_consumption);
    let mut simulator = Simulator::with_config(circuit, config)?;
    let summary = simulator.run(args.steps);
    info!(
        steps = simulator.steps(),
        elapsed = simulator.elapsed(),
        failed = summary.has_failed,
        "simulation finished"
    );

    if args.json {
        println!("{}", snapshot::to_json(&simulator.circuit().snapshot())?);
        return Ok(());
    }

    println!(
        "total resistance {:.4} ohm, current {:.4} A{}",
        summary.resistance,
        summary.current,
        if summary.has_failed { ", FAILED" } else { "" }
    );
    println!(
        "{:<6} {:<14} {:>12} {:>12} {:>12} {:>14}  {}",
        "id", "kind", "R (ohm)", "V", "I (A)", "consumption", "state"
    );
    simulator.circuit().root().walk(&mut |c: &Component| {
        println!(
            "{:<6} {:<14} {:>12.4} {:>12.4} {:>12.4} {:>14.4}  {}",
            c.id().to_string(),
            c.kind().to_string(),
            c.resistance,
            c.voltage,
            c.current,
            c.consumption,
            if c.has_failed { "failed" } else { "ok" }
        );
    });

    Ok(())
}
