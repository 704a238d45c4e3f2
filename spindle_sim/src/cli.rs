// spindle_sim/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Spindle: a headless rotating-rangefinder simulation harness.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/square_room.toml")]
    pub scenario: PathBuf,
}
