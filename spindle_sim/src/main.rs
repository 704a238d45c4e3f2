// spindle_sim/src/main.rs

use clap::Parser;
use log::error;

use spindle_sim::cli::Cli;
use spindle_sim::{runner, scenario};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let scenario = match scenario::load_scenario(&cli.scenario) {
        Ok(s) => s,
        Err(e) => {
            error!("cannot start: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = runner::run(&scenario) {
        error!("simulation failed: {e}");
        std::process::exit(1);
    }
}
