// dashpack-cli/src/main.rs
//
// Entry point for the dashpack binary.
//
// Responsibilities:
// - Parsing command-line arguments (usage errors exit through clap)
// - Setting up console and optional file logging
// - Running the validate -> demux -> package pipeline
// - Exiting with the status of the first failing external tool

use clap::Parser;
use dashpack_cli::error::setup_failure_status;
use dashpack_cli::{Cli, LogConfig, exit_status, init_logging, run_dash};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        verbose: cli.verbose,
        log_dir: cli.log_dir.clone(),
    };
    match init_logging(&log_config) {
        Ok(Some(log_file)) => log::info!("Logging to {}", log_file.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(setup_failure_status());
        }
    }

    let result = run_dash(&cli);
    process::exit(exit_status(&result));
}
