// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use marker_tally::{
    app,
    cli::Args,
    config::{Config, Verbosity},
    logging,
};

/// Configuration problems stop the run before any file is touched.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(Verbosity::from(&args));

    let config = match Config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("marker_tally: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("marker_tally: {e:#}");
            ExitCode::FAILURE
        }
    }
}
