// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use file_times::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let config = Config::from(Args::parse());
    logging::init(config.log_level);

    match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
