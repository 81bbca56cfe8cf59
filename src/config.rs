// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;

use crate::cli::{Args, Command};

/// How `show` renders its report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What the binary was asked to do, resolved from the CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show { path: PathBuf, format: OutputFormat },
    Set { path: PathBuf, created: Option<String>, modified: Option<String> },
    Interactive,
}

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub action: Action,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let log_level = log_level(args.verbose, args.quiet);
        let action = match args.command {
            Command::Show(show) => Action::Show { path: show.path, format: show.format.into() },
            Command::Set(set) => Action::Set { path: set.path, created: set.created, modified: set.modified },
            Command::Interactive => Action::Interactive,
        };
        Self { action, log_level }
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
