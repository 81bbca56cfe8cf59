// src/logging.rs
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Install the stderr logger. The level comes from the CLI flags only.
pub fn init(level: LevelFilter) {
    let result = Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init();
    if let Err(err) = result {
        eprintln!("[warn] logger already initialised: {err}");
    }
}
