// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::{Args, Command, SetArgs, ShowArgs};
pub use value_enum::CliOutputFormat;
