//! # Infrastructure
//!
//! Adapters implementing the ports against the real filesystem.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod platform;
pub mod timestamps;

pub use timestamps::FsTimestampStore;
