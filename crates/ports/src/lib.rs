//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`timestamps`]: reading and writing a file's creation/modification times
//!
//! The editor only talks to the filesystem through these traits, so it can
//! be exercised against in-memory stores in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod timestamps;

pub use timestamps::TimestampStore;
