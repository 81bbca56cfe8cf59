//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`editor`]: the single-file timestamp edit session (read, apply, verify,
//!   best-effort rollback)
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod editor;

pub use editor::TimestampEditor;
