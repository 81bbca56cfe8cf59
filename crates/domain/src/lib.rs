//! # Domain
//!
//! Pure timestamp logic with no I/O:
//!
//! - [`codec`]: the fixed `dd/mm/yyyy hh:mm:ss` text format and its parser
//! - [`outcome`]: the tri-state result reported for an apply attempt

#![allow(clippy::multiple_crate_versions)]

pub mod codec;
pub mod outcome;

pub use codec::{DATE_PATTERN, DISPLAY_PATTERN, DateCodec};
pub use outcome::ApplyOutcome;
