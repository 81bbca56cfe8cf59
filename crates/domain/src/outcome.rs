// crates/domain/src/outcome.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of one apply attempt, as seen by the presentation layer.
///
/// `Failure` deliberately does not say why: parse errors, write errors and
/// verification mismatches all collapse into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    NoFile,
    Success,
    Failure,
}

impl ApplyOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Message shown to the user for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoFile => "No file selected.",
            Self::Success => "File was updated successfully.",
            Self::Failure => "An error occurred. Check date format (dd/mm/yyyy hh:mm:ss).",
        }
    }
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
