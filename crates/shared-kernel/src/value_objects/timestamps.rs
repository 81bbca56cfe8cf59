// crates/shared-kernel/src/value_objects/timestamps.rs
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The two mutable time attributes of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampKind {
    Created,
    Modified,
}

impl TimestampKind {
    pub const ALL: [Self; 2] = [Self::Created, Self::Modified];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "creation",
            Self::Modified => "modification",
        }
    }
}

impl fmt::Display for TimestampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creation and modification instants of one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampPair {
    pub created: DateTime<Local>,
    pub modified: DateTime<Local>,
}

impl TimestampPair {
    pub fn new(created: DateTime<Local>, modified: DateTime<Local>) -> Self {
        Self { created, modified }
    }

    pub fn get(&self, kind: TimestampKind) -> DateTime<Local> {
        match kind {
            TimestampKind::Created => self.created,
            TimestampKind::Modified => self.modified,
        }
    }
}
