// crates/ports/src/timestamps.rs
use std::{path::Path, time::SystemTime};

use file_times_shared_kernel::{Result, TimestampKind};

/// Port for the time attributes of a single filesystem entry.
///
/// Implementations report failures per attribute; a store that cannot set a
/// given attribute on the current platform returns an `Unsupported` error
/// rather than silently ignoring the write.
pub trait TimestampStore: Send + Sync {
    fn read(&self, path: &Path, kind: TimestampKind) -> Result<SystemTime>;

    fn write(&self, path: &Path, kind: TimestampKind, value: SystemTime) -> Result<()>;
}
