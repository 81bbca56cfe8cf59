// crates/infra/src/timestamps.rs
use std::{io, path::Path, time::SystemTime};

use file_times_ports::TimestampStore;
use file_times_shared_kernel::{InfrastructureError, Result, TimestampKind};
use filetime::FileTime;

use crate::platform;

/// Filesystem adapter implementing the `TimestampStore` port.
///
/// Symlinks are followed for both reads and writes, so the edited attributes
/// always belong to the same entry that was displayed.
#[derive(Debug, Default)]
pub struct FsTimestampStore;

impl FsTimestampStore {
    pub fn new() -> Self {
        Self
    }
}

impl TimestampStore for FsTimestampStore {
    fn read(&self, path: &Path, kind: TimestampKind) -> Result<SystemTime> {
        let value = read_attribute(path, kind).map_err(|source| InfrastructureError::MetadataRead {
            kind,
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {kind} time of {}", path.display());
        Ok(value)
    }

    fn write(&self, path: &Path, kind: TimestampKind, value: SystemTime) -> Result<()> {
        write_attribute(path, kind, value).map_err(|source| write_error(path, kind, source))?;
        log::debug!("wrote {kind} time of {}", path.display());
        Ok(())
    }
}

fn read_attribute(path: &Path, kind: TimestampKind) -> io::Result<SystemTime> {
    let metadata = std::fs::metadata(path)?;
    match kind {
        TimestampKind::Created => metadata.created(),
        TimestampKind::Modified => metadata.modified(),
    }
}

fn write_attribute(path: &Path, kind: TimestampKind, value: SystemTime) -> io::Result<()> {
    match kind {
        TimestampKind::Created => platform::set_created(path, value),
        // set_file_mtime leaves the access time alone.
        TimestampKind::Modified => filetime::set_file_mtime(path, FileTime::from_system_time(value)),
    }
}

fn write_error(path: &Path, kind: TimestampKind, source: io::Error) -> InfrastructureError {
    if source.kind() == io::ErrorKind::Unsupported {
        InfrastructureError::Unsupported { kind, path: path.to_path_buf() }
    } else {
        InfrastructureError::MetadataWrite { kind, path: path.to_path_buf(), source }
    }
}
