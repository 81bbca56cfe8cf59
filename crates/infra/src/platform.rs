// crates/infra/src/platform.rs
//! Platform-specific abstractions for file time attributes.
//!
//! This module centralizes the OS-specific pieces so the store itself stays
//! free of scattered conditional compilation.

use std::{io, path::Path, time::SystemTime};

/// Whether this target can set a file's creation (birth) time.
///
/// Windows and macOS expose it through `SetFileTime`/`setattrlist`; Linux and
/// the other Unix targets have no syscall for it.
pub const fn creation_time_writable() -> bool {
    cfg!(any(windows, target_os = "macos"))
}

/// Whether the filesystem holding `path` reports a creation time at all.
pub fn creation_time_readable(path: &Path) -> bool {
    std::fs::metadata(path).and_then(|md| md.created()).is_ok()
}

/// Set only the creation time of `path`, leaving the other times untouched.
#[cfg(any(windows, target_os = "macos"))]
pub fn set_created(path: &Path, value: SystemTime) -> io::Result<()> {
    use std::fs::FileTimes;

    #[cfg(target_os = "macos")]
    use std::os::macos::fs::FileTimesExt;
    #[cfg(windows)]
    use std::os::windows::fs::FileTimesExt;

    let file = open_for_attributes(path)?;
    file.set_times(FileTimes::new().set_created(value))
}

#[cfg(not(any(windows, target_os = "macos")))]
pub fn set_created(_path: &Path, _value: SystemTime) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "creation time cannot be set on this platform"))
}

// Only attribute access is requested so read-only files can still be edited.
// Windows needs FILE_WRITE_ATTRIBUTES; macOS `fsetattrlist` only needs ownership.
#[cfg(windows)]
fn open_for_attributes(path: &Path) -> io::Result<std::fs::File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    std::fs::OpenOptions::new().access_mode(FILE_WRITE_ATTRIBUTES).open(path)
}

#[cfg(target_os = "macos")]
fn open_for_attributes(path: &Path) -> io::Result<std::fs::File> {
    std::fs::File::open(path)
}
