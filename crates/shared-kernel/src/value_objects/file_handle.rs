// crates/shared-kernel/src/value_objects/file_handle.rs
use std::path::{Path, PathBuf};

use crate::path::logical_absolute;

/// Reference to the single file an edit session operates on.
///
/// Existence is not checked on construction; reads and writes report missing
/// files when they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: logical_absolute(path.as_ref()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display(&self) -> std::path::Display<'_> {
        self.path.display()
    }

    /// File name for headers and prompts; falls back to the full path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl AsRef<Path> for FileHandle {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
