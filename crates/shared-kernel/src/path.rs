// crates/shared-kernel/src/path.rs
use std::path::{Path, PathBuf};

/// Anchor `path` at the working directory without touching the filesystem.
///
/// Symlinks are not resolved and the target need not exist; the handle must
/// keep pointing at what the caller selected even if it is removed later.
pub fn logical_absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        let abs = std::env::temp_dir().join("file_times_absolute.txt");
        assert_eq!(logical_absolute(&abs), abs);
    }

    #[test]
    fn missing_relative_paths_are_still_anchored() {
        let resolved = logical_absolute(Path::new("does/not/exist.bin"));
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("does/not/exist.bin"));
    }
}
