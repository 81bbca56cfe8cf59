#![allow(dead_code)]
// tests/common/fixtures.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const CREATED: &str = "01/06/2022 08:30:00";
pub const MODIFIED: &str = "15/07/2023 18:45:10";

/// A scratch directory holding one text file.
pub struct Fixture {
    dir: TempDir,
    file: PathBuf,
}

impl Fixture {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = dir.path().join(name);
        fs::write(&file, "timestamp fixture\n").expect("write fixture");
        Self { dir, file }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
