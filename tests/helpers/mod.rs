//! Shared test fixtures: on-disk Go packages in temp directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A Go package laid out in a temp directory, built file by file.
pub struct GoPackage {
    dir: TempDir,
}

impl GoPackage {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create tempdir"),
        }
    }

    pub fn file(self, name: &str, contents: &str) -> Self {
        fs::write(self.dir.path().join(name), contents).expect("write fixture file");
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
