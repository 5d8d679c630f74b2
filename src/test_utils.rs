//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (possibly nested) empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create `count` files spread over `dirs` subdirectories.
    pub fn populate(&self, dirs: usize, count: usize) {
        for i in 0..count {
            let dir = i % dirs.max(1);
            self.add_file(&format!("dir_{dir}/file_{i}.txt"), "");
        }
    }

    /// Add one of each denylisted entry kind at the root.
    pub fn populate_noise(&self) {
        self.add_file(".git/HEAD", "ref: refs/heads/main\n");
        self.add_file("node_modules/dep/index.js", "");
        self.add_file("out/Main.class", "");
        self.add_file("Main.class", "");
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
