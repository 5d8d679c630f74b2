//! Test harness for tree-exporter integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use tree_exporter::test_utils::TestTree;

/// Run the binary in `dir`, returning (stdout, stderr, success).
pub fn run_tree_exporter(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_tree-exporter");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run tree-exporter");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
