//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled with the `test-utils` feature, for tests and
//! benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::output::TOC_FILE;

/// A temporary directory to document.
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

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Write `.toc.yaml` with the given YAML.
    pub fn add_config(&self, yaml: &str) -> PathBuf {
        self.add_file(crate::config::CONFIG_FILE, yaml)
    }

    /// Contents of the generated `TOC.md`, if any.
    pub fn read_toc(&self) -> Option<String> {
        fs::read_to_string(self.dir.path().join(TOC_FILE)).ok()
    }

    /// Fill the directory with `dirs` directories of `files_per_dir`
    /// commented source files each.
    pub fn populate(&self, dirs: usize, files_per_dir: usize) {
        for d in 0..dirs {
            self.add_file(&format!("dir{d}/README.md"), &format!("# Directory {d}\n"));
            for f in 0..files_per_dir {
                self.add_file(
                    &format!("dir{d}/file{f}.rs"),
                    &format!("// File {f} of directory {d}\nfn main() {{}}\n"),
                );
            }
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
