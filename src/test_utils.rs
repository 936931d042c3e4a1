//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for testing, removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file of `len` bytes, creating parent directories as needed.
    pub fn add_file(&self, path: &str, len: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'x'; len]).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate `width` directories per level, `depth` levels deep, each
    /// holding `files` files of 64 bytes.
    pub fn populate(&self, width: usize, depth: usize, files: usize) {
        let mut level = vec![String::new()];
        for _ in 0..depth {
            let mut next = Vec::new();
            for parent in &level {
                for f in 0..files {
                    self.add_file(&format!("{}file_{}.txt", parent, f), 64);
                }
                for d in 0..width {
                    let dir = format!("{}dir_{}/", parent, d);
                    self.add_dir(&dir);
                    next.push(dir);
                }
            }
            level = next;
        }
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
