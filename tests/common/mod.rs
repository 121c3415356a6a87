//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary source tree with a build/config/siso/.sisorc file
pub fn create_source_tree(sisorc: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("build").join("config").join("siso");
    fs::create_dir_all(&config_dir).unwrap();

    let sisorc_path = config_dir.join(".sisorc");
    fs::write(&sisorc_path, sisorc).unwrap();
    (temp_dir, sisorc_path)
}

/// Build an owned argument vector
pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
