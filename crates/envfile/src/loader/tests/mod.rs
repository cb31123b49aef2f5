//! Tests for the env file loader.
//!
//! Responsibilities:
//! - Test merging into an in-memory store (precedence, atomicity, reports).
//! - Test `load`/`try_load` against the real process environment.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and
//!   `env_lock()` to prevent cross-test contamination.
//! - Env files live in `tempfile` directories and are cleaned up automatically.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes `contents` to an env file inside `dir` and returns its path.
pub fn write_env_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join(".env");
    std::fs::write(&path, contents).expect("Failed to write env file");
    path
}
