//! Shared test utilities for envfile-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Commands start with the envfile-related variables cleared, so the
//!   host environment cannot change which file is read or how.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `envfile-cli` command running inside `dir`.
pub fn envfile_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envfile-cli");
    cmd.current_dir(dir)
        .env_remove("ENVFILE_PATH")
        .env_remove("ENVFILE_SPLIT_POLICY")
        .env_remove("ENVFILE_DISABLED")
        .env_remove("RUST_LOG");
    cmd
}
