//! `apply`: preview a load against a snapshot of the current environment.
//!
//! Prints variable names only, never values.

use anyhow::{Context, Result};
use envfile::{EnvFileLoader, MemoryEnv};
use std::path::Path;

use crate::error::ExitCode;

pub fn run(loader: &EnvFileLoader, path: &Path) -> Result<i32> {
    let mut snapshot = MemoryEnv::from_process();
    let report = loader
        .load_into(path, &mut snapshot)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    for key in &report.applied_keys {
        println!("set   {}", key);
    }
    for key in &report.skipped_keys {
        println!("keep  {}", key);
    }
    println!(
        "{} to set, {} already defined",
        report.applied(),
        report.skipped_existing()
    );
    Ok(ExitCode::Success.as_i32())
}
