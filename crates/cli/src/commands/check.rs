//! `check`: parse an env file without touching the environment.

use anyhow::{Context, Result};
use envfile::EnvFileLoader;
use std::path::Path;

use crate::error::ExitCode;

pub fn run(loader: &EnvFileLoader, path: &Path) -> Result<i32> {
    let map = loader
        .read_file(path)
        .with_context(|| format!("Env file check failed for {}", path.display()))?;

    println!("{}: {} variable(s) OK", path.display(), map.len());
    Ok(ExitCode::Success.as_i32())
}
