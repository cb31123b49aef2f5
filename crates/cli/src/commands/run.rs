//! `run`: load the env file, then run a command with the merged environment.
//!
//! A missing env file is skipped; a malformed one aborts before spawning.

use anyhow::{Context, Result, bail};
use envfile::{EnvFileLoader, ProcessEnv};
use std::path::Path;
use std::process::Command;

use crate::error::ExitCode;

pub fn run(loader: Option<&EnvFileLoader>, path: &Path, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        bail!("No command given");
    };

    if let Some(loader) = loader {
        match loader.load_into(path, &mut ProcessEnv) {
            Ok(_) => {}
            // A missing env file is not an error; a broken one is.
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "No env file, running without it");
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to load {}", path.display()));
            }
        }
    }

    tracing::debug!(program = %program, "Spawning command");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run '{}'", program))?;

    // Killed by a signal: no code, report a general failure.
    Ok(status
        .code()
        .unwrap_or_else(|| ExitCode::GeneralError.as_i32()))
}
