//! Env file loader.
//!
//! Responsibilities:
//! - Read a `KEY=VALUE` file and merge it into an `EnvironmentStore`.
//! - Provide `load`/`try_load` shortcuts bound to the process environment.
//!
//! Does NOT handle:
//! - Line syntax (see `parser.rs`).
//! - Typed reads of single variables (see `accessors.rs`).
//!
//! Invariants / Assumptions:
//! - Variables already defined in the environment always win over file values.
//! - Nothing is merged unless every line of the file parses.
//! - A failed `set` stops the merge; variables applied before it stay set.
//! - Logs carry variable names only, never values.

mod error;
mod options;
mod parser;
mod report;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::store::{EnvironmentStore, ProcessEnv};

pub use error::{EnvFileError, FormatErrorKind};
pub use options::{LoaderOptions, SplitPolicy};
pub use parser::{EnvMap, parse_line, parse_reader, parse_str};
pub use report::LoadReport;

/// Loads env files into an environment store.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvFileLoader {
    options: LoaderOptions,
}

impl EnvFileLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Reads and parses `path` without touching any environment.
    ///
    /// # Errors
    ///
    /// - `EnvFileError::Io` if the file is missing, unreadable or not UTF-8.
    /// - `EnvFileError::Format` at the first malformed line.
    pub fn read_file(&self, path: &Path) -> Result<EnvMap, EnvFileError> {
        let file = File::open(path).map_err(|source| EnvFileError::Io {
            path: Some(path.to_path_buf()),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Reading env file");

        parse_reader(BufReader::new(file), self.options.split_policy)
            .map_err(|e| e.with_path(path))
    }

    /// Sets every key of `map` that `store` does not already define.
    ///
    /// # Errors
    ///
    /// Returns `EnvFileError::Set` for the first variable the store refuses.
    /// Variables set before it are not rolled back.
    pub fn merge_into<S: EnvironmentStore + ?Sized>(
        &self,
        map: &EnvMap,
        store: &mut S,
    ) -> Result<LoadReport, EnvFileError> {
        let existing = store.keys();
        let mut report = LoadReport {
            parsed: map.len(),
            ..LoadReport::default()
        };

        for (key, value) in map {
            if existing.contains(key) {
                tracing::debug!(key = %key, "Keeping existing environment variable");
                report.skipped_keys.push(key.clone());
                continue;
            }
            store.set(key, value).map_err(|source| EnvFileError::Set {
                name: key.clone(),
                source,
            })?;
            tracing::debug!(key = %key, "Set environment variable from env file");
            report.applied_keys.push(key.clone());
        }

        Ok(report)
    }

    /// Reads `path` and merges it into `store`.
    pub fn load_into<S: EnvironmentStore + ?Sized>(
        &self,
        path: &Path,
        store: &mut S,
    ) -> Result<LoadReport, EnvFileError> {
        let map = self.read_file(path)?;
        let report = self.merge_into(&map, store)?;
        tracing::info!(
            path = %path.display(),
            parsed = report.parsed,
            applied = report.applied(),
            skipped = report.skipped_existing(),
            "Loaded env file"
        );
        Ok(report)
    }

    /// Like [`load_into`](Self::load_into), but never fails.
    ///
    /// A path that does not exist is silently ignored. Any other failure is
    /// logged at warn level and `None` is returned.
    pub fn try_load_into<S: EnvironmentStore + ?Sized>(
        &self,
        path: &Path,
        store: &mut S,
    ) -> Option<LoadReport> {
        if std::fs::metadata(path).is_err() {
            return None;
        }
        match self.load_into(path, store) {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load env file");
                None
            }
        }
    }
}

/// Loads `path` into the process environment with default options.
///
/// Variables already set in the process are left untouched.
///
/// # Errors
///
/// See [`EnvFileLoader::load_into`].
pub fn load(path: impl AsRef<Path>) -> Result<(), EnvFileError> {
    EnvFileLoader::default()
        .load_into(path.as_ref(), &mut ProcessEnv)
        .map(|_| ())
}

/// Loads `path` into the process environment if it exists, logging any failure.
pub fn try_load(path: impl AsRef<Path>) {
    EnvFileLoader::default().try_load_into(path.as_ref(), &mut ProcessEnv);
}
