//! Environment stores the loader reads from and writes into.
//!
//! Responsibilities:
//! - Define the `EnvironmentStore` capability (get, set, list keys).
//! - Bind it to the host process environment (`ProcessEnv`).
//! - Provide an in-memory store (`MemoryEnv`) for tests and dry runs.
//!
//! Does NOT handle:
//! - Parsing env files (see `loader::parser`).
//! - Deciding which keys to apply (see `loader`).
//!
//! Invariants:
//! - `set` never panics; names and values the host would reject are reported
//!   as `StoreError` before `std::env::set_var` is reached.
//! - The process environment is unsynchronized global state. Callers mutate
//!   it only during single-threaded startup.

use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Reasons a store refuses to set a variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("variable name is empty")]
    EmptyName,

    #[error("variable name contains '=' or a NUL byte")]
    InvalidName,

    #[error("variable value contains a NUL byte")]
    InvalidValue,
}

/// Key/value environment the loader merges into.
pub trait EnvironmentStore {
    /// Returns the value of `name`, or `None` when it is unset or not valid Unicode.
    fn get(&self, name: &str) -> Option<String>;

    /// Sets `name` to `value`.
    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError>;

    /// Names of every variable currently defined.
    fn keys(&self) -> HashSet<String>;
}

/// Rejects names and values the host environment cannot hold.
pub(crate) fn validate(name: &str, value: &str) -> Result<(), StoreError> {
    if name.is_empty() {
        return Err(StoreError::EmptyName);
    }
    if name.contains(['=', '\0']) {
        return Err(StoreError::InvalidName);
    }
    if value.contains('\0') {
        return Err(StoreError::InvalidValue);
    }
    Ok(())
}

/// The host process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvironmentStore for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError> {
        validate(name, value)?;
        // SAFETY: env files are loaded during single-threaded startup; see
        // module invariants.
        unsafe {
            std::env::set_var(name, value);
        }
        Ok(())
    }

    fn keys(&self) -> HashSet<String> {
        std::env::vars_os()
            .map(|(key, _)| key.to_string_lossy().into_owned())
            .collect()
    }
}

/// An environment held in memory.
///
/// Applies the same name/value rules as [`ProcessEnv`] so a dry run fails
/// where a real load would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment (Unicode entries only).
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentStore for MemoryEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), StoreError> {
        validate(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn keys(&self) -> HashSet<String> {
        self.vars.keys().cloned().collect()
    }
}
