//! Typed reads of single environment variables with defaults.
//!
//! Invariants:
//! - Unset and empty variables yield the caller's default.
//! - Numeric reads of a set but unparsable value (including out of range)
//!   yield zero, NOT the default. Callers rely on this.
//! - String values are returned as stored, without trimming.

use crate::store::{EnvironmentStore, ProcessEnv};

fn non_empty<S: EnvironmentStore + ?Sized>(store: &S, name: &str) -> Option<String> {
    store.get(name).filter(|value| !value.is_empty())
}

/// Typed getters available on every [`EnvironmentStore`].
pub trait TypedEnv: EnvironmentStore {
    fn get_string(&self, name: &str, default: &str) -> String {
        non_empty(self, name).unwrap_or_else(|| default.to_string())
    }

    fn get_int(&self, name: &str, default: i32) -> i32 {
        match non_empty(self, name) {
            Some(value) => value.parse().unwrap_or(0),
            None => default,
        }
    }

    fn get_int64(&self, name: &str, default: i64) -> i64 {
        match non_empty(self, name) {
            Some(value) => value.parse().unwrap_or(0),
            None => default,
        }
    }
}

impl<S: EnvironmentStore + ?Sized> TypedEnv for S {}

/// Reads `name` from the process environment, or `default` when unset or empty.
pub fn get(name: &str, default: &str) -> String {
    ProcessEnv.get_string(name, default)
}

/// Reads `name` as an `i32`. Unset or empty gives `default`; unparsable gives 0.
pub fn get_int(name: &str, default: i32) -> i32 {
    ProcessEnv.get_int(name, default)
}

/// Reads `name` as an `i64`. Unset or empty gives `default`; unparsable gives 0.
pub fn get_int64(name: &str, default: i64) -> i64 {
    ProcessEnv.get_int64(name, default)
}
