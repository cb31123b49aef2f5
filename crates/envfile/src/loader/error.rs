//! Error types for env file loading.
//!
//! Invariants:
//! - Errors NEVER include raw env file line contents, only 1-based line
//!   numbers, so a malformed file cannot leak secrets into logs.
//! - Every failure is terminal for the current load; there are no retries.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::StoreError;

/// Why a single line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    EmptyLine,
    MissingSeparator,
    MultipleSeparators,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EmptyLine => "empty line",
            Self::MissingSeparator => "missing '=' between key and value",
            Self::MultipleSeparators => "more than one '=' on the line",
        })
    }
}

/// Errors that can occur while loading an env file.
#[derive(Error, Debug)]
pub enum EnvFileError {
    /// The file could not be opened or read (missing, permission denied,
    /// invalid UTF-8, stream error).
    #[error("failed to read env file{}", in_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error("invalid env file{} at line {line}: {kind}", in_path(.path))]
    Format {
        path: Option<PathBuf>,
        line: usize,
        kind: FormatErrorKind,
    },

    /// The environment refused a variable. Variables applied before this one
    /// stay set.
    #[error("failed to set environment variable '{name}'")]
    Set {
        name: String,
        #[source]
        source: StoreError,
    },
}

fn in_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" at {}", path.display()),
        None => String::new(),
    }
}

impl EnvFileError {
    /// Attaches the file path to errors produced while reading lines.
    pub(crate) fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Io { path: None, source } => Self::Io {
                path: Some(file.to_path_buf()),
                source,
            },
            Self::Format {
                path: None,
                line,
                kind,
            } => Self::Format {
                path: Some(file.to_path_buf()),
                line,
                kind,
            },
            other => other,
        }
    }

    /// The kind of format error, if this is one.
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            Self::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
