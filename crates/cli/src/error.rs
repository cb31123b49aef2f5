//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Exit code 2 is reserved for env file failures (missing, unreadable,
//!   malformed, or refused by the environment).
//! - `run` exits with the child's own status instead of these codes.

use envfile::EnvFileError;

/// Structured exit codes for envfile-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The env file could not be loaded.
    ///
    /// Scripts should fix the file rather than retry.
    EnvFileError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        if self
            .chain()
            .any(|cause| cause.downcast_ref::<EnvFileError>().is_some())
        {
            ExitCode::EnvFileError
        } else {
            ExitCode::GeneralError
        }
    }
}
