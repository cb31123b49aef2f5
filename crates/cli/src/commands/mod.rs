//! Command implementations.
//!
//! Each command returns the process exit status it wants; errors are mapped
//! to exit codes by `main`.

pub mod apply;
pub mod check;
pub mod get;
pub mod run;
