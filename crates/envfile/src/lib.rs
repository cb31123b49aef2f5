//! Minimal env file loading for application startup.
//!
//! This crate reads `KEY=VALUE` files into the process environment without
//! overriding variables that are already set, and provides typed getters
//! with defaults.
//!
//! ```no_run
//! envfile::try_load(".env");
//!
//! let port = envfile::get_int("PORT", 8080);
//! let host = envfile::get("HOST", "127.0.0.1");
//! # let _ = (port, host);
//! ```

mod accessors;
mod loader;
pub mod store;

pub use accessors::{TypedEnv, get, get_int, get_int64};
pub use loader::{
    EnvFileError, EnvFileLoader, EnvMap, FormatErrorKind, LoadReport, LoaderOptions, SplitPolicy,
    load, parse_line, parse_reader, parse_str, try_load,
};
pub use store::{EnvironmentStore, MemoryEnv, ProcessEnv, StoreError};
