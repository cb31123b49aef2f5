//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve whether the implicit env file load is disabled.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use envfile::SplitPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envfile-cli")]
#[command(about = "Check KEY=VALUE env files and run commands with them loaded", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envfile-cli check\n  envfile-cli --file prod.env apply\n  envfile-cli get PORT --default 8080 --kind int\n  envfile-cli run -- ./server --verbose\n"
)]
pub struct Cli {
    /// Path to the env file
    #[arg(short, long, global = true, env = "ENVFILE_PATH", default_value = ".env")]
    pub file: PathBuf,

    /// How lines are split into key and value (first-equals, exactly-one-equals)
    #[arg(
        long,
        global = true,
        env = "ENVFILE_SPLIT_POLICY",
        default_value_t = SplitPolicy::FirstEquals
    )]
    pub split_policy: SplitPolicy,

    /// Skip loading the env file for `get` and `run` (also ENVFILE_DISABLED=1)
    #[arg(long, global = true)]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the implicit env file load for `get` and `run` is disabled.
    pub fn env_file_disabled(&self) -> bool {
        self.no_env_file
            || matches!(
                std::env::var("ENVFILE_DISABLED").ok().as_deref(),
                Some("true") | Some("1")
            )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the env file without touching the environment
    Check,

    /// Show which variables loading the env file would set and which it would keep
    Apply,

    /// Print one variable after soft-loading the env file
    Get {
        /// Variable name
        name: String,

        /// Value printed when the variable is unset or empty
        #[arg(short, long)]
        default: Option<String>,

        /// How to read the value
        #[arg(short, long, value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// Load the env file, then run a command with the resulting environment
    Run {
        /// Command and arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Int,
    Int64,
}
