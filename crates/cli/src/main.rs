//! envfile CLI - check env files and run commands with them loaded.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging to stderr.
//! - Dispatch to command handlers and map failures to exit codes.
//!
//! Does NOT handle:
//! - Parsing or merging env files (see the `envfile` crate).
//!
//! Invariants:
//! - Output on stdout never includes values read from the env file, except
//!   the single value `get` was asked for.
//! - Logs go to stderr so stdout stays scriptable.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use envfile::{EnvFileLoader, LoaderOptions};
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code().as_i32()
        }
    };
    std::process::exit(code);
}

fn run_command(cli: Cli) -> anyhow::Result<i32> {
    let loader = EnvFileLoader::new(LoaderOptions::default().with_split_policy(cli.split_policy));
    let implicit = (!cli.env_file_disabled()).then_some(&loader);

    match &cli.command {
        Commands::Check => commands::check::run(&loader, &cli.file),
        Commands::Apply => commands::apply::run(&loader, &cli.file),
        Commands::Get {
            name,
            default,
            kind,
        } => commands::get::run(implicit, &cli.file, name, default.as_deref(), *kind),
        Commands::Run { command } => commands::run::run(implicit, &cli.file, command),
    }
}
