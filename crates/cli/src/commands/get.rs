//! `get`: print one variable after soft-loading the env file.

use anyhow::Result;
use envfile::{EnvFileLoader, ProcessEnv, TypedEnv};
use std::path::Path;

use crate::args::ValueKind;
use crate::error::ExitCode;

pub fn run(
    loader: Option<&EnvFileLoader>,
    path: &Path,
    name: &str,
    default: Option<&str>,
    kind: ValueKind,
) -> Result<i32> {
    let mut env = ProcessEnv;
    if let Some(loader) = loader {
        loader.try_load_into(path, &mut env);
    }

    let value = render(&env, name, default, kind)?;
    println!("{}", value);
    Ok(ExitCode::Success.as_i32())
}

fn render(env: &ProcessEnv, name: &str, default: Option<&str>, kind: ValueKind) -> Result<String> {
    Ok(match kind {
        ValueKind::String => env.get_string(name, default.unwrap_or_default()),
        ValueKind::Int => env.get_int(name, parse_default(default)?).to_string(),
        ValueKind::Int64 => env.get_int64(name, parse_default(default)?).to_string(),
    })
}

fn parse_default<T>(default: Option<&str>) -> Result<T>
where
    T: std::str::FromStr + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match default {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid --default '{}': {}", raw, e)),
        None => Ok(T::default()),
    }
}
