//! Loader options.
//!
//! `LoaderOptions` deserializes from an application's own config file, and
//! `SplitPolicy` parses from CLI flags via `FromStr`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a line is split into key and value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Split on the first `=`; the value may contain further `=`.
    #[default]
    FirstEquals,
    /// Require exactly one `=`; lines with more are rejected.
    ExactlyOneEquals,
}

impl SplitPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstEquals => "first-equals",
            Self::ExactlyOneEquals => "exactly-one-equals",
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "first-equals" | "first" => Ok(Self::FirstEquals),
            "exactly-one-equals" | "exactly-one" | "strict" => Ok(Self::ExactlyOneEquals),
            other => Err(format!(
                "unknown split policy '{}' (expected first-equals or exactly-one-equals)",
                other
            )),
        }
    }
}

/// Options for [`EnvFileLoader`](super::EnvFileLoader).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    pub split_policy: SplitPolicy,
}

impl LoaderOptions {
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }
}
