//! CLI configuration from the environment.

use crate::error::{CliError, Result};
use collective_tiers::DEFAULT_HEADLINE;
use std::str::FromStr;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config(format!(
                "COLLECTIVE_OUTPUT must be text or json, got {:?}",
                other
            ))),
        }
    }
}

/// Configuration for the `collective` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format
    pub output: OutputFormat,

    /// Benefits shown before "+N more benefits" in `describe`
    pub headline: usize,
}

/// Built-in defaults, independent of the environment.
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            headline: DEFAULT_HEADLINE,
        }
    }
}

impl CliConfig {
    /// [`CliConfig::default`] overlaid with `COLLECTIVE_OUTPUT` and
    /// `COLLECTIVE_HEADLINE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(output) = lookup("COLLECTIVE_OUTPUT") {
            config.output = output.parse()?;
        }

        if let Some(headline) = lookup("COLLECTIVE_HEADLINE") {
            config.headline = headline.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "COLLECTIVE_HEADLINE must be a non-negative integer, got {:?}",
                    headline
                ))
            })?;
        }

        Ok(config)
    }
}
