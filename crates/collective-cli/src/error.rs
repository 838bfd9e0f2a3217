//! Error types for the collective CLI.

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad arguments
    #[error("{0}")]
    Usage(String),

    /// Bad environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tier model error
    #[error(transparent)]
    Tier(#[from] collective_tiers::Error),

    /// Progress arithmetic error
    #[error(transparent)]
    Momentum(#[from] collective_momentum::Error),

    /// Text output error
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// JSON output error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
