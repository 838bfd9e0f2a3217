//! Error types for collective-tiers.

use thiserror::Error;

/// Result type for tier model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the tier model.
///
/// Only direct registry lookups fail; ranking, gating and description are
/// total over their inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Metadata requested for `none` or an undeclared tier.
    #[error("Tier not found: {0}")]
    NotFound(String),

    /// Strict parse of a tier name failed.
    #[error("Unknown tier: {0}")]
    UnknownTier(String),
}
