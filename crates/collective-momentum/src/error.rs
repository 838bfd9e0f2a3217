//! Error types for collective-momentum.

use thiserror::Error;

/// Result type for momentum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur computing progress and momentum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Progress against a goal of zero is undefined.
    #[error("participant goal must be greater than zero")]
    ZeroGoal,

    /// Goal outside the selectable range.
    #[error("participant goal {goal} outside {min}..={max}")]
    GoalOutOfRange { goal: u64, min: u64, max: u64 },

    /// Goal not on the selection step.
    #[error("participant goal {goal} is not a multiple of {step}")]
    GoalStep { goal: u64, step: u64 },

    /// Momentum is a percentage.
    #[error("momentum score {0} exceeds 100")]
    ScoreOutOfRange(u8),
}
