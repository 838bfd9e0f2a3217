//! Participant goal bounds.

use crate::error::{Error, Result};

/// Smallest selectable participant goal.
pub const GOAL_MIN: u64 = 10;

/// Largest selectable participant goal.
pub const GOAL_MAX: u64 = 10_000;

/// Goals are chosen in increments of this size.
pub const GOAL_STEP: u64 = 10;

/// Check a participant goal against the selectable range and step.
pub fn validate_goal(goal: u64) -> Result<u64> {
    if !(GOAL_MIN..=GOAL_MAX).contains(&goal) {
        return Err(Error::GoalOutOfRange {
            goal,
            min: GOAL_MIN,
            max: GOAL_MAX,
        });
    }
    if goal % GOAL_STEP != 0 {
        return Err(Error::GoalStep {
            goal,
            step: GOAL_STEP,
        });
    }
    Ok(goal)
}
