//! Progress toward a participant goal.

use crate::error::{Error, Result};

/// Participants gathered against a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    /// Participants so far
    pub current: u64,
    /// Target participant count (never zero)
    pub goal: u64,
}

impl Progress {
    pub fn new(current: u64, goal: u64) -> Result<Self> {
        if goal == 0 {
            return Err(Error::ZeroGoal);
        }
        Ok(Self { current, goal })
    }

    /// `current / goal * 100`. Exceeds 100 once the goal is passed.
    pub fn percentage(&self) -> f64 {
        self.current as f64 / self.goal as f64 * 100.0
    }

    /// Percentage clamped for drawing a bar.
    pub fn bar_width(&self) -> f64 {
        self.percentage().min(100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.goal
    }

    /// Participants still needed to reach the goal.
    pub fn remaining(&self) -> u64 {
        self.goal.saturating_sub(self.current)
    }
}
