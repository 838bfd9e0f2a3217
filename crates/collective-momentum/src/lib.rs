//! Initiative momentum and progress.
//!
//! Progress is participants over goal as a percentage. It may run past 100;
//! anything drawn as a bar is clamped to 100.

mod error;
mod goal;
mod progress;
mod score;

pub use error::{Error, Result};
pub use goal::{validate_goal, GOAL_MAX, GOAL_MIN, GOAL_STEP};
pub use progress::Progress;
pub use score::{average_momentum, MomentumScore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_card() {
        let goal = validate_goal(2000).unwrap();
        let progress = Progress::new(1247, goal).unwrap();
        assert!((progress.percentage() - 62.35).abs() < 1e-9);
        assert_eq!(MomentumScore::new(87).unwrap().to_string(), "87%");
    }
}
