//! Momentum scores.

use crate::error::{Error, Result};
use std::fmt;

/// A momentum score, 0 to 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct MomentumScore(u8);

impl MomentumScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MomentumScore {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MomentumScore> for u8 {
    fn from(score: MomentumScore) -> u8 {
        score.0
    }
}

impl fmt::Display for MomentumScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Mean of a set of scores, rounded half up. `None` for an empty set.
pub fn average_momentum(scores: &[MomentumScore]) -> Option<MomentumScore> {
    if scores.is_empty() {
        return None;
    }
    let total: u64 = scores.iter().map(|s| u64::from(s.0)).sum();
    let count = scores.len() as u64;
    // Mean of values <= 100 is <= 100, so this fits.
    let mean = (total * 2 + count) / (count * 2);
    Some(MomentumScore(mean as u8))
}
