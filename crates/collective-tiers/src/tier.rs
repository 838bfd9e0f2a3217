//! The sponsorship tier value type.
//!
//! Tiers form a closed, totally ordered set. `None` is an explicit member so
//! every function over tiers is total and "no sponsorship" never needs a
//! null check at call sites.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A sponsorship level held by a subject.
///
/// Variants are declared in ascending rank order; the derived `Ord` agrees
/// with [`Tier::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "Option<String>")
)]
pub enum Tier {
    /// No sponsorship. Rank 0, never has metadata.
    #[default]
    None,
    Supporter,
    Champion,
    Builder,
    Institutional,
}

impl Tier {
    /// Declared tiers in ascending rank, excluding `None`.
    pub const DECLARED: [Tier; 4] = [
        Tier::Supporter,
        Tier::Champion,
        Tier::Builder,
        Tier::Institutional,
    ];

    /// Position in the ordered sequence. `None` is fixed at 0.
    pub const fn rank(self) -> u8 {
        match self {
            Tier::None => 0,
            Tier::Supporter => 1,
            Tier::Champion => 2,
            Tier::Builder => 3,
            Tier::Institutional => 4,
        }
    }

    /// Short lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::None => "none",
            Tier::Supporter => "supporter",
            Tier::Champion => "champion",
            Tier::Builder => "builder",
            Tier::Institutional => "institutional",
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Tier::None)
    }

    /// The tier one rank above this one, if any.
    pub const fn next(self) -> Option<Tier> {
        match self {
            Tier::None => Some(Tier::Supporter),
            Tier::Supporter => Some(Tier::Champion),
            Tier::Champion => Some(Tier::Builder),
            Tier::Builder => Some(Tier::Institutional),
            Tier::Institutional => None,
        }
    }

    /// Parse a stored tier value, normalizing anything unrecognized to `None`.
    ///
    /// Accepts both the short spelling (`"builder"`) and the profile-store
    /// spelling (`"community_builder"`), case-insensitively.
    pub fn parse_lenient(value: &str) -> Tier {
        match value.parse() {
            Ok(tier) => tier,
            Err(_) => {
                tracing::debug!(value, "unrecognized tier value, treating as none");
                Tier::None
            }
        }
    }

    /// [`Tier::parse_lenient`] over an optional stored field.
    pub fn from_stored(value: Option<&str>) -> Tier {
        value.map(Tier::parse_lenient).unwrap_or_default()
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "" | "none" | "null" => Ok(Tier::None),
            "supporter" | "community_supporter" => Ok(Tier::Supporter),
            "champion" | "community_champion" => Ok(Tier::Champion),
            "builder" | "community_builder" => Ok(Tier::Builder),
            "institutional" => Ok(Tier::Institutional),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}

// Deserialization goes through the same rules as `FromStr`; a JSON `null`
// is an absent tier.
impl TryFrom<Option<String>> for Tier {
    type Error = Error;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        value.as_deref().map_or(Ok(Tier::None), |v| v.parse())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
