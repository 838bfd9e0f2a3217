//! Subjects: anything that carries a tier.

use crate::tier::Tier;

/// An entity holding at most one tier.
///
/// The model trusts the value it is given; provenance and identity are the
/// caller's concern.
pub trait Subject {
    /// The subject's current tier, `Tier::None` when absent.
    fn tier(&self) -> Tier;
}

impl Subject for Tier {
    fn tier(&self) -> Tier {
        *self
    }
}

impl Subject for Option<Tier> {
    fn tier(&self) -> Tier {
        self.unwrap_or_default()
    }
}

impl<S: Subject + ?Sized> Subject for &S {
    fn tier(&self) -> Tier {
        (**self).tier()
    }
}

/// A user profile as supplied by the profile store.
///
/// `sponsor_tier` holds the raw stored value (e.g. `"community_champion"`).
/// It is parsed every time the tier is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SponsorProfile {
    /// Profile identifier
    pub id: String,
    /// Stored sponsor tier, if any
    #[cfg_attr(feature = "serde", serde(default))]
    pub sponsor_tier: Option<String>,
}

impl SponsorProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sponsor_tier: None,
        }
    }

    pub fn with_tier(mut self, stored: impl Into<String>) -> Self {
        self.sponsor_tier = Some(stored.into());
        self
    }

    /// Whether the profile holds any declared tier.
    pub fn is_sponsor(&self) -> bool {
        !self.tier().is_none()
    }
}

impl Subject for SponsorProfile {
    fn tier(&self) -> Tier {
        Tier::from_stored(self.sponsor_tier.as_deref())
    }
}
