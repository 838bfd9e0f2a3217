//! Shared fixtures for cross-crate tests.

use collective_tiers::{SponsorProfile, Tier};

/// Every tier value, `none` included, in ascending rank.
pub const EVERY_TIER: [Tier; 5] = [
    Tier::None,
    Tier::Supporter,
    Tier::Champion,
    Tier::Builder,
    Tier::Institutional,
];

/// Profiles as the profile store would hand them over, including values the
/// store should never contain.
pub fn stored_profiles() -> Vec<SponsorProfile> {
    vec![
        SponsorProfile::new("anon"),
        SponsorProfile::new("maya").with_tier("community_supporter"),
        SponsorProfile::new("jordan").with_tier("community_champion"),
        SponsorProfile::new("sam").with_tier("community_builder"),
        SponsorProfile::new("city-library").with_tier("institutional"),
        SponsorProfile::new("legacy").with_tier("gold"),
        SponsorProfile::new("blank").with_tier(""),
    ]
}
