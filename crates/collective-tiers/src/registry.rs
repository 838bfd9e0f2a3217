//! The tier registry: the authoritative table of tier metadata.
//!
//! The table is `'static` data. There is no construction step and no
//! mutation handle; callers only ever see shared references.

use crate::error::{Error, Result};
use crate::tier::Tier;

/// Metadata attached to a declared (non-none) tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TierInfo {
    /// The tier this entry describes
    pub tier: Tier,
    /// Display name
    pub name: &'static str,
    /// Color marker (hex code)
    pub color: &'static str,
    /// Icon marker
    pub icon: &'static str,
    /// Benefits in declaration order. Earlier entries are headline benefits.
    pub benefits: &'static [&'static str],
    /// Monthly sponsorship price in US cents. `None` means negotiated.
    pub monthly_price_cents: Option<u32>,
    /// Highlighted as the recommended tier on the funding page
    pub popular: bool,
}

impl TierInfo {
    /// Rank of the described tier.
    pub const fn rank(&self) -> u8 {
        self.tier.rank()
    }

    /// Price formatted for display, e.g. `"$15/month"` or `"Custom"`.
    pub fn price_label(&self) -> String {
        match self.monthly_price_cents {
            Some(cents) if cents % 100 == 0 => format!("${}/month", cents / 100),
            Some(cents) => format!("${}.{:02}/month", cents / 100, cents % 100),
            None => "Custom".to_string(),
        }
    }
}

// Benefit lists repeat the lower tier's headline as a literal string. They
// are independent per-tier lists, not an inheritance chain.
static REGISTRY: [TierInfo; 4] = [
    TierInfo {
        tier: Tier::Supporter,
        name: "Community Supporter",
        color: "#34C759",
        icon: "👤",
        benefits: &[
            "Early feature access",
            "Private Discord",
            "README recognition",
        ],
        monthly_price_cents: Some(500),
        popular: false,
    },
    TierInfo {
        tier: Tier::Champion,
        name: "Community Champion",
        color: "#007AFF",
        icon: "⭐",
        benefits: &[
            "All Supporter benefits",
            "Website recognition",
            "Advanced analytics",
            "Custom templates",
            "Priority support",
        ],
        monthly_price_cents: Some(1500),
        popular: true,
    },
    TierInfo {
        tier: Tier::Builder,
        name: "Community Builder",
        color: "#FF9500",
        icon: "🏗️",
        benefits: &[
            "All Champion benefits",
            "Builders wall recognition",
            "API access",
            "Strategy calls",
            "Beta features",
            "Custom branding",
        ],
        monthly_price_cents: Some(5000),
        popular: false,
    },
    TierInfo {
        tier: Tier::Institutional,
        name: "Institutional Partner",
        color: "#8E44AD",
        icon: "🏛️",
        benefits: &[
            "All Builder benefits",
            "Custom development",
            "White-label options",
            "Dedicated support",
            "Co-marketing",
            "Quarterly reviews",
        ],
        monthly_price_cents: None,
        popular: false,
    },
];

/// Rank of a tier. `None` is 0; never fails.
pub const fn rank_of(tier: Tier) -> u8 {
    tier.rank()
}

/// Rank of a stored tier string. Unknown or empty input ranks as `none`.
pub fn rank_of_name(name: &str) -> u8 {
    Tier::parse_lenient(name).rank()
}

/// Metadata for a declared tier.
///
/// Fails with [`Error::NotFound`] for `Tier::None`; callers gating UI check
/// for `none` first.
pub fn info_of(tier: Tier) -> Result<&'static TierInfo> {
    REGISTRY
        .iter()
        .find(|info| info.tier == tier)
        .ok_or_else(|| Error::NotFound(tier.to_string()))
}

/// Metadata for a tier given by name.
///
/// Fails with [`Error::NotFound`] for `none` and for names outside the
/// declared set.
pub fn info_of_name(name: &str) -> Result<&'static TierInfo> {
    let tier: Tier = name
        .parse()
        .map_err(|_| Error::NotFound(name.to_string()))?;
    info_of(tier)
}

/// Declared tiers in ascending rank, excluding `none`.
pub fn all_tiers() -> &'static [Tier] {
    &Tier::DECLARED
}

/// All registry entries in ascending rank.
pub fn all_info() -> &'static [TierInfo] {
    &REGISTRY
}

/// Declared tiers strictly above `tier`, ascending.
pub fn upgrade_path(tier: Tier) -> &'static [Tier] {
    let start = Tier::DECLARED
        .iter()
        .position(|t| t.rank() > tier.rank())
        .unwrap_or(Tier::DECLARED.len());
    &all_tiers()[start..]
}
