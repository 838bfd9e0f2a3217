//! Badge and status descriptors.
//!
//! Turns a tier into the structured data a status panel or badge needs.
//! Every tier is describable; `none` yields [`Descriptor::Anonymous`].

use crate::registry::info_of;
use crate::tier::Tier;
use std::fmt;

/// Label shown for subjects without a tier.
pub const ANONYMOUS_LABEL: &str = "Community Member";

/// Headline benefits shown in compact displays such as badge tooltips.
pub const DEFAULT_HEADLINE: usize = 2;

/// Display data for a subject's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Descriptor {
    /// No tier: no color, icon or benefits.
    Anonymous,
    Sponsor {
        tier: Tier,
        label: &'static str,
        color: &'static str,
        icon: &'static str,
        benefits: &'static [&'static str],
    },
}

/// Describe a tier for display. Never fails.
pub fn describe(tier: Tier) -> Descriptor {
    if tier.is_none() {
        return Descriptor::Anonymous;
    }
    match info_of(tier) {
        Ok(info) => Descriptor::Sponsor {
            tier: info.tier,
            label: info.name,
            color: info.color,
            icon: info.icon,
            benefits: info.benefits,
        },
        Err(e) => {
            // Every declared tier has an entry; a miss here is a registry bug.
            tracing::error!(%tier, error = %e, "declared tier missing from registry");
            Descriptor::Anonymous
        }
    }
}

impl Descriptor {
    pub fn tier(&self) -> Tier {
        match self {
            Descriptor::Anonymous => Tier::None,
            Descriptor::Sponsor { tier, .. } => *tier,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Descriptor::Anonymous => ANONYMOUS_LABEL,
            Descriptor::Sponsor { label, .. } => *label,
        }
    }

    pub fn color(&self) -> Option<&'static str> {
        match self {
            Descriptor::Anonymous => None,
            Descriptor::Sponsor { color, .. } => Some(*color),
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Descriptor::Anonymous => None,
            Descriptor::Sponsor { icon, .. } => Some(*icon),
        }
    }

    /// Benefits in declaration order; empty for anonymous subjects.
    pub fn benefits(&self) -> &'static [&'static str] {
        match self {
            Descriptor::Anonymous => &[],
            Descriptor::Sponsor { benefits, .. } => *benefits,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Descriptor::Anonymous)
    }

    /// Badge hover title. Anonymous subjects get no badge.
    pub fn badge_title(&self) -> Option<String> {
        match self {
            Descriptor::Anonymous => None,
            Descriptor::Sponsor { label, .. } => Some(format!("{} - Active Sponsor", label)),
        }
    }

    /// Text shown under the label on a status panel.
    pub fn status_message(&self) -> &'static str {
        match self {
            Descriptor::Anonymous => {
                "Support Collective to unlock premium features and help keep the platform sustainable."
            }
            Descriptor::Sponsor { .. } => "Thank you for supporting Collective! You have access to:",
        }
    }

    /// The first `count` benefits plus how many were left out.
    pub fn headline(&self, count: usize) -> BenefitSummary {
        let benefits = self.benefits();
        let shown = count.min(benefits.len());
        BenefitSummary {
            shown: &benefits[..shown],
            remaining: benefits.len() - shown,
        }
    }
}

/// A truncated benefit list for compact display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenefitSummary {
    pub shown: &'static [&'static str],
    pub remaining: usize,
}

impl BenefitSummary {
    /// `"+N more benefits"` when anything was truncated.
    pub fn more_label(&self) -> Option<String> {
        (self.remaining > 0).then(|| format!("+{} more benefits", self.remaining))
    }
}

impl fmt::Display for BenefitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for benefit in self.shown {
            writeln!(f, "• {}", benefit)?;
        }
        if let Some(more) = self.more_label() {
            writeln!(f, "• {}", more)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_anonymous() {
        let d = describe(Tier::None);
        assert!(d.is_anonymous());
        assert_eq!(d.label(), "Community Member");
        assert!(d.benefits().is_empty());
        assert_eq!(d.color(), None);
        assert_eq!(d.icon(), None);
        assert_eq!(d.badge_title(), None);
    }

    #[test]
    fn declared_tiers_are_never_anonymous() {
        for tier in Tier::DECLARED {
            let d = describe(tier);
            assert!(!d.is_anonymous(), "{} described as anonymous", tier);
            assert_eq!(d.tier(), tier);
        }
    }

    #[test]
    fn builder_descriptor() {
        let d = describe(Tier::Builder);
        assert_eq!(d.label(), "Community Builder");
        assert_eq!(d.benefits().len(), 6);
        assert_eq!(d.color(), Some("#FF9500"));
        assert_eq!(d.tier(), Tier::Builder);
    }

    #[test]
    fn badge_title_names_tier() {
        assert_eq!(
            describe(Tier::Champion).badge_title().as_deref(),
            Some("Community Champion - Active Sponsor")
        );
    }

    #[test]
    fn headline_truncates_in_order() {
        let summary = describe(Tier::Champion).headline(DEFAULT_HEADLINE);
        assert_eq!(summary.shown, &["All Supporter benefits", "Website recognition"]);
        assert_eq!(summary.remaining, 3);
        assert_eq!(summary.more_label().as_deref(), Some("+3 more benefits"));
    }

    #[test]
    fn headline_larger_than_list() {
        let summary = describe(Tier::Supporter).headline(10);
        assert_eq!(summary.shown.len(), 3);
        assert_eq!(summary.remaining, 0);
        assert_eq!(summary.more_label(), None);
    }

    #[test]
    fn anonymous_headline_is_empty() {
        let summary = describe(Tier::None).headline(DEFAULT_HEADLINE);
        assert!(summary.shown.is_empty());
        assert_eq!(summary.to_string(), "");
    }

    #[test]
    fn summary_display() {
        let text = describe(Tier::Builder).headline(1).to_string();
        assert_eq!(text, "• All Champion benefits\n• +5 more benefits\n");
    }

    #[test]
    fn status_messages_differ() {
        assert_ne!(
            describe(Tier::None).status_message(),
            describe(Tier::Supporter).status_message()
        );
    }
}
