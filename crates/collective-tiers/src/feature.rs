//! Premium features and the tier each one requires.

use crate::gate::{has_access, resolve, Resolution};
use crate::tier::Tier;
use std::fmt;

/// A tier-gated feature of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Feature {
    AdvancedAnalytics,
    CustomTemplates,
    PrioritySupport,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::AdvancedAnalytics,
        Feature::CustomTemplates,
        Feature::PrioritySupport,
    ];

    /// Minimum tier that unlocks the feature.
    pub const fn required_tier(self) -> Tier {
        match self {
            Feature::AdvancedAnalytics => Tier::Champion,
            Feature::CustomTemplates => Tier::Champion,
            Feature::PrioritySupport => Tier::Builder,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Feature::AdvancedAnalytics => "Advanced Analytics",
            Feature::CustomTemplates => "Custom Initiative Templates",
            Feature::PrioritySupport => "Priority Support",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Feature::AdvancedAnalytics => "advanced_analytics",
            Feature::CustomTemplates => "custom_templates",
            Feature::PrioritySupport => "priority_support",
        }
    }

    /// Resolve this feature's content for a subject tier.
    pub fn resolve<T>(self, subject: Tier, content: T, fallback: Option<T>) -> Resolution<T> {
        resolve(subject, self.required_tier(), content, fallback)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Whether `subject` unlocks `feature`.
pub const fn can_use(subject: Tier, feature: Feature) -> bool {
    has_access(subject, feature.required_tier())
}

/// Features unlocked at `subject`, in declaration order.
pub fn unlocked_features(subject: Tier) -> Vec<Feature> {
    Feature::ALL
        .into_iter()
        .filter(|f| can_use(subject, *f))
        .collect()
}
