//! Access gate for tier-restricted content.
//!
//! Gating has exactly one rule: a subject passes when its rank is at least
//! the required rank. Everything else here is the resolution policy applied
//! when it does not pass.

use crate::registry::info_of;
use crate::subject::Subject;
use crate::tier::Tier;

/// Whether `subject` satisfies `required`.
///
/// A requirement of `Tier::None` is satisfied by every subject.
///
/// # Examples
///
/// ```
/// use collective_tiers::{has_access, Tier};
///
/// assert!(has_access(Tier::Champion, Tier::Supporter));
/// assert!(!has_access(Tier::Supporter, Tier::Builder));
/// assert!(has_access(Tier::None, Tier::None));
/// ```
pub const fn has_access(subject: Tier, required: Tier) -> bool {
    subject.rank() >= required.rank()
}

/// [`has_access`] for anything carrying a tier.
pub fn subject_has_access<S: Subject + ?Sized>(subject: &S, required: Tier) -> bool {
    has_access(subject.tier(), required)
}

/// The standard prompt shown when gated content is withheld.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpgradePrompt {
    /// The tier the content requires
    pub required: Tier,
    /// Display name of the required tier
    pub tier_name: &'static str,
}

impl UpgradePrompt {
    pub const HEADING: &'static str = "Premium Feature";

    /// Body text of the prompt.
    pub fn message(&self) -> String {
        format!("This feature requires {} tier or higher.", self.tier_name)
    }

    /// Label for the upgrade action.
    pub fn action(&self) -> String {
        format!("Upgrade to {}", self.tier_name)
    }
}

/// Outcome of resolving gated content for a subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// Subject has access; render the protected content.
    Granted(T),
    /// Subject lacks access; render the caller's fallback.
    Fallback(T),
    /// Subject lacks access and no fallback was given.
    UpgradeRequired(UpgradePrompt),
}

impl<T> Resolution<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Resolution::Granted(_))
    }

    /// The content to render, if any (protected content or fallback).
    pub fn into_content(self) -> Option<T> {
        match self {
            Resolution::Granted(content) | Resolution::Fallback(content) => Some(content),
            Resolution::UpgradeRequired(_) => None,
        }
    }
}

/// Resolve what to render for gated content.
///
/// 1. access granted: `content`
/// 2. otherwise, `fallback` if supplied
/// 3. otherwise, an upgrade prompt naming the required tier
pub fn resolve<T>(subject: Tier, required: Tier, content: T, fallback: Option<T>) -> Resolution<T> {
    if has_access(subject, required) {
        return Resolution::Granted(content);
    }
    if let Some(fallback) = fallback {
        return Resolution::Fallback(fallback);
    }
    Resolution::UpgradeRequired(upgrade_prompt(required))
}

// Only reached when `required` outranks the subject, so it is never `None`
// and the registry lookup cannot miss.
fn upgrade_prompt(required: Tier) -> UpgradePrompt {
    let tier_name = match info_of(required) {
        Ok(info) => info.name,
        Err(e) => {
            tracing::warn!(error = %e, "upgrade prompt for tier without metadata");
            required.as_str()
        }
    };
    UpgradePrompt {
        required,
        tier_name,
    }
}
