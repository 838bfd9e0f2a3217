//! Collective Sponsor Tiers
//!
//! Tier ranking, access gating, and badge resolution for Collective sponsors.
//!
//! # Tier Order
//!
//! Tiers form a closed, totally ordered set:
//!
//! ```text
//! none (0) < supporter (1) < champion (2) < builder (3) < institutional (4)
//! ```
//!
//! Rank is the only thing access checks look at. `none` is an explicit
//! [`Tier`] variant, so "no sponsorship" is handled by the type rather than by
//! null checks.
//!
//! # Components
//!
//! - **Registry**: static metadata per declared tier ([`info_of`], [`all_tiers`])
//! - **Gate**: [`has_access`] and the [`resolve`] fallback policy
//! - **Badges**: [`describe`] turns any tier into display data
//!
//! All operations are pure functions over `'static` data and may be called
//! from any thread without coordination.

mod badge;
mod error;
mod feature;
mod gate;
mod registry;
mod subject;
mod tier;

pub use badge::{describe, BenefitSummary, Descriptor, ANONYMOUS_LABEL, DEFAULT_HEADLINE};
pub use error::{Error, Result};
pub use feature::{can_use, unlocked_features, Feature};
pub use gate::{has_access, resolve, subject_has_access, Resolution, UpgradePrompt};
pub use registry::{
    all_info, all_tiers, info_of, info_of_name, rank_of, rank_of_name, upgrade_path, TierInfo,
};
pub use subject::{SponsorProfile, Subject};
pub use tier::Tier;

/// Number of declared tiers, excluding `none`.
pub const DECLARED_TIERS: usize = 4;

const _: () = assert!(Tier::DECLARED.len() == DECLARED_TIERS);
