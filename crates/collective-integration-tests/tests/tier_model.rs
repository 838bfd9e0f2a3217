//! The tier model as a rendering layer consumes it.

use collective_integration_tests::{stored_profiles, EVERY_TIER};
use collective_tiers::{
    all_tiers, describe, has_access, info_of, info_of_name, rank_of, resolve,
    subject_has_access, unlocked_features, Error, Feature, Resolution, Subject, Tier,
};
use proptest::prelude::*;

#[test]
fn ranks_strictly_increase_in_declared_order() {
    let ranks: Vec<u8> = all_tiers().iter().map(|t| rank_of(*t)).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(all_tiers().iter().all(|t| rank_of(Tier::None) < rank_of(*t)));
}

#[test]
fn access_matrix() {
    let mut granted = 0;
    for a in EVERY_TIER {
        for b in EVERY_TIER {
            let expected = rank_of(a) >= rank_of(b);
            assert_eq!(has_access(a, b), expected, "has_access({}, {})", a, b);
            if expected {
                granted += 1;
            }
        }
    }
    // Lower triangle plus diagonal of a 5x5 matrix.
    assert_eq!(granted, 15);
}

#[test]
fn malformed_profiles_degrade_to_member() {
    for profile in stored_profiles() {
        let tier = profile.tier();
        let descriptor = describe(tier);
        if tier == Tier::None {
            assert_eq!(descriptor.label(), "Community Member", "{}", profile.id);
            assert!(!subject_has_access(&profile, Tier::Supporter));
        } else {
            assert_eq!(descriptor.label(), info_of(tier).unwrap().name);
        }
    }
}

#[test]
fn store_spellings_map_to_tiers() {
    let tiers: Vec<Tier> = stored_profiles().iter().map(Subject::tier).collect();
    assert_eq!(
        tiers,
        vec![
            Tier::None,
            Tier::Supporter,
            Tier::Champion,
            Tier::Builder,
            Tier::Institutional,
            Tier::None,
            Tier::None,
        ]
    );
}

#[test]
fn not_found_only_from_direct_lookup() {
    assert!(matches!(info_of(Tier::None), Err(Error::NotFound(_))));
    assert!(matches!(info_of_name("bogus-tier"), Err(Error::NotFound(_))));
    // The gate and resolver never surface it.
    for subject in EVERY_TIER {
        for required in EVERY_TIER {
            let _ = resolve(subject, required, (), None);
        }
        let _ = describe(subject);
    }
}

#[test]
fn dashboard_gates() {
    let supporter = Tier::Supporter;
    let views: Vec<_> = Feature::ALL
        .into_iter()
        .map(|f| f.resolve(supporter, f.title(), None))
        .collect();
    assert!(views
        .iter()
        .all(|v| matches!(v, Resolution::UpgradeRequired(_))));

    assert_eq!(unlocked_features(Tier::Builder).len(), 3);
}

#[test]
fn descriptor_json_for_status_panel() {
    let value = serde_json::to_value(describe(Tier::Institutional)).unwrap();
    assert_eq!(value["label"], "Institutional Partner");
    assert_eq!(value["tier"], "institutional");
    assert_eq!(value["benefits"].as_array().map(Vec::len), Some(6));
}

#[test]
fn profile_deserializes_from_store_row() {
    let row = r#"{"id":"u9","sponsor_tier":"community_champion"}"#;
    let profile: collective_tiers::SponsorProfile = serde_json::from_str(row).unwrap();
    assert_eq!(profile.tier(), Tier::Champion);

    let row = r#"{"id":"u10","sponsor_tier":null}"#;
    let profile: collective_tiers::SponsorProfile = serde_json::from_str(row).unwrap();
    assert_eq!(profile.tier(), Tier::None);
}

#[test]
fn deserialized_tiers_follow_parse_rules() {
    for raw in ["\"BUILDER\"", "\"Community-Builder\"", "\"community_builder\""] {
        let tier: Tier = serde_json::from_str(raw).unwrap();
        assert_eq!(tier, Tier::Builder, "{}", raw);
    }
    assert_eq!(serde_json::from_str::<Tier>("null").unwrap(), Tier::None);
    assert_eq!(serde_json::from_str::<Tier>("\"\"").unwrap(), Tier::None);
}

fn any_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(EVERY_TIER.to_vec())
}

proptest! {
    #[test]
    fn access_is_transitive(a in any_tier(), b in any_tier(), c in any_tier()) {
        if has_access(a, b) && has_access(b, c) {
            prop_assert!(has_access(a, c));
        }
    }

    #[test]
    fn unlocked_features_grow_with_rank(a in any_tier(), b in any_tier()) {
        if rank_of(a) <= rank_of(b) {
            let lower = unlocked_features(a);
            let higher = unlocked_features(b);
            prop_assert!(lower.iter().all(|f| higher.contains(f)));
        }
    }
}
