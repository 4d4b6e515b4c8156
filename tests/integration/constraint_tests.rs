//! API constraint integration tests
//!
//! Exercises the constraint algebra through the public API: rendering,
//! combination, comparison and the serialized form used by caches.

use lintmeta::constraint::{
    above, at_least, at_least_in, at_most, below, exactly, range, ApiConstraint, ExtensionSdkRegistry,
    Intervals, MultiSdkApiConstraint, SdkApiConstraint, SdkApiConstraints, ANDROID_SDK_ID,
};
use proptest::prelude::*;

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_decode_known_mask() {
    let constraint = ApiConstraint::deserialize("e000000").unwrap();
    assert_eq!(constraint.to_string(), "API level ≥ 26 and API level < 29");
    assert_eq!(constraint.min_level(), 26);
    assert_eq!(constraint.max_level(), 29);
    assert_eq!(constraint, range(26, 29));
}

#[test]
fn test_render_with_registry_names() {
    let registry = ExtensionSdkRegistry::builtin();
    let any_of = ApiConstraint::parse_descriptor("0:33,30:2", true).unwrap();

    let plain = any_of.to_string();
    let named = any_of.to_string_with(Some(&registry));
    assert!(plain.contains("SDK 30"), "unexpected rendering: {}", plain);
    assert!(named.contains("R Extensions"), "unexpected rendering: {}", named);
}

#[test]
fn test_describe_reproduces_descriptor() {
    let constraint = ApiConstraint::parse_descriptor("0:33,30:2,31:2", false).unwrap();
    assert_eq!(constraint.describe(), "0:33,30:2,31:2");
}

#[test]
fn test_invalid_descriptor() {
    assert!(ApiConstraint::parse_descriptor("x:33", true).is_err());
    assert!(ApiConstraint::parse_descriptor("33", true).is_err());
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_version_check_scenarios() {
    // if (SDK_INT >= 31) { call an API 28 method }
    assert!(at_least(31).is_at_least(&at_least(28)));
    // if (SDK_INT >= 28) { call an API 31 method }
    assert!(!at_least(28).is_at_least(&at_least(31)));
    // Unreachable code is fine
    assert!(ApiConstraint::none().is_at_least(&at_least(34)));
}

#[test]
fn test_first_missing_for_extension() {
    let registry = ExtensionSdkRegistry::builtin();
    let have = at_least(33);
    let need = ApiConstraint::parse_descriptor("0:30,30:4", false).unwrap();

    assert!(!have.is_at_least(&need));
    let missing = have.first_missing(&need).unwrap();
    assert_eq!(missing.sdk_id(), 30);
    assert_eq!(missing.to_string_with(Some(&registry)), "R Extensions: version ≥ 4");
}

#[test]
fn test_multi_sdk_any_of_satisfied_by_one() {
    let have = at_least_in(5, 30);
    let need = MultiSdkApiConstraint::create(
        vec![
            SdkApiConstraint::new(Intervals::at_least(34, 0), ANDROID_SDK_ID),
            SdkApiConstraint::new(Intervals::at_least(4, 0), 30),
        ],
        true,
    );
    assert!(have.is_at_least(&need));
}

#[test]
fn test_operators_match_methods() {
    let a = at_least(21);
    let b = at_most(28);
    assert_eq!(&a & &b, a.and(&b));
    assert_eq!(&a | &b, a.or(&b));
    assert_eq!(!&a, a.negate());
    assert_eq!(above(20), a);
    assert_eq!(exactly(21) | above(21), a);
}

#[test]
fn test_open_ended_constraint_includes_every_level() {
    assert!(at_least(26).includes(i32::MAX));
    assert!(at_least(26).includes(10_000_000));
    assert!(ApiConstraint::all().includes(i32::MAX));
    assert!(!range(26, 29).includes(i32::MAX));
}

#[test]
fn test_all_covers_android_levels_only() {
    let extension = at_least_in(4, 30);
    let all = ApiConstraint::all();

    assert!((&extension & &all).is_empty());
    assert!((&extension & &ApiConstraint::none()).is_empty());
    assert_eq!(&extension | &ApiConstraint::none(), extension);

    let either = &extension | &all;
    assert_eq!(either.constraints().len(), 2);
    assert_eq!(either.find_sdk(30, false).cloned().map(ApiConstraint::from), Some(extension.clone()));
    assert_eq!(
        either.find_sdk(ANDROID_SDK_ID, false).cloned().map(ApiConstraint::from),
        Some(all)
    );
}

// ============================================================================
// Properties
// ============================================================================

/// One to three spans, some open-ended, some starting at a minor version.
fn intervals_strategy() -> impl Strategy<Value = Intervals> {
    prop::collection::vec((2i32..70, 0i32..3, 1i32..12, any::<bool>()), 1..4).prop_map(|spans| {
        spans
            .into_iter()
            .fold(Intervals::none(), |acc, (from, minor, len, open)| {
                let span = if open {
                    Intervals::at_least(from, minor)
                } else {
                    Intervals::range_minor(from, minor, from + len, 0)
                };
                acc.or(&span)
            })
    })
}

fn android_strategy() -> impl Strategy<Value = ApiConstraint> {
    intervals_strategy()
        .prop_map(|intervals| -> ApiConstraint { SdkApiConstraint::new(intervals, ANDROID_SDK_ID).into() })
}

/// Vectors over up to four SDKs with a mix of certain and optional entries.
fn multi_sdk_strategy() -> impl Strategy<Value = ApiConstraint> {
    (
        prop::option::of((intervals_strategy(), any::<bool>())),
        prop::collection::vec((intervals_strategy(), any::<bool>()), 1..4),
    )
        .prop_map(|(android, extensions)| -> ApiConstraint {
            let android = android.map(|(intervals, either)| (ANDROID_SDK_ID, intervals, either));
            let extensions = [30, 31, 1_000_000]
                .into_iter()
                .zip(extensions)
                .map(|(sdk, (intervals, either))| (sdk, intervals, either));
            let entries = android
                .into_iter()
                .chain(extensions)
                .map(|(sdk, intervals, either)| {
                    SdkApiConstraints::with(sdk, SdkApiConstraint::new(intervals, sdk), either)
                })
                .collect();
            MultiSdkApiConstraint::from_entries(entries).into()
        })
}

proptest! {
    #[test]
    fn prop_range_includes_exactly_its_levels(from in 1i32..100, len in 1i32..40, level in 1i32..150) {
        let to = from + len;
        let constraint = range(from, to);
        prop_assert_eq!(constraint.includes(level), from <= level && level < to);
    }

    #[test]
    fn prop_complements_cover_everything(level in 2i32..200) {
        let union = at_least(level) | below(level);
        prop_assert_eq!(union, ApiConstraint::all());
        prop_assert!((at_least(level) & below(level)).is_empty());
    }

    #[test]
    fn prop_negated_range_is_outside(from in 2i32..100, len in 1i32..40) {
        let to = from + len;
        prop_assert_eq!(!range(from, to), below(from) | at_least(to));
        prop_assert_eq!(!!range(from, to), range(from, to));
    }

    #[test]
    fn prop_serialized_form_decodes_to_same_constraint(
        from in 1i32..120,
        len in 1i32..60,
        minor in 0i32..4,
        sdk in prop_oneof![Just(ANDROID_SDK_ID), Just(30), Just(1000000)],
    ) {
        let intervals = Intervals::range_minor(from, minor, from + len, 0);
        let constraint: ApiConstraint = SdkApiConstraint::new(intervals, sdk).into();
        let decoded = ApiConstraint::deserialize(&constraint.serialize()).unwrap();
        prop_assert_eq!(decoded, constraint);
    }

    #[test]
    fn prop_android_identities(a in android_strategy()) {
        prop_assert_eq!(&a & &ApiConstraint::all(), a.clone());
        prop_assert_eq!(&a | &ApiConstraint::all(), ApiConstraint::all());
        prop_assert_eq!(&a & &ApiConstraint::none(), ApiConstraint::none());
        prop_assert_eq!(&a | &ApiConstraint::none(), a.clone());
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn prop_multi_sdk_identities(a in multi_sdk_strategy()) {
        prop_assert_eq!(&a & &ApiConstraint::none(), ApiConstraint::none());
        prop_assert_eq!(&a | &ApiConstraint::none(), a.clone());
        prop_assert_eq!(!!a.clone(), a.clone());

        // ALL only speaks about Android levels
        let android_part = a
            .find_sdk(ANDROID_SDK_ID, false)
            .cloned()
            .map_or_else(ApiConstraint::none, ApiConstraint::from);
        prop_assert_eq!(&a & &ApiConstraint::all(), android_part);
    }

    #[test]
    fn prop_multi_sdk_serialized_form_round_trips(a in multi_sdk_strategy()) {
        let decoded = ApiConstraint::deserialize(&a.serialize()).unwrap();
        prop_assert_eq!(decoded.to_string(), a.to_string());
        prop_assert_eq!(decoded, a);
    }

    #[test]
    fn prop_multi_span_serialized_form_round_trips(a in android_strategy()) {
        let decoded = ApiConstraint::deserialize(&a.serialize()).unwrap();
        prop_assert_eq!(decoded, a);
    }

    #[test]
    fn prop_higher_floor_is_at_least_lower(low in 1i32..60, step in 0i32..30) {
        let high = low + step;
        prop_assert!(at_least(high).is_at_least(&at_least(low)));
        if step > 0 {
            prop_assert!(!at_least(low).is_at_least(&at_least(high)));
        }
    }
}
