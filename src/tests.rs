use super::*;
use std::collections::BTreeMap;

fn properties(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| (format!("{PROPERTY_PREFIX}.{key}"), value.to_string()))
        .collect()
}

#[test]
fn default_caps_bound_members_and_accesses_to_the_first_round() {
    let caps = ResolutionCaps::default();
    assert_eq!(caps.cap(DependencyCategory::MemberType), IterationCap::Bounded(1));
    assert_eq!(caps.cap(DependencyCategory::AccessToType), IterationCap::Bounded(1));
    assert_eq!(caps.cap(DependencyCategory::Supertype), IterationCap::Unbounded);
    assert_eq!(caps.cap(DependencyCategory::EnclosingType), IterationCap::Unbounded);
    assert_eq!(caps.cap(DependencyCategory::AnnotationType), IterationCap::Unbounded);
    assert_eq!(
        caps.cap(DependencyCategory::GenericSignatureType),
        IterationCap::Unbounded
    );
}

#[test]
fn from_properties_with_empty_store_yields_defaults() {
    let caps = ResolutionCaps::from_properties(&BTreeMap::new()).expect("defaults");
    assert_eq!(caps, ResolutionCaps::default());
}

#[test]
fn from_properties_overrides_configured_categories_only() {
    let caps = ResolutionCaps::from_properties(&properties(&[
        ("max_iterations_for_member_types", "3"),
        ("max_iterations_for_supertypes", "2"),
    ]))
    .expect("valid configuration");

    assert_eq!(caps.cap(DependencyCategory::MemberType), IterationCap::Bounded(3));
    assert_eq!(caps.cap(DependencyCategory::Supertype), IterationCap::Bounded(2));
    assert_eq!(caps.cap(DependencyCategory::AccessToType), IterationCap::Bounded(1));
    assert_eq!(caps.cap(DependencyCategory::AnnotationType), IterationCap::Unbounded);
}

#[test]
fn negative_configured_value_means_unbounded() {
    let caps = ResolutionCaps::from_properties(&properties(&[(
        "max_iterations_for_accesses_to_types",
        "-1",
    )]))
    .expect("valid configuration");
    assert_eq!(caps.cap(DependencyCategory::AccessToType), IterationCap::Unbounded);
}

#[test]
fn unrelated_keys_under_the_prefix_are_ignored() {
    let mut store = properties(&[("max_iterations_for_enclosing_types", "4")]);
    store.insert(
        format!("{PROPERTY_PREFIX}.some_future_option"),
        "not a number".to_string(),
    );
    let caps = ResolutionCaps::from_properties(&store).expect("valid configuration");
    assert_eq!(caps.cap(DependencyCategory::EnclosingType), IterationCap::Bounded(4));
}

#[test]
fn malformed_cap_value_fails_construction() {
    let error = ResolutionCaps::from_properties(&properties(&[(
        "max_iterations_for_annotation_types",
        "unbounded",
    )]))
    .expect_err("malformed value must be rejected");

    let ConfigError::InvalidCap { key, value, .. } = error;
    assert_eq!(key, "max_iterations_for_annotation_types");
    assert_eq!(value, "unbounded");
}

#[test]
fn bounded_cap_admits_rounds_up_to_its_maximum() {
    assert!(IterationCap::Bounded(1).admits(1));
    assert!(!IterationCap::Bounded(1).admits(2));
    assert!(IterationCap::Bounded(3).admits(3));
    assert!(!IterationCap::Bounded(3).admits(4));
    assert!(!IterationCap::Bounded(0).admits(1));
}

#[test]
fn unbounded_cap_admits_every_round() {
    assert!(IterationCap::Unbounded.admits(1));
    assert!(IterationCap::Unbounded.admits(u32::MAX));
}

#[test]
fn with_cap_replaces_a_single_category() {
    let caps = ResolutionCaps::default()
        .with_cap(DependencyCategory::Supertype, IterationCap::Bounded(2));
    assert_eq!(caps.cap(DependencyCategory::Supertype), IterationCap::Bounded(2));
    assert_eq!(caps.cap(DependencyCategory::MemberType), IterationCap::Bounded(1));
}

#[test]
fn caps_render_as_numbers_or_unbounded() {
    assert_eq!(IterationCap::Bounded(5).to_string(), "5");
    assert_eq!(IterationCap::Unbounded.to_string(), "unbounded");
}

#[test]
fn fresh_run_starts_at_round_one() {
    let run = ResolutionRun::new(ResolutionCaps::default());
    assert_eq!(run.round(), 1);
}
