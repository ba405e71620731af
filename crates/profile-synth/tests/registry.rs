//! Integration tests for loading the bundled seed registry.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::path::PathBuf;

use chrono::NaiveDate;
use profile_synth::{
    GeneratedProfile, ProfileField, ProfileRequest, ProfileVariant, RegistryError, SeedRegistry,
    generate_profiles,
};
use rstest::{fixture, rstest};

#[fixture]
fn registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("seeds.json")
}

#[fixture]
fn registry(registry_path: PathBuf) -> SeedRegistry {
    SeedRegistry::from_file(&registry_path).expect("bundled registry should load")
}

#[rstest]
fn bundled_registry_lists_named_seeds(registry: SeedRegistry) {
    let names: Vec<&str> = registry.seeds().iter().map(|s| s.name()).collect();
    assert_eq!(names, ["mossy-owl", "snowy-penguin"]);
    assert_eq!(
        registry.reference_date(),
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    );
}

#[rstest]
#[case("mossy-owl", 2026, 12)]
#[case("snowy-penguin", 1234, 5)]
fn bundled_seeds_carry_counts(
    registry: SeedRegistry,
    #[case] name: &str,
    #[case] seed: u64,
    #[case] count: usize,
) {
    let seed_def = registry.find_seed(name).expect("seed should exist");
    assert_eq!(seed_def.seed(), seed);
    assert_eq!(seed_def.profile_count(), count);
}

#[rstest]
fn missing_file_reports_path() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/absent.json");
    let err = SeedRegistry::from_file(&path).expect_err("missing file should fail");
    assert!(
        matches!(err, RegistryError::IoError { path: ref p, .. } if *p == path),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn bundled_seed_generates_consistent_profiles_without_residence(registry: SeedRegistry) {
    let seed_def = registry.find_seed("snowy-penguin").expect("seed should exist");
    let profiles = generate_profiles(&registry, seed_def, &ProfileRequest::default());

    assert_eq!(profiles.len(), 5);
    for profile in profiles {
        let GeneratedProfile::Full(record) = profile else {
            panic!("default variant should yield full records");
        };
        assert_eq!(record.len(), 14);
        assert!(!record.contains(ProfileField::Residence));
        assert!(!record.contains(ProfileField::Address));
        let birthdate = record
            .get(ProfileField::Birthdate)
            .expect("birthdate present");
        let json = serde_json::to_value(birthdate).expect("serialize");
        let text = json.as_str().expect("birthdate serializes as text");
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").expect("ISO date");
        assert!(date <= registry.reference_date());
    }
}

#[rstest]
fn simple_variant_ignores_field_selection(registry: SeedRegistry) {
    let seed_def = registry.find_seed("mossy-owl").expect("seed should exist");
    let request = ProfileRequest {
        variant: ProfileVariant::Simple,
        fields: profile_synth::FieldSelection::from_csv("job"),
        count: Some(2),
        ..ProfileRequest::default()
    };

    let profiles = generate_profiles(&registry, seed_def, &request);
    assert_eq!(profiles.len(), 2);
    assert!(
        profiles
            .iter()
            .all(|p| matches!(p, GeneratedProfile::Simple(_)))
    );
}
