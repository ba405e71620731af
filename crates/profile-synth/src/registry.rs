//! Seed registry types and JSON parsing.
//!
//! The registry holds named seed definitions plus the reference date that
//! anchors generated birthdates. It is loaded from JSON and provides
//! deterministic seed lookups.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::source::DEFAULT_REFERENCE_DATE;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seeds.
///
/// # Example
///
/// ```
/// use profile_synth::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "referenceDate": "2025-06-30",
///     "seeds": [{"name": "test", "seed": 42, "profileCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// assert_eq!(registry.reference_date().to_string(), "2025-06-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    reference_date: NaiveDate,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - The reference date is not `YYYY-MM-DD`
    /// - The seeds array is empty or repeats a name
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let date_text = raw
            .reference_date
            .unwrap_or_else(|| DEFAULT_REFERENCE_DATE.to_owned());
        let reference_date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
            .map_err(|_| RegistryError::InvalidReferenceDate { value: date_text })?;

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::with_capacity(raw.seeds.len());
        for seed in &raw.seeds {
            if !names.insert(seed.name.as_str()) {
                return Err(RegistryError::DuplicateSeed {
                    name: seed.name.clone(),
                });
            }
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition::new(s.name, s.seed, s.profile_count))
            .collect();

        Ok(Self {
            version: raw.version,
            reference_date,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the date generated birthdates are anchored to.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic profile generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    profile_count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64, profile_count: usize) -> Self {
        Self {
            name: name.into(),
            seed,
            profile_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the default number of profiles to generate.
    #[must_use]
    pub const fn profile_count(&self) -> usize {
        self.profile_count
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    #[serde(default)]
    reference_date: Option<String>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    profile_count: usize,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "referenceDate": "2025-06-30",
        "seeds": [
            {"name": "mossy-owl", "seed": 2026, "profileCount": 12},
            {"name": "snowy-penguin", "seed": 1234, "profileCount": 5}
        ]
    }"#;

    #[test]
    fn parses_valid_registry() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(
            registry.reference_date(),
            NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
        );
        assert_eq!(registry.seeds().len(), 2);
    }

    #[test]
    fn missing_reference_date_uses_default() {
        let json = r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "profileCount": 1}]}"#;
        let registry = SeedRegistry::from_json(json).expect("valid registry");

        assert_eq!(registry.reference_date().to_string(), DEFAULT_REFERENCE_DATE);
    }

    #[test]
    fn finds_seed_by_name() {
        let registry = SeedRegistry::from_json(VALID_JSON).expect("valid registry");
        let seed = registry.find_seed("mossy-owl").expect("seed found");

        assert_eq!(seed.name(), "mossy-owl");
        assert_eq!(seed.seed(), 2026);
        assert_eq!(seed.profile_count(), 12);
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"seeds": [{"name": "a", "seed": 1, "profileCount": 1}]}"#)]
    #[case::missing_profile_count(r#"{"version": 1, "seeds": [{"name": "a", "seed": 1}]}"#)]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = SeedRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 99, "seeds": [{"name": "a", "seed": 1, "profileCount": 1}]}"#,
        RegistryError::UnsupportedVersion { expected: 1, actual: 99 }
    )]
    #[case::invalid_reference_date(
        r#"{"version": 1, "referenceDate": "2024-13-01", "seeds": [{"name": "a", "seed": 1, "profileCount": 1}]}"#,
        RegistryError::InvalidReferenceDate { value: "2024-13-01".to_owned() }
    )]
    #[case::empty_seeds(r#"{"version": 1, "seeds": []}"#, RegistryError::EmptySeeds)]
    #[case::duplicate_seed(
        r#"{"version": 1, "seeds": [{"name": "a", "seed": 1, "profileCount": 1}, {"name": "a", "seed": 2, "profileCount": 1}]}"#,
        RegistryError::DuplicateSeed { name: "a".to_owned() }
    )]
    fn rejects_invalid_registry(#[case] json: &str, #[case] expected: RegistryError) {
        let result = SeedRegistry::from_json(json);
        assert_eq!(result, Err(expected));
    }
}
