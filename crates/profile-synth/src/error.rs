//! Error types for the profile-synth crate.
//!
//! Profile composition itself cannot fail; these errors cover the seed
//! registry and request parsing that surround it.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The reference date is not a `YYYY-MM-DD` date.
    #[error("invalid reference date '{value}': expected YYYY-MM-DD")]
    InvalidReferenceDate {
        /// The rejected value.
        value: String,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed '{name}' is defined more than once")]
    DuplicateSeed {
        /// The repeated seed name.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// A profile variant name did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown profile variant '{value}': expected one of simple, simple-consistent, full, full-consistent"
)]
pub struct VariantParseError {
    /// The rejected value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_io_formats_correctly() {
        let err = RegistryError::IoError {
            path: PathBuf::from("/tmp/seeds.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read registry file at '/tmp/seeds.json': file not found"
        );
    }

    #[test]
    fn registry_error_version_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported registry version: expected 1, found 2"
        );
    }

    #[test]
    fn registry_error_reference_date_formats_correctly() {
        let err = RegistryError::InvalidReferenceDate {
            value: "01/02/2024".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid reference date '01/02/2024': expected YYYY-MM-DD"
        );
    }

    #[test]
    fn registry_error_duplicate_seed_formats_correctly() {
        let err = RegistryError::DuplicateSeed {
            name: "mossy-owl".to_owned(),
        };
        assert_eq!(err.to_string(), "seed 'mossy-owl' is defined more than once");
    }

    #[test]
    fn registry_error_seed_not_found_formats_correctly() {
        let err = RegistryError::SeedNotFound {
            name: "mossy-owl".to_owned(),
        };
        assert_eq!(err.to_string(), "seed 'mossy-owl' not found in registry");
    }

    #[test]
    fn variant_parse_error_lists_choices() {
        let err = VariantParseError {
            value: "medium".to_owned(),
        };
        assert!(err.to_string().starts_with("unknown profile variant 'medium'"));
    }
}
