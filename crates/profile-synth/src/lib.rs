//! Deterministic fake identity profile synthesis.
//!
//! This crate composes plausible identity records from atomic fake values at
//! two fidelity levels:
//!
//! - *loose* profiles draw every field independently;
//! - *consistent* profiles derive `username` and `mail` from the same
//!   first/last name pair as `name`, and draw `zip` within `state`.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Four builders on [`ProfileBuilder`]: `simple_profile`,
//!   `simple_profile_consistent`, `profile` and `profile_consistent`
//! - Field selection over the closed [`ProfileField`] key set
//! - A pluggable [`FieldSource`] with a `fake`-backed default
//! - Reproducible batches from a JSON seed registry
//!
//! # Example
//!
//! ```
//! use profile_synth::{FakeFieldSource, ProfileBuilder, Sex};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let builder = ProfileBuilder::new(FakeFieldSource::default());
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let profile = builder.simple_profile_consistent(&mut rng, Some("M"));
//! assert_eq!(profile.sex, Sex::Male);
//! assert!(profile.mail.contains('@'));
//! ```

mod blood;
mod builder;
pub mod cli;
mod error;
mod field;
mod generator;
mod handle;
mod record;
mod registry;
mod sex;
mod source;

pub use blood::{AboType, BloodGroup, RhFactor};
pub use builder::{CONSISTENT_EXCLUDED_FIELDS, ProfileBuilder};
pub use error::{RegistryError, VariantParseError};
pub use field::{FieldSelection, FieldValue, ProfileField, ProfileRecord};
pub use generator::{GeneratedProfile, ProfileRequest, ProfileVariant, generate_profiles};
pub use handle::{HANDLE_MAX, is_valid_handle};
pub use record::{ConsistentProfile, Coordinates, Profile, SimpleProfile};
pub use registry::{SeedDefinition, SeedRegistry};
pub use sex::Sex;
pub use source::{DEFAULT_REFERENCE_DATE, FakeFieldSource, FieldSource, NamePair};
