//! Atomic field generators consumed by the profile builders.
//!
//! The builders only orchestrate; every atomic value comes from a
//! [`FieldSource`]. [`FakeFieldSource`] is the default implementation.

mod fake_source;
mod tables;

use rand::Rng;

use crate::sex::Sex;

pub use fake_source::{DEFAULT_REFERENCE_DATE, FakeFieldSource};

/// A first/last name pair shared by consistent identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePair {
    /// Given name.
    pub first: String,
    /// Family name.
    pub last: String,
}

impl NamePair {
    /// Creates a pair.
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Returns `"first last"`.
    ///
    /// No locale-specific ordering is applied.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Generator for every atomic value a profile needs.
///
/// Each method draws from the caller's RNG so seeded runs are reproducible.
/// When a [`NamePair`] is supplied to [`username`](Self::username) or
/// [`free_email`](Self::free_email), the result must be derived from it.
pub trait FieldSource {
    /// Given name appropriate for `sex`.
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R, sex: Sex) -> String;

    /// Family name.
    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Formatted display name appropriate for `sex`.
    fn name<R: Rng + ?Sized>(&self, rng: &mut R, sex: Sex) -> String;

    /// Login handle, derived from `names` when given.
    fn username<R: Rng + ?Sized>(&self, rng: &mut R, names: Option<&NamePair>) -> String;

    /// Address at a free email provider, derived from `names` when given.
    fn free_email<R: Rng + ?Sized>(&self, rng: &mut R, names: Option<&NamePair>) -> String;

    /// Complete free-form postal address.
    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Street line of an address.
    fn street_address<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// City name.
    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Two-letter state abbreviation.
    fn state_abbr<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// ZIP code located in `state`.
    fn zipcode_in_state<R: Rng + ?Sized>(&self, rng: &mut R, state: &str) -> String;

    /// Latitude in decimal degrees.
    fn latitude<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Longitude in decimal degrees.
    fn longitude<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Job title.
    fn job<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Company name.
    fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// National identifier.
    fn ssn<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Website URL.
    fn url<R: Rng + ?Sized>(&self, rng: &mut R) -> String;

    /// Date of birth.
    fn date_of_birth<R: Rng + ?Sized>(&self, rng: &mut R) -> chrono::NaiveDate;
}
