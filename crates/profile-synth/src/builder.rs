//! Profile composition.
//!
//! [`ProfileBuilder`] layers four entry points over a [`FieldSource`]:
//!
//! - [`simple_profile`](ProfileBuilder::simple_profile): independent identity
//!   fields;
//! - [`simple_profile_consistent`](ProfileBuilder::simple_profile_consistent):
//!   `name`, `username` and `mail` share one first/last name pair;
//! - [`profile`](ProfileBuilder::profile): loose identity plus occupational,
//!   legal, geographic and categorical fields;
//! - [`profile_consistent`](ProfileBuilder::profile_consistent): consistent
//!   identity plus a decomposed address whose `zip` is drawn within `state`.
//!
//! The full builders materialise every field before applying the caller's
//! [`FieldSelection`].

use rand::Rng;

use crate::blood::BloodGroup;
use crate::field::{FieldSelection, ProfileField, ProfileRecord};
use crate::record::{ConsistentProfile, Coordinates, Profile, SimpleProfile};
use crate::sex::Sex;
use crate::source::{FieldSource, NamePair};

/// Fields always stripped from consistent full profiles, after selection.
pub const CONSISTENT_EXCLUDED_FIELDS: [ProfileField; 2] =
    [ProfileField::Residence, ProfileField::Address];

/// Exclusive upper bound range for the website count draw.
///
/// The bound is drawn from `[2, 5)` and `bound - 1` URLs are produced, so a
/// profile carries one to three websites.
const WEBSITE_BOUND_LOW: usize = 2;
const WEBSITE_BOUND_HIGH: usize = 5;

/// Composes profiles from a [`FieldSource`].
///
/// The builder holds no mutable state; all randomness comes from the RNG
/// passed to each call.
///
/// # Example
///
/// ```
/// use profile_synth::{FakeFieldSource, FieldSelection, ProfileBuilder, ProfileField};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let builder = ProfileBuilder::new(FakeFieldSource::default());
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let selection = FieldSelection::from_names(["name", "state", "zip"]);
/// let record = builder.profile_consistent(&mut rng, &selection, Some("F"));
///
/// let keys: Vec<_> = record.keys().collect();
/// assert_eq!(keys, [ProfileField::State, ProfileField::Zip, ProfileField::Name]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder<S> {
    source: S,
}

impl<S: FieldSource> ProfileBuilder<S> {
    /// Creates a builder over `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns the underlying field source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Builds an identity whose fields are drawn independently.
    ///
    /// `name` is unrelated to `username` and `mail`.
    #[must_use]
    pub fn simple_profile<R: Rng + ?Sized>(&self, rng: &mut R, sex: Option<&str>) -> SimpleProfile {
        let sex = Sex::resolve(sex, rng);
        let name = self.source.name(rng, sex);
        SimpleProfile {
            username: self.source.username(rng, None),
            name,
            sex,
            address: self.source.address(rng),
            mail: self.source.free_email(rng, None),
            birthdate: self.source.date_of_birth(rng),
        }
    }

    /// Builds an identity whose `username` and `mail` derive from the same
    /// first/last pair as `name`.
    ///
    /// `name` is always `"first last"`; no locale-specific name formatting is
    /// applied.
    #[must_use]
    pub fn simple_profile_consistent<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sex: Option<&str>,
    ) -> SimpleProfile {
        let sex = Sex::resolve(sex, rng);
        let names = NamePair::new(self.source.first_name(rng, sex), self.source.last_name(rng));
        SimpleProfile {
            username: self.source.username(rng, Some(&names)),
            name: names.full_name(),
            sex,
            address: self.source.address(rng),
            mail: self.source.free_email(rng, Some(&names)),
            birthdate: self.source.date_of_birth(rng),
        }
    }

    /// Builds the typed loose full profile without filtering.
    #[must_use]
    pub fn full_profile<R: Rng + ?Sized>(&self, rng: &mut R, sex: Option<&str>) -> Profile {
        let job = self.source.job(rng);
        let company = self.source.company(rng);
        let ssn = self.source.ssn(rng);
        let residence = self.source.address(rng);
        let current_location = Coordinates {
            latitude: self.source.latitude(rng),
            longitude: self.source.longitude(rng),
        };
        let blood_group = BloodGroup::sample(rng);
        let website = self.websites(rng);
        let identity = self.simple_profile(rng, sex);

        Profile {
            job,
            company,
            ssn,
            residence,
            current_location,
            blood_group,
            website,
            identity,
        }
    }

    /// Builds a loose full profile and applies `fields`.
    #[must_use]
    pub fn profile<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        fields: &FieldSelection,
        sex: Option<&str>,
    ) -> ProfileRecord {
        self.full_profile(rng, sex).into_record().select(fields)
    }

    /// Builds the typed consistent full profile without filtering.
    ///
    /// `zip` is drawn with the generated `state`.
    #[must_use]
    pub fn full_profile_consistent<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        sex: Option<&str>,
    ) -> ConsistentProfile {
        let job = self.source.job(rng);
        let company = self.source.company(rng);
        let ssn = self.source.ssn(rng);
        let residence = self.source.address(rng);
        let street_address = self.source.street_address(rng);
        let city = self.source.city(rng);
        let state = self.source.state_abbr(rng);
        let blood_group = BloodGroup::sample(rng);
        let website = self.websites(rng);
        let zip = self.source.zipcode_in_state(rng, &state);
        let identity = self.simple_profile_consistent(rng, sex);

        ConsistentProfile {
            job,
            company,
            ssn,
            residence,
            street_address,
            city,
            state,
            blood_group,
            website,
            zip,
            identity,
        }
    }

    /// Builds a consistent full profile, applies `fields`, then removes
    /// [`CONSISTENT_EXCLUDED_FIELDS`].
    ///
    /// The exclusion runs after selection, so requesting `residence` or
    /// `address` never yields them.
    #[must_use]
    pub fn profile_consistent<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        fields: &FieldSelection,
        sex: Option<&str>,
    ) -> ProfileRecord {
        self.full_profile_consistent(rng, sex)
            .into_record()
            .select(fields)
            .without(&CONSISTENT_EXCLUDED_FIELDS)
    }

    fn websites<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let bound = rng.random_range(WEBSITE_BOUND_LOW..WEBSITE_BOUND_HIGH);
        (1..bound).map(|_| self.source.url(rng)).collect()
    }
}
