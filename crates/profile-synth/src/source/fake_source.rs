//! Default [`FieldSource`] backed by the `fake` crate.

use chrono::{Days, Months, NaiveDate};
use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StreetName};
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::{DomainSuffix, FreeEmail, FreeEmailProvider, Username};
use fake::faker::job::raw::Title;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::LastName;
use fake::locales::EN;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::tables::{
    FEMALE_FIRST_NAMES, FEMALE_PREFIXES, FEMALE_SUFFIXES, MALE_FIRST_NAMES, MALE_PREFIXES,
    MALE_SUFFIXES, STATE_ZIP_RANGES, zip_range,
};
use super::{FieldSource, NamePair};
use crate::handle::{join_handle, sanitize_handle, truncate_handle};
use crate::sex::Sex;

/// Reference date used when none is configured.
pub const DEFAULT_REFERENCE_DATE: &str = "2024-01-01";

/// Oldest generated age, in years before the reference date.
const MAX_AGE_YEARS: u32 = 115;

/// Name format weights out of 1000: plain, then prefixed, remainder suffixed.
const PLAIN_NAME_WEIGHT: u16 = 970;
const PREFIXED_NAME_WEIGHT: u16 = 15;

const MICRO_DEGREES_PER_DEGREE: f64 = 1_000_000.0;
const MAX_LATITUDE_MICRO: i32 = 90_000_000;
const MAX_LONGITUDE_MICRO: i32 = 180_000_000;

/// English-locale field source.
///
/// Birthdates are drawn relative to a fixed reference date rather than the
/// system clock, so a seeded RNG always yields the same profiles.
///
/// # Example
///
/// ```
/// use profile_synth::{FakeFieldSource, FieldSource};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let source = FakeFieldSource::default();
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
///
/// let zip = source.zipcode_in_state(&mut rng, "CA");
/// let value: u32 = zip.parse().expect("numeric zip");
/// assert!((90001..=96162).contains(&value));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeFieldSource {
    reference_date: NaiveDate,
}

impl FakeFieldSource {
    /// Creates a source whose birthdates fall on or before `reference_date`.
    #[must_use]
    pub const fn new(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    /// Returns the configured reference date.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }
}

impl Default for FakeFieldSource {
    fn default() -> Self {
        let reference_date = DEFAULT_REFERENCE_DATE
            .parse::<NaiveDate>()
            .unwrap_or_default();
        Self::new(reference_date)
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

#[expect(
    clippy::float_arithmetic,
    reason = "scales integer micro-degrees to decimal degrees"
)]
fn micro_degrees_to_degrees(micro: i32) -> f64 {
    f64::from(micro) / MICRO_DEGREES_PER_DEGREE
}

impl FieldSource for FakeFieldSource {
    fn first_name<R: Rng + ?Sized>(&self, rng: &mut R, sex: Sex) -> String {
        let names = match sex {
            Sex::Female => FEMALE_FIRST_NAMES,
            Sex::Male => MALE_FIRST_NAMES,
        };
        pick(rng, names).to_owned()
    }

    fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        LastName(EN).fake_with_rng(rng)
    }

    fn name<R: Rng + ?Sized>(&self, rng: &mut R, sex: Sex) -> String {
        let format = rng.random_range(0..1000_u16);
        let first = self.first_name(rng, sex);
        let last = self.last_name(rng);

        if format < PLAIN_NAME_WEIGHT {
            return format!("{first} {last}");
        }
        if format < PLAIN_NAME_WEIGHT + PREFIXED_NAME_WEIGHT {
            let prefixes = match sex {
                Sex::Female => FEMALE_PREFIXES,
                Sex::Male => MALE_PREFIXES,
            };
            return format!("{} {first} {last}", pick(rng, prefixes));
        }
        let suffixes = match sex {
            Sex::Female => FEMALE_SUFFIXES,
            Sex::Male => MALE_SUFFIXES,
        };
        format!("{first} {last} {}", pick(rng, suffixes))
    }

    fn username<R: Rng + ?Sized>(&self, rng: &mut R, names: Option<&NamePair>) -> String {
        let Some(pair) = names else {
            return Username(EN).fake_with_rng(rng);
        };

        let handle = match rng.random_range(0..4_u8) {
            0 => join_handle(&[&pair.last, &pair.first]),
            1 => join_handle(&[&pair.first, &pair.last]),
            2 => {
                let first = sanitize_handle(&pair.first);
                let digits = rng.random_range(0..100_u8);
                if first.is_empty() {
                    String::new()
                } else {
                    truncate_handle(&format!("{first}{digits:02}"))
                }
            }
            _ => {
                let initial = sanitize_handle(&pair.first).chars().next();
                let stem: String = initial
                    .into_iter()
                    .chain(sanitize_handle(&pair.last).chars())
                    .collect();
                truncate_handle(&stem)
            }
        };

        if handle.is_empty() {
            format!("user{:04}", rng.random_range(0..10_000_u16))
        } else {
            handle
        }
    }

    fn free_email<R: Rng + ?Sized>(&self, rng: &mut R, names: Option<&NamePair>) -> String {
        if names.is_none() {
            return FreeEmail(EN).fake_with_rng(rng);
        }
        let local = self.username(rng, names);
        let provider: String = FreeEmailProvider(EN).fake_with_rng(rng);
        format!("{local}@{provider}")
    }

    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let street = self.street_address(rng);
        let city = self.city(rng);
        let state = self.state_abbr(rng);
        let zip = self.zipcode_in_state(rng, &state);
        format!("{street}\n{city}, {state} {zip}")
    }

    fn street_address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let number: String = BuildingNumber(EN).fake_with_rng(rng);
        let street: String = StreetName(EN).fake_with_rng(rng);
        format!("{number} {street}")
    }

    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CityName(EN).fake_with_rng(rng)
    }

    fn state_abbr<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        STATE_ZIP_RANGES
            .choose(rng)
            .map_or("CA", |(abbr, _, _)| *abbr)
            .to_owned()
    }

    fn zipcode_in_state<R: Rng + ?Sized>(&self, rng: &mut R, state: &str) -> String {
        let (low, high) = zip_range(state).unwrap_or((1, 99_999));
        format!("{:05}", rng.random_range(low..=high))
    }

    fn latitude<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        micro_degrees_to_degrees(rng.random_range(-MAX_LATITUDE_MICRO..=MAX_LATITUDE_MICRO))
    }

    fn longitude<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        micro_degrees_to_degrees(rng.random_range(-MAX_LONGITUDE_MICRO..=MAX_LONGITUDE_MICRO))
    }

    fn job<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        Title(EN).fake_with_rng(rng)
    }

    fn company<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        CompanyName(EN).fake_with_rng(rng)
    }

    fn ssn<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // Area 666 is never issued; shift the upper half of 1..=898 past it.
        let drawn = rng.random_range(1..=898_u16);
        let area = if drawn >= 666 { drawn + 1 } else { drawn };
        let group = rng.random_range(1..=99_u8);
        let serial = rng.random_range(1..=9999_u16);
        format!("{area:03}-{group:02}-{serial:04}")
    }

    fn url<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let word: String = Word(EN).fake_with_rng(rng);
        let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
        let domain = sanitize_handle(&word);
        let label = if domain.is_empty() { "example" } else { &domain };
        format!("https://www.{label}.{suffix}/")
    }

    fn date_of_birth<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let earliest = self
            .reference_date
            .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
            .unwrap_or(NaiveDate::MIN);
        let span = u64::try_from(self.reference_date.signed_duration_since(earliest).num_days())
            .unwrap_or(0);
        let offset = rng.random_range(0..=span);
        self.reference_date
            .checked_sub_days(Days::new(offset))
            .unwrap_or(self.reference_date)
    }
}
