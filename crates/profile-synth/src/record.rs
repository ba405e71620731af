//! Typed profile records, one shape per builder.
//!
//! The full profile shapes are flattened into a [`ProfileRecord`] before field
//! selection so that filtering works over the closed [`ProfileField`] key set.

use chrono::NaiveDate;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::blood::BloodGroup;
use crate::field::{FieldValue, ProfileField, ProfileRecord};
use crate::sex::Sex;

/// Latitude/longitude pair in decimal degrees.
///
/// Serialises as a two-element array, latitude first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in `[-180, 180]`.
    pub longitude: f64,
}

impl Serialize for Coordinates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.latitude)?;
        pair.serialize_element(&self.longitude)?;
        pair.end()
    }
}

/// Minimal identity profile produced by both identity builders.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use profile_synth::{Sex, SimpleProfile};
///
/// let profile = SimpleProfile {
///     username: "lovelace.ada".to_owned(),
///     name: "Ada Lovelace".to_owned(),
///     sex: Sex::Female,
///     address: "12 St James's Square\nLondon, LN 01234".to_owned(),
///     mail: "lovelace.ada@example.org".to_owned(),
///     birthdate: NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date"),
/// };
///
/// let json = serde_json::to_value(&profile).expect("serialize");
/// assert_eq!(json["sex"], "F");
/// assert_eq!(json["birthdate"], "1815-12-10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleProfile {
    /// Login handle.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Sex code.
    pub sex: Sex,
    /// Free-form postal address.
    pub address: String,
    /// Email address.
    pub mail: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
}

impl SimpleProfile {
    fn into_entries(self) -> [(ProfileField, FieldValue); 6] {
        [
            (ProfileField::Username, FieldValue::Text(self.username)),
            (ProfileField::Name, FieldValue::Text(self.name)),
            (ProfileField::Sex, FieldValue::Sex(self.sex)),
            (ProfileField::Address, FieldValue::Text(self.address)),
            (ProfileField::Mail, FieldValue::Text(self.mail)),
            (ProfileField::Birthdate, FieldValue::Date(self.birthdate)),
        ]
    }
}

/// Loose full profile: independent extra fields plus a loose identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Job title.
    pub job: String,
    /// Employer name.
    pub company: String,
    /// National identifier.
    pub ssn: String,
    /// Free-form residential address, independent of `identity.address`.
    pub residence: String,
    /// Current location; not correlated with either address.
    pub current_location: Coordinates,
    /// Blood group.
    pub blood_group: BloodGroup,
    /// Between one and three URLs.
    pub website: Vec<String>,
    /// Embedded loose identity.
    pub identity: SimpleProfile,
}

impl Profile {
    /// Flattens the profile into a record, extra fields first.
    #[must_use]
    pub fn into_record(self) -> ProfileRecord {
        let mut record: ProfileRecord = [
            (ProfileField::Job, FieldValue::Text(self.job)),
            (ProfileField::Company, FieldValue::Text(self.company)),
            (ProfileField::Ssn, FieldValue::Text(self.ssn)),
            (ProfileField::Residence, FieldValue::Text(self.residence)),
            (
                ProfileField::CurrentLocation,
                FieldValue::Coordinates(self.current_location),
            ),
            (
                ProfileField::BloodGroup,
                FieldValue::BloodGroup(self.blood_group),
            ),
            (ProfileField::Website, FieldValue::Urls(self.website)),
        ]
        .into_iter()
        .collect();
        record.extend(self.identity.into_entries());
        record
    }
}

/// Consistent full profile with a decomposed address.
///
/// `residence` and `identity.address` are still generated so the record is
/// complete before filtering; the consistent builder strips both from its
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistentProfile {
    /// Job title.
    pub job: String,
    /// Employer name.
    pub company: String,
    /// National identifier.
    pub ssn: String,
    /// Free-form address, removed from builder output.
    pub residence: String,
    /// Street line of the address.
    pub street_address: String,
    /// City.
    pub city: String,
    /// Two-letter state abbreviation.
    pub state: String,
    /// Blood group.
    pub blood_group: BloodGroup,
    /// Between one and three URLs.
    pub website: Vec<String>,
    /// ZIP code drawn within `state`.
    pub zip: String,
    /// Embedded consistent identity.
    pub identity: SimpleProfile,
}

impl ConsistentProfile {
    /// Flattens the profile into a record, extra fields first.
    ///
    /// The record still contains `residence` and `address`.
    #[must_use]
    pub fn into_record(self) -> ProfileRecord {
        let mut record: ProfileRecord = [
            (ProfileField::Job, FieldValue::Text(self.job)),
            (ProfileField::Company, FieldValue::Text(self.company)),
            (ProfileField::Ssn, FieldValue::Text(self.ssn)),
            (ProfileField::Residence, FieldValue::Text(self.residence)),
            (
                ProfileField::StreetAddress,
                FieldValue::Text(self.street_address),
            ),
            (ProfileField::City, FieldValue::Text(self.city)),
            (ProfileField::State, FieldValue::Text(self.state)),
            (
                ProfileField::BloodGroup,
                FieldValue::BloodGroup(self.blood_group),
            ),
            (ProfileField::Website, FieldValue::Urls(self.website)),
            (ProfileField::Zip, FieldValue::Text(self.zip)),
        ]
        .into_iter()
        .collect();
        record.extend(self.identity.into_entries());
        record
    }
}
