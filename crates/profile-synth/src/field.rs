//! Field keys, field values, and the filtered record returned by the full
//! profile builders.
//!
//! Every key a profile can carry is enumerated by [`ProfileField`]. Callers
//! restrict output with a [`FieldSelection`]; names that match no key are
//! dropped when the selection is built, so the filter itself only ever deals
//! with known keys.

use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::blood::BloodGroup;
use crate::record::Coordinates;
use crate::sex::Sex;

/// A key that may appear in a profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    /// `username`
    Username,
    /// `name`
    Name,
    /// `sex`
    Sex,
    /// `address`
    Address,
    /// `mail`
    Mail,
    /// `birthdate`
    Birthdate,
    /// `job`
    Job,
    /// `company`
    Company,
    /// `ssn`
    Ssn,
    /// `residence`
    Residence,
    /// `current_location`
    CurrentLocation,
    /// `blood_group`
    BloodGroup,
    /// `website`
    Website,
    /// `street address` (the key contains a space)
    StreetAddress,
    /// `city`
    City,
    /// `state`
    State,
    /// `zip`
    Zip,
}

impl ProfileField {
    /// Every known key.
    pub const ALL: [Self; 17] = [
        Self::Username,
        Self::Name,
        Self::Sex,
        Self::Address,
        Self::Mail,
        Self::Birthdate,
        Self::Job,
        Self::Company,
        Self::Ssn,
        Self::Residence,
        Self::CurrentLocation,
        Self::BloodGroup,
        Self::Website,
        Self::StreetAddress,
        Self::City,
        Self::State,
        Self::Zip,
    ];

    /// Returns the key as it appears in serialised output.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Name => "name",
            Self::Sex => "sex",
            Self::Address => "address",
            Self::Mail => "mail",
            Self::Birthdate => "birthdate",
            Self::Job => "job",
            Self::Company => "company",
            Self::Ssn => "ssn",
            Self::Residence => "residence",
            Self::CurrentLocation => "current_location",
            Self::BloodGroup => "blood_group",
            Self::Website => "website",
            Self::StreetAddress => "street address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }

    /// Looks up a key by its serialised name.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The value stored under a [`ProfileField`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text such as a name, address component, job or identifier.
    Text(String),
    /// Sex code.
    Sex(Sex),
    /// Calendar date, serialised as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Latitude/longitude pair.
    Coordinates(Coordinates),
    /// Blood group label.
    BloodGroup(BloodGroup),
    /// List of URLs.
    Urls(Vec<String>),
}

impl FieldValue {
    /// Returns the text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the URL list, if this is a URL list.
    #[must_use]
    pub fn as_urls(&self) -> Option<&[String]> {
        match self {
            Self::Urls(urls) => Some(urls),
            _ => None,
        }
    }
}

/// Caller restriction on which fields a full profile returns.
///
/// An empty request keeps everything. A non-empty request keeps the
/// intersection of the requested and present keys, so a request made up only
/// of unknown names yields an empty record.
///
/// # Example
///
/// ```
/// use profile_synth::{FieldSelection, ProfileField};
///
/// let selection = FieldSelection::from_names(["name", "zip", "shoe_size"]);
/// assert!(selection.includes(ProfileField::Zip));
/// assert!(!selection.includes(ProfileField::City));
/// assert_eq!(selection.ignored(), ["shoe_size".to_owned()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    requested: Option<Vec<ProfileField>>,
    ignored: Vec<String>,
}

impl FieldSelection {
    /// A selection that keeps every field.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            requested: None,
            ignored: Vec::new(),
        }
    }

    /// Builds a selection from field names, dropping names that match no key.
    #[must_use]
    pub fn from_names<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut requested = Vec::new();
        let mut ignored = Vec::new();
        let mut any = false;

        for name in names {
            any = true;
            let raw = name.as_ref();
            match ProfileField::from_key(raw) {
                Some(field) if !requested.contains(&field) => requested.push(field),
                Some(_) => {}
                None => ignored.push(raw.to_owned()),
            }
        }

        if !ignored.is_empty() {
            debug!(?ignored, "ignoring unknown profile field names");
        }

        Self {
            requested: any.then_some(requested),
            ignored,
        }
    }

    /// Builds a selection from a comma-separated list such as
    /// `"name, state,zip"`. Blank entries are skipped.
    #[must_use]
    pub fn from_csv(list: &str) -> Self {
        Self::from_names(
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    /// Returns `true` when the field survives this selection.
    #[must_use]
    pub fn includes(&self, field: ProfileField) -> bool {
        self.requested
            .as_ref()
            .is_none_or(|requested| requested.contains(&field))
    }

    /// Returns `true` when no restriction was requested.
    #[must_use]
    pub const fn keeps_all(&self) -> bool {
        self.requested.is_none()
    }

    /// Names that were requested but match no known field.
    #[must_use]
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }
}

/// An ordered profile record keyed by [`ProfileField`].
///
/// Serialises as a JSON object using [`ProfileField::key`] names, in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRecord {
    entries: Vec<(ProfileField, FieldValue)>,
}

impl ProfileRecord {
    /// Returns the value stored under `field`.
    #[must_use]
    pub fn get(&self, field: ProfileField) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == field)
            .map(|(_, value)| value)
    }

    /// Returns the text stored under `field`, if it is a text value.
    #[must_use]
    pub fn text(&self, field: ProfileField) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Returns `true` when the record carries `field`.
    #[must_use]
    pub fn contains(&self, field: ProfileField) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = ProfileField> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &FieldValue)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the fields admitted by `selection`.
    #[must_use]
    pub fn select(mut self, selection: &FieldSelection) -> Self {
        if !selection.keeps_all() {
            self.entries.retain(|(key, _)| selection.includes(*key));
        }
        self
    }

    /// Removes `excluded` fields regardless of any selection.
    #[must_use]
    pub fn without(mut self, excluded: &[ProfileField]) -> Self {
        self.entries.retain(|(key, _)| !excluded.contains(key));
        self
    }

    /// Adds a field, replacing any existing value under the same key.
    pub fn insert(&mut self, field: ProfileField, value: FieldValue) {
        match self.entries.iter_mut().find(|(key, _)| *key == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }
}

impl FromIterator<(ProfileField, FieldValue)> for ProfileRecord {
    fn from_iter<I: IntoIterator<Item = (ProfileField, FieldValue)>>(iter: I) -> Self {
        let mut record = Self::default();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

impl Extend<(ProfileField, FieldValue)> for ProfileRecord {
    fn extend<I: IntoIterator<Item = (ProfileField, FieldValue)>>(&mut self, iter: I) {
        for (field, value) in iter {
            self.insert(field, value);
        }
    }
}

impl Serialize for ProfileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn record() -> ProfileRecord {
        [
            (ProfileField::Name, FieldValue::Text("Ada Lovelace".to_owned())),
            (ProfileField::Sex, FieldValue::Sex(Sex::Female)),
            (ProfileField::Residence, FieldValue::Text("1 Main St".to_owned())),
            (ProfileField::State, FieldValue::Text("CA".to_owned())),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn keys_round_trip_through_names() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_key(field.key()), Some(field));
        }
    }

    #[rstest]
    #[case("street address", Some(ProfileField::StreetAddress))]
    #[case("street_address", None)]
    #[case("Name", None)]
    fn key_lookup_is_exact(#[case] key: &str, #[case] expected: Option<ProfileField>) {
        assert_eq!(ProfileField::from_key(key), expected);
    }

    #[rstest]
    fn empty_selection_keeps_everything(record: ProfileRecord) {
        let selected = record.clone().select(&FieldSelection::from_names(Vec::<String>::new()));
        assert_eq!(selected, record);
    }

    #[rstest]
    fn selection_keeps_intersection(record: ProfileRecord) {
        let selection = FieldSelection::from_names(["state", "zip", "name"]);
        let keys: Vec<ProfileField> = record.select(&selection).keys().collect();
        assert_eq!(keys, vec![ProfileField::Name, ProfileField::State]);
    }

    #[rstest]
    fn only_unknown_names_yield_empty_record(record: ProfileRecord) {
        let selection = FieldSelection::from_names(["favourite_colour"]);
        assert!(!selection.keeps_all());
        assert!(record.select(&selection).is_empty());
    }

    #[rstest]
    fn exclusion_overrides_selection(record: ProfileRecord) {
        let selection = FieldSelection::from_names(["residence", "state"]);
        let pruned = record
            .select(&selection)
            .without(&[ProfileField::Residence, ProfileField::Address]);
        let keys: Vec<ProfileField> = pruned.keys().collect();
        assert_eq!(keys, vec![ProfileField::State]);
    }

    #[test]
    fn csv_selection_trims_and_skips_blanks() {
        let selection = FieldSelection::from_csv(" name ,, street address,zip ");
        assert!(selection.includes(ProfileField::Name));
        assert!(selection.includes(ProfileField::StreetAddress));
        assert!(selection.includes(ProfileField::Zip));
        assert!(!selection.includes(ProfileField::City));
        assert!(selection.ignored().is_empty());
    }

    #[test]
    fn blank_csv_keeps_everything() {
        assert!(FieldSelection::from_csv(" , ").keeps_all());
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut record = ProfileRecord::default();
        record.insert(ProfileField::City, FieldValue::Text("Oslo".to_owned()));
        record.insert(ProfileField::City, FieldValue::Text("Bergen".to_owned()));

        assert_eq!(record.len(), 1);
        assert_eq!(record.text(ProfileField::City), Some("Bergen"));
    }

    #[rstest]
    fn serialises_as_ordered_object(record: ProfileRecord) {
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"Ada Lovelace","sex":"F","residence":"1 Main St","state":"CA"}"#
        );
    }
}
