//! Shared field source stub for profile-synth tests.

use std::cell::RefCell;

use chrono::NaiveDate;
use profile_synth::{FieldSource, NamePair, Sex};
use rand::Rng;

/// Field source that echoes its inputs so derivations are observable.
///
/// Every `zipcode_in_state` call records the state it was given.
#[derive(Debug)]
pub struct EchoSource {
    state: String,
    zip_states: RefCell<Vec<String>>,
}

impl EchoSource {
    /// Creates a stub whose `state_abbr` always returns `state`.
    #[must_use]
    pub fn with_state(state: &str) -> Self {
        Self {
            state: state.to_owned(),
            zip_states: RefCell::default(),
        }
    }

    /// States passed to `zipcode_in_state`, in call order.
    #[must_use]
    pub fn zip_states(&self) -> Vec<String> {
        self.zip_states.borrow().clone()
    }
}

impl FieldSource for EchoSource {
    fn first_name<R: Rng + ?Sized>(&self, _rng: &mut R, sex: Sex) -> String {
        format!("First{sex}")
    }

    fn last_name<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "Last".to_owned()
    }

    fn name<R: Rng + ?Sized>(&self, _rng: &mut R, sex: Sex) -> String {
        format!("Formatted {sex}")
    }

    fn username<R: Rng + ?Sized>(&self, _rng: &mut R, names: Option<&NamePair>) -> String {
        names.map_or_else(
            || "anon".to_owned(),
            |pair| format!("user:{}:{}", pair.first, pair.last),
        )
    }

    fn free_email<R: Rng + ?Sized>(&self, _rng: &mut R, names: Option<&NamePair>) -> String {
        names.map_or_else(
            || "anon@mail".to_owned(),
            |pair| format!("{}.{}@mail", pair.first, pair.last),
        )
    }

    fn address<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "1 Stub St\nStubville, ST 00000".to_owned()
    }

    fn street_address<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "1 Stub St".to_owned()
    }

    fn city<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "Stubville".to_owned()
    }

    fn state_abbr<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        self.state.clone()
    }

    fn zipcode_in_state<R: Rng + ?Sized>(&self, _rng: &mut R, state: &str) -> String {
        self.zip_states.borrow_mut().push(state.to_owned());
        format!("zip-in-{state}")
    }

    fn latitude<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        1.0
    }

    fn longitude<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        2.0
    }

    fn job<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "Tester".to_owned()
    }

    fn company<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "Stub Ltd".to_owned()
    }

    fn ssn<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "001-01-0001".to_owned()
    }

    fn url<R: Rng + ?Sized>(&self, _rng: &mut R) -> String {
        "https://www.stub.test/".to_owned()
    }

    fn date_of_birth<R: Rng + ?Sized>(&self, _rng: &mut R) -> NaiveDate {
        NaiveDate::default()
    }
}
