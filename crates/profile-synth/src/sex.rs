//! Sex codes and their resolution from caller input.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Two-valued sex code carried by every profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialised as `"F"`.
    #[serde(rename = "F")]
    Female,
    /// Serialised as `"M"`.
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// Parses an exact `"F"` or `"M"` code.
    ///
    /// Matching is case-sensitive; `"f"` is not a valid code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "F" => Some(Self::Female),
            "M" => Some(Self::Male),
            _ => None,
        }
    }

    /// Returns the single-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
        }
    }

    /// Keeps a valid requested code or draws one uniformly at random.
    ///
    /// Anything other than exactly `"F"` or `"M"` is treated as absent. The
    /// RNG is only touched when a draw is needed.
    ///
    /// # Example
    ///
    /// ```
    /// use profile_synth::Sex;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// assert_eq!(Sex::resolve(Some("F"), &mut rng), Sex::Female);
    ///
    /// let drawn = Sex::resolve(Some("x"), &mut rng);
    /// assert!(matches!(drawn, Sex::Female | Sex::Male));
    /// ```
    #[must_use]
    pub fn resolve<R: Rng + ?Sized>(requested: Option<&str>, rng: &mut R) -> Self {
        requested
            .and_then(Self::from_code)
            .unwrap_or_else(|| Self::random(rng))
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Female
        } else {
            Self::Male
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
