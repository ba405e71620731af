//! ABO/Rh blood groups.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Serialize, Serializer};

/// ABO blood type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AboType {
    /// Type A.
    A,
    /// Type B.
    B,
    /// Type AB.
    Ab,
    /// Type O.
    #[default]
    O,
}

impl AboType {
    const fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Ab => "AB",
            Self::O => "O",
        }
    }
}

/// Rh factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RhFactor {
    /// Rh positive (`+`).
    #[default]
    Positive,
    /// Rh negative (`-`).
    Negative,
}

impl RhFactor {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

/// A blood group such as `AB-` or `O+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BloodGroup {
    /// ABO component.
    pub abo: AboType,
    /// Rh component.
    pub rh: RhFactor,
}

impl BloodGroup {
    /// Every ABO x Rh combination.
    pub const ALL: [Self; 8] = [
        Self::new(AboType::A, RhFactor::Positive),
        Self::new(AboType::A, RhFactor::Negative),
        Self::new(AboType::B, RhFactor::Positive),
        Self::new(AboType::B, RhFactor::Negative),
        Self::new(AboType::Ab, RhFactor::Positive),
        Self::new(AboType::Ab, RhFactor::Negative),
        Self::new(AboType::O, RhFactor::Positive),
        Self::new(AboType::O, RhFactor::Negative),
    ];

    /// Creates a blood group from its components.
    #[must_use]
    pub const fn new(abo: AboType, rh: RhFactor) -> Self {
        Self { abo, rh }
    }

    /// Picks one of the eight combinations with equal probability.
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or_default()
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.abo.symbol(), self.rh.symbol())
    }
}

impl Serialize for BloodGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
