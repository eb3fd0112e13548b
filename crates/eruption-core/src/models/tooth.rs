//! Tooth identifiers (quadrant notation), quadrants and eruption statuses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of teeth charted per quadrant.
pub const TEETH_PER_QUADRANT: u8 = 7;

/// Number of slots in a dental chart.
pub const TOOTH_COUNT: usize = 28;

/// A tooth id outside the 28 charted positions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid tooth id: {0} (expected 11-17, 21-27, 31-37 or 41-47)")]
pub struct InvalidToothId(pub String);

/// A status string that matches neither a keyword nor a label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown tooth status: {0} (expected unset, none, partial or complete)")]
pub struct UnknownToothStatus(pub String);

/// Two-digit tooth id: quadrant digit (1-4) followed by position digit (1-7).
///
/// Only the 28 charted ids can be constructed, so every `ToothId` in the crate
/// is a valid slot key. Serialized as a string ("11") so it can key a JSON
/// object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToothId(u8);

impl ToothId {
    /// Validate a raw tooth number.
    pub fn new(id: u8) -> Result<Self, InvalidToothId> {
        let quadrant = id / 10;
        let position = id % 10;
        if (1..=4).contains(&quadrant) && (1..=TEETH_PER_QUADRANT).contains(&position) {
            Ok(Self(id))
        } else {
            Err(InvalidToothId(id.to_string()))
        }
    }

    /// Raw two-digit number.
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn quadrant(self) -> Quadrant {
        match self.0 / 10 {
            1 => Quadrant::UpperRight,
            2 => Quadrant::UpperLeft,
            3 => Quadrant::LowerLeft,
            _ => Quadrant::LowerRight,
        }
    }

    /// Position within the quadrant (1-7).
    pub fn position(self) -> u8 {
        self.0 % 10
    }

    /// All 28 ids in canonical order (11..17, 21..27, 31..37, 41..47).
    pub fn all() -> impl Iterator<Item = ToothId> {
        Quadrant::ALL.into_iter().flat_map(Quadrant::teeth)
    }
}

impl fmt::Display for ToothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToothId {
    type Err = InvalidToothId;

    /// Accepts exactly two ASCII digits, so every id has one spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [tens @ b'0'..=b'9', units @ b'0'..=b'9'] => {
                ToothId::new((tens - b'0') * 10 + (units - b'0'))
                    .map_err(|_| InvalidToothId(s.to_string()))
            }
            _ => Err(InvalidToothId(s.to_string())),
        }
    }
}

impl TryFrom<String> for ToothId {
    type Error = InvalidToothId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ToothId> for String {
    fn from(id: ToothId) -> Self {
        id.to_string()
    }
}

/// One of the four dental quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// Quadrants in charting order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// Quadrant digit (1-4).
    pub fn number(self) -> u8 {
        match self {
            Quadrant::UpperRight => 1,
            Quadrant::UpperLeft => 2,
            Quadrant::LowerLeft => 3,
            Quadrant::LowerRight => 4,
        }
    }

    /// Group heading shown above the quadrant's selectors.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::UpperRight => "Quadrant 1 (Upper Right)",
            Quadrant::UpperLeft => "Quadrant 2 (Upper Left)",
            Quadrant::LowerLeft => "Quadrant 3 (Lower Left)",
            Quadrant::LowerRight => "Quadrant 4 (Lower Right)",
        }
    }

    /// The seven teeth of this quadrant, front to back.
    pub fn teeth(self) -> impl Iterator<Item = ToothId> {
        let base = self.number() * 10;
        (1..=TEETH_PER_QUADRANT).map(move |position| ToothId(base + position))
    }
}

/// Eruption status of a single tooth.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum,
)]
pub enum ToothStatus {
    /// Not assessed
    #[default]
    #[serde(rename = "Sélectionner un état")]
    Unset,
    #[serde(rename = "Absence d'éruption")]
    NoEruption,
    #[serde(rename = "Éruption partielle")]
    PartialEruption,
    #[serde(rename = "Éruption complète")]
    CompleteEruption,
}

impl ToothStatus {
    /// Selector options, in display order.
    pub const ALL: [ToothStatus; 4] = [
        ToothStatus::Unset,
        ToothStatus::NoEruption,
        ToothStatus::PartialEruption,
        ToothStatus::CompleteEruption,
    ];

    /// Label used in exports and on selectors.
    pub fn label(self) -> &'static str {
        match self {
            ToothStatus::Unset => "Sélectionner un état",
            ToothStatus::NoEruption => "Absence d'éruption",
            ToothStatus::PartialEruption => "Éruption partielle",
            ToothStatus::CompleteEruption => "Éruption complète",
        }
    }

    /// Short keyword accepted on the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            ToothStatus::Unset => "unset",
            ToothStatus::NoEruption => "none",
            ToothStatus::PartialEruption => "partial",
            ToothStatus::CompleteEruption => "complete",
        }
    }

    /// Whether the tooth has been evaluated.
    pub fn is_set(self) -> bool {
        self != ToothStatus::Unset
    }
}

impl fmt::Display for ToothStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToothStatus {
    type Err = UnknownToothStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ToothStatus::ALL
            .into_iter()
            .find(|status| {
                status.keyword().eq_ignore_ascii_case(trimmed) || status.label() == trimmed
            })
            .ok_or_else(|| UnknownToothStatus(s.to_string()))
    }
}
