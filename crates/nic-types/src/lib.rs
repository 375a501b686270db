//! Shared value types for NIC decoding.
//!
//! These enums are used by the decoder, the FHIR fragment and the API layers, so they live
//! in a small crate of their own with stable wire strings.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a wire string into one of the value types.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The input did not name a known sex.
    #[error("unknown sex: '{0}' (expected 'male' or 'female')")]
    UnknownSex(String),
    /// The input did not name a known format variant.
    #[error("unknown NIC format: '{0}' (expected 'legacy' or 'modern')")]
    UnknownFormat(String),
}

/// Sex as encoded in the day-of-year field of a NIC number.
///
/// Wire strings follow FHIR `AdministrativeGender` (`male` / `female`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Convert to the wire format string.
    pub fn to_wire(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Parse from the wire format string. Matching is case-insensitive.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// The two historical NIC layouts.
///
/// - `Legacy`: 9 digits followed by `V` or `X` (for example `963562345V`).
/// - `Modern`: 12 digits (for example `199635601234`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatVariant {
    Legacy,
    Modern,
}

impl FormatVariant {
    /// Convert to the wire format string.
    pub fn to_wire(self) -> &'static str {
        match self {
            FormatVariant::Legacy => "legacy",
            FormatVariant::Modern => "modern",
        }
    }

    /// Parse from the wire format string. Matching is case-insensitive.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(FormatVariant::Legacy),
            "modern" => Some(FormatVariant::Modern),
            _ => None,
        }
    }

    /// Total character length of a number in this layout.
    pub fn char_len(self) -> usize {
        match self {
            FormatVariant::Legacy => 10,
            FormatVariant::Modern => 12,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire())
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_wire())
    }
}

impl FromStr for Sex {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sex::from_wire(s).ok_or_else(|| TypeError::UnknownSex(s.to_owned()))
    }
}

impl FromStr for FormatVariant {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatVariant::from_wire(s).ok_or_else(|| TypeError::UnknownFormat(s.to_owned()))
    }
}

impl serde::Serialize for Sex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_wire())
    }
}

impl<'de> serde::Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for FormatVariant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_wire())
    }
}

impl<'de> serde::Deserialize<'de> for FormatVariant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
