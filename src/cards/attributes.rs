//! Attribute selectors.
//!
//! The seven attributes a round compares, in menu order:
//!
//! | Code | Attribute      | Winner  |
//! |------|----------------|---------|
//! | 1    | `Population`   | higher  |
//! | 2    | `Area`         | higher  |
//! | 3    | `Gdp`          | higher  |
//! | 4    | `Landmarks`    | higher  |
//! | 5    | `Density`      | lower   |
//! | 6    | `GdpPerCapita` | higher  |
//! | 7    | `PowerScore`   | higher  |
//!
//! The winner column lives in [`crate::compare::AttributeRule`]; this module
//! only names the attributes and parses them from text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the seven comparable card attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Population,
    Area,
    Gdp,
    /// Tourist attractions.
    Landmarks,
    Density,
    GdpPerCapita,
    /// Super power.
    PowerScore,
}

impl Attribute {
    /// All attributes in menu order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Population,
        Attribute::Area,
        Attribute::Gdp,
        Attribute::Landmarks,
        Attribute::Density,
        Attribute::GdpPerCapita,
        Attribute::PowerScore,
    ];

    /// Zero-based position in [`Attribute::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Menu code, 1 through 7.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Look up an attribute by its menu code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        code.checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Attribute::Population => "Population",
            Attribute::Area => "Area",
            Attribute::Gdp => "GDP",
            Attribute::Landmarks => "Tourist Attractions",
            Attribute::Density => "Population Density",
            Attribute::GdpPerCapita => "GDP per Capita",
            Attribute::PowerScore => "Super Power",
        }
    }

    /// Unit suffix used when rendering a value, if any.
    #[must_use]
    pub const fn unit(self) -> Option<&'static str> {
        match self {
            Attribute::Area => Some("km²"),
            Attribute::Gdp => Some("billion"),
            Attribute::Density => Some("inhab/km²"),
            _ => None,
        }
    }

    /// True for the attributes filled in by the deriver.
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(
            self,
            Attribute::Density | Attribute::GdpPerCapita | Attribute::PowerScore
        )
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when text does not name an attribute.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown attribute `{0}` (expected a name or a code from 1 to 7)")]
pub struct AttributeParseError(pub String);

impl FromStr for Attribute {
    type Err = AttributeParseError;

    /// Accepts menu codes (`"5"`) and names in any case, with `-`, `_` or
    /// spaces as separators (`"gdp-per-capita"`, `"Super Power"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code).ok_or_else(|| AttributeParseError(s.to_string()));
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "population" => Ok(Attribute::Population),
            "area" => Ok(Attribute::Area),
            "gdp" => Ok(Attribute::Gdp),
            "landmarks" | "tourist-attractions" => Ok(Attribute::Landmarks),
            "density" | "population-density" => Ok(Attribute::Density),
            "gdp-per-capita" => Ok(Attribute::GdpPerCapita),
            "power" | "power-score" | "super-power" => Ok(Attribute::PowerScore),
            _ => Err(AttributeParseError(s.to_string())),
        }
    }
}
