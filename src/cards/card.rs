//! The card record.
//!
//! A `Card` holds four raw values supplied by the player (population, area,
//! GDP, tourist attractions) and three derived values. The derived values
//! can be read but not written from outside the crate; see
//! [`derive_basic`](crate::derive::derive_basic) and
//! [`derive_power`](crate::derive::derive_power).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest card code accepted, matching the printed `A01` form.
pub const MAX_CODE_LEN: usize = 3;

/// Short code printed on a card (e.g. `A01`, `B02`).
///
/// A code is 1 to [`MAX_CODE_LEN`] characters with no whitespace. Codes
/// read from text or deserialized go through [`CardCode::parse`]; `new` and
/// `From<&str>` are unchecked and meant for literals.
///
/// Uniqueness is the caller's concern; the core never looks codes up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardCode(String);

/// Error returned when text is not a valid card code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card code `{0}` (expected 1 to 3 characters without spaces)")]
pub struct CardCodeError(pub String);

impl CardCode {
    /// Create a new card code without checking its form.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Parse a card code, rejecting empty, overlong or spaced text.
    pub fn parse(text: &str) -> Result<Self, CardCodeError> {
        Self::try_from(text.to_string())
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl TryFrom<String> for CardCode {
    type Error = CardCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let len = s.chars().count();
        if len == 0 || len > MAX_CODE_LEN || s.chars().any(char::is_whitespace) {
            return Err(CardCodeError(s));
        }
        Ok(Self(s))
    }
}

impl From<CardCode> for String {
    fn from(code: CardCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A country card.
///
/// Derived fields are skipped on deserialization, so a card read from a file
/// always starts underived regardless of what the file contains.
///
/// ## Example
///
/// ```
/// use super_trunfo::{derive_basic, Card};
///
/// let card = Card::new("A01", 1000, 10.0, 5.0, 2);
/// assert_eq!(card.density(), 0.0);
///
/// let card = derive_basic(card);
/// assert_eq!(card.density(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub(crate) code: CardCode,

    /// Inhabitants.
    pub(crate) population: u64,

    /// Area in km².
    pub(crate) area: f32,

    /// GDP in billions.
    pub(crate) gdp: f32,

    /// Number of tourist attractions.
    pub(crate) landmarks: u32,

    #[serde(skip_deserializing)]
    pub(crate) density: f32,

    #[serde(skip_deserializing)]
    pub(crate) gdp_per_capita: f32,

    #[serde(skip_deserializing)]
    pub(crate) power_score: f32,
}

impl Card {
    /// Create a card from its raw fields. Derived fields start at zero.
    pub fn new(
        code: impl Into<CardCode>,
        population: u64,
        area: f32,
        gdp: f32,
        landmarks: u32,
    ) -> Self {
        Self {
            code: code.into(),
            population,
            area,
            gdp,
            landmarks,
            density: 0.0,
            gdp_per_capita: 0.0,
            power_score: 0.0,
        }
    }

    #[must_use]
    pub fn code(&self) -> &CardCode {
        &self.code
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Area in km².
    #[must_use]
    pub fn area(&self) -> f32 {
        self.area
    }

    /// GDP in billions.
    #[must_use]
    pub fn gdp(&self) -> f32 {
        self.gdp
    }

    /// Number of tourist attractions.
    #[must_use]
    pub fn landmarks(&self) -> u32 {
        self.landmarks
    }

    /// Inhabitants per km², or `0.0` until derived.
    #[must_use]
    pub fn density(&self) -> f32 {
        self.density
    }

    /// GDP divided by population, or `0.0` until derived.
    #[must_use]
    pub fn gdp_per_capita(&self) -> f32 {
        self.gdp_per_capita
    }

    /// Composite super power score, or `0.0` until derived.
    #[must_use]
    pub fn power_score(&self) -> f32 {
        self.power_score
    }
}
