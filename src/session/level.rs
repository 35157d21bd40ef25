//! Play levels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::derive::{apply_basic, apply_power};

/// How much of the game a round plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Register and show raw fields only.
    #[default]
    Novice,
    /// Also derive and show density and GDP per capita.
    Adventurer,
    /// Also derive super power and compare every attribute.
    Master,
}

/// Error returned for a level that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("invalid level {0} (expected 1, 2 or 3)")]
    OutOfRange(u8),
    #[error("unrecognized level `{0}`")]
    Unrecognized(String),
}

impl Level {
    /// All levels in menu order.
    pub const ALL: [Level; 3] = [Level::Novice, Level::Adventurer, Level::Master];

    /// Menu choice, 1 through 3.
    #[must_use]
    pub const fn choice(self) -> u8 {
        self as u8 + 1
    }

    /// Look up a level by its menu choice.
    pub fn from_choice(choice: u8) -> Result<Self, LevelError> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)))
            .copied()
            .ok_or(LevelError::OutOfRange(choice))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Level::Novice => "Novice",
            Level::Adventurer => "Adventurer",
            Level::Master => "Master",
        }
    }

    /// Heading printed when the level starts.
    #[must_use]
    pub const fn banner(self) -> &'static str {
        match self {
            Level::Novice => "NOVICE LEVEL - Basic Registration",
            Level::Adventurer => "ADVENTURER LEVEL - Attribute Calculation",
            Level::Master => "MASTER LEVEL - Comparison and Super Power",
        }
    }

    /// Whether density and GDP per capita are derived and shown.
    #[must_use]
    pub const fn shows_derived(self) -> bool {
        !matches!(self, Level::Novice)
    }

    /// Whether super power is derived and shown.
    #[must_use]
    pub const fn shows_power(self) -> bool {
        matches!(self, Level::Master)
    }

    /// Whether the two cards are compared.
    #[must_use]
    pub const fn compares(self) -> bool {
        matches!(self, Level::Master)
    }

    /// Run the derivations this level calls for.
    #[must_use]
    pub fn prepare(self, mut card: Card) -> Card {
        if self.shows_derived() {
            apply_basic(&mut card);
        }
        if self.shows_power() {
            apply_power(&mut card);
        }
        card
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LevelError;

    /// Accepts the menu choice (`"2"`) or the level name in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(choice) = trimmed.parse::<u8>() {
            return Self::from_choice(choice);
        }

        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LevelError::Unrecognized(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices() {
        for level in Level::ALL {
            assert_eq!(Level::from_choice(level.choice()), Ok(level));
        }
        assert_eq!(Level::from_choice(0), Err(LevelError::OutOfRange(0)));
        assert_eq!(Level::from_choice(4), Err(LevelError::OutOfRange(4)));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1".parse::<Level>(), Ok(Level::Novice));
        assert_eq!(" 3 ".parse::<Level>(), Ok(Level::Master));
        assert_eq!("adventurer".parse::<Level>(), Ok(Level::Adventurer));
        assert_eq!("9".parse::<Level>(), Err(LevelError::OutOfRange(9)));
        assert_eq!(
            "expert".parse::<Level>(),
            Err(LevelError::Unrecognized("expert".to_string()))
        );
    }

    #[test]
    fn test_visibility() {
        assert!(!Level::Novice.shows_derived());
        assert!(!Level::Novice.shows_power());
        assert!(!Level::Novice.compares());

        assert!(Level::Adventurer.shows_derived());
        assert!(!Level::Adventurer.shows_power());
        assert!(!Level::Adventurer.compares());

        assert!(Level::Master.shows_derived());
        assert!(Level::Master.shows_power());
        assert!(Level::Master.compares());
    }

    #[test]
    fn test_prepare_per_level() {
        let raw = Card::new("A01", 1000, 10.0, 5.0, 2);

        let novice = Level::Novice.prepare(raw.clone());
        assert_eq!(novice, raw);

        let adventurer = Level::Adventurer.prepare(raw.clone());
        assert_eq!(adventurer.density(), 100.0);
        assert_eq!(adventurer.power_score(), 0.0);

        let master = Level::Master.prepare(raw);
        assert_eq!(master.density(), 100.0);
        assert!(master.power_score() > 1117.0);
    }
}
