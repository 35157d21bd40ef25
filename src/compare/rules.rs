//! Per-attribute comparison rules.
//!
//! `RULES` is indexed by [`Attribute::index`]. Each entry pairs a value
//! extractor with the direction that decides the winner.

use serde::{Deserialize, Serialize};

use super::verdict::Verdict;
use crate::cards::{Attribute, Card};

/// Which end of the ordering wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    HigherWins,
    LowerWins,
}

impl Direction {
    /// Decide between two values.
    ///
    /// Anything that is not a strict win for either side is a tie, which
    /// includes exact equality and NaN.
    #[must_use]
    pub fn decide(self, first: f32, second: f32) -> Verdict {
        let (first_wins, second_wins) = match self {
            Direction::HigherWins => (first > second, second > first),
            Direction::LowerWins => (first < second, second < first),
        };

        if first_wins {
            Verdict::FirstWins
        } else if second_wins {
            Verdict::SecondWins
        } else {
            Verdict::Tie
        }
    }
}

/// How one attribute is read and ordered.
#[derive(Clone, Copy, Debug)]
pub struct AttributeRule {
    pub attribute: Attribute,
    /// Reads the comparable value; integers are widened to `f32`.
    pub extract: fn(&Card) -> f32,
    pub direction: Direction,
}

impl AttributeRule {
    /// Read this rule's value from `card`.
    #[must_use]
    pub fn value(&self, card: &Card) -> f32 {
        (self.extract)(card)
    }
}

fn population(card: &Card) -> f32 {
    card.population as f32
}

fn area(card: &Card) -> f32 {
    card.area
}

fn gdp(card: &Card) -> f32 {
    card.gdp
}

fn landmarks(card: &Card) -> f32 {
    card.landmarks as f32
}

fn density(card: &Card) -> f32 {
    card.density
}

fn gdp_per_capita(card: &Card) -> f32 {
    card.gdp_per_capita
}

fn power_score(card: &Card) -> f32 {
    card.power_score
}

/// The comparison table, in [`Attribute::ALL`] order.
pub static RULES: [AttributeRule; 7] = [
    AttributeRule {
        attribute: Attribute::Population,
        extract: population,
        direction: Direction::HigherWins,
    },
    AttributeRule {
        attribute: Attribute::Area,
        extract: area,
        direction: Direction::HigherWins,
    },
    AttributeRule {
        attribute: Attribute::Gdp,
        extract: gdp,
        direction: Direction::HigherWins,
    },
    AttributeRule {
        attribute: Attribute::Landmarks,
        extract: landmarks,
        direction: Direction::HigherWins,
    },
    // Sparser wins.
    AttributeRule {
        attribute: Attribute::Density,
        extract: density,
        direction: Direction::LowerWins,
    },
    AttributeRule {
        attribute: Attribute::GdpPerCapita,
        extract: gdp_per_capita,
        direction: Direction::HigherWins,
    },
    AttributeRule {
        attribute: Attribute::PowerScore,
        extract: power_score,
        direction: Direction::HigherWins,
    },
];

/// Look up the rule for an attribute.
#[must_use]
pub fn rule_for(attribute: Attribute) -> &'static AttributeRule {
    &RULES[attribute.index()]
}

/// Comparable value of `attribute` on `card`.
///
/// Integer attributes are widened to `f32`.
#[must_use]
pub fn value_of(attribute: Attribute, card: &Card) -> f32 {
    rule_for(attribute).value(card)
}
