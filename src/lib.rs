//! # super-trunfo
//!
//! Card registration, attribute derivation and head-to-head comparison for
//! the "Super Trunfo - Countries" card game.
//!
//! ## Design Principles
//!
//! 1. **Derived, Never Assigned**: Density, GDP per capita and the super
//!    power score are only ever written by the deriver, from the raw fields
//!    currently on the card.
//!
//! 2. **Zero-Guarded Division**: A divisor that is not strictly positive
//!    yields exactly `0.0`. No derivation fails.
//!
//! 3. **Closed Selectors**: Attributes are a closed enum mapped through a
//!    rule table. Each rule carries its own ordering direction, so the
//!    "lower density wins" inversion is a table entry, not a special case.
//!
//! ## Modules
//!
//! - `cards`: Card record, card codes and attribute selectors
//! - `derive`: Density, GDP per capita and super power derivation
//! - `compare`: Attribute rules, verdicts and comparison reports
//! - `session`: Levels, prompting, rendering and the interactive round

pub mod cards;
pub mod derive;
pub mod compare;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{Attribute, AttributeParseError, Card, CardCode, CardCodeError};

pub use crate::derive::{apply_basic, apply_power, derive_all, derive_basic, derive_power, inverse_density};

pub use crate::compare::{
    compare_all, compare_attribute, value_of,
    AttributeOutcome, AttributeRule, ComparisonReport, Direction, Tally, Verdict,
};

pub use crate::session::{
    CardPair, CardPrompter, InputError, Level, LevelError, OutputFormat, Renderer,
    RoundOutcome, Session, SessionConfig, SessionError,
};
