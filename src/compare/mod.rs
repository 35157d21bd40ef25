//! Card comparison.
//!
//! ## Key Types
//!
//! - `Direction`: Whether the higher or the lower value wins
//! - `AttributeRule`: Value extractor plus direction for one attribute
//! - `Verdict`: `FirstWins`, `SecondWins` or `Tie`
//! - `ComparisonReport`: Outcomes of a full seven-attribute round
//!
//! ## Ordering
//!
//! Every attribute is "higher wins" except population density, where the
//! sparser card wins. The direction is a field of each table entry in
//! `rules`, so there is exactly one place to audit it.

pub mod comparator;
pub mod report;
pub mod rules;
pub mod verdict;

pub use comparator::{compare_all, compare_attribute};
pub use report::{AttributeOutcome, ComparisonReport, Tally};
pub use rules::{rule_for, value_of, AttributeRule, Direction, RULES};
pub use verdict::Verdict;
