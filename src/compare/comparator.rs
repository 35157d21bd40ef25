//! Attribute comparison between two cards.

use smallvec::SmallVec;
use tracing::debug;

use super::report::{AttributeOutcome, ComparisonReport};
use super::rules::rule_for;
use super::verdict::Verdict;
use crate::cards::{Attribute, Card};

/// Compare one attribute of two cards.
///
/// Reads the attribute from each card as `f32` and applies that attribute's
/// direction. Pure and total over [`Attribute`].
///
/// ```
/// use super_trunfo::{compare_attribute, derive_basic, Attribute, Card, Verdict};
///
/// let a = derive_basic(Card::new("A01", 1000, 10.0, 5.0, 2));
/// let b = derive_basic(Card::new("B02", 2000, 10.0, 3.0, 1));
///
/// assert_eq!(compare_attribute(&a, &b, Attribute::Population), Verdict::SecondWins);
/// // Lower density wins.
/// assert_eq!(compare_attribute(&a, &b, Attribute::Density), Verdict::FirstWins);
/// ```
#[must_use]
pub fn compare_attribute(first: &Card, second: &Card, attribute: Attribute) -> Verdict {
    outcome(first, second, attribute).verdict
}

/// Compare every attribute, in [`Attribute::ALL`] order.
#[must_use]
pub fn compare_all(first: &Card, second: &Card) -> ComparisonReport {
    let outcomes: SmallVec<[AttributeOutcome; 7]> = Attribute::ALL
        .iter()
        .map(|&attribute| outcome(first, second, attribute))
        .collect();

    ComparisonReport::new(outcomes)
}

fn outcome(first: &Card, second: &Card, attribute: Attribute) -> AttributeOutcome {
    let rule = rule_for(attribute);
    let first_value = rule.value(first);
    let second_value = rule.value(second);
    let verdict = rule.direction.decide(first_value, second_value);

    debug!(
        first = %first.code(),
        second = %second.code(),
        attribute = attribute.label(),
        first_value,
        second_value,
        ?verdict,
        "compared attribute"
    );

    AttributeOutcome {
        attribute,
        first: first_value,
        second: second_value,
        verdict,
    }
}
