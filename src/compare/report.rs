//! Results of a full comparison round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::verdict::Verdict;
use crate::cards::Attribute;

/// One attribute's values and verdict.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeOutcome {
    pub attribute: Attribute,
    /// Value read from the first card.
    pub first: f32,
    /// Value read from the second card.
    pub second: f32,
    pub verdict: Verdict,
}

/// Win counts across a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
}

impl Tally {
    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::FirstWins => self.first_wins += 1,
            Verdict::SecondWins => self.second_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
    }
}

/// Outcomes of comparing two cards attribute by attribute.
///
/// Produced by [`compare_all`](super::compare_all); outcomes are kept in
/// [`Attribute::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    outcomes: SmallVec<[AttributeOutcome; 7]>,
}

impl ComparisonReport {
    pub(crate) fn new(outcomes: SmallVec<[AttributeOutcome; 7]>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[AttributeOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeOutcome> {
        self.outcomes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcome for a single attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeOutcome> {
        self.outcomes.iter().find(|o| o.attribute == attribute)
    }

    /// Verdict for a single attribute.
    #[must_use]
    pub fn verdict(&self, attribute: Attribute) -> Option<Verdict> {
        self.get(attribute).map(|o| o.verdict)
    }

    /// Count wins for each side and ties.
    #[must_use]
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for outcome in &self.outcomes {
            tally.record(outcome.verdict);
        }
        tally
    }
}
