//! Comparison verdicts.

use serde::{Deserialize, Serialize};

/// Outcome of comparing one attribute between two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The first card wins.
    FirstWins,
    /// The second card wins.
    SecondWins,
    /// Neither card wins.
    Tie,
}

impl Verdict {
    /// The verdict with the two cards swapped.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Verdict::FirstWins => Verdict::SecondWins,
            Verdict::SecondWins => Verdict::FirstWins,
            Verdict::Tie => Verdict::Tie,
        }
    }

    /// 1-based position of the winning card, or `None` on a tie.
    #[must_use]
    pub const fn winner(self) -> Option<u8> {
        match self {
            Verdict::FirstWins => Some(1),
            Verdict::SecondWins => Some(2),
            Verdict::Tie => None,
        }
    }

    /// Classic score-sheet code: `1` when the first card wins, `0` when the
    /// second does, `None` on a tie.
    #[must_use]
    pub const fn result_code(self) -> Option<u8> {
        match self {
            Verdict::FirstWins => Some(1),
            Verdict::SecondWins => Some(0),
            Verdict::Tie => None,
        }
    }

    #[must_use]
    pub const fn is_tie(self) -> bool {
        matches!(self, Verdict::Tie)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::FirstWins => write!(f, "Card 1 wins"),
            Verdict::SecondWins => write!(f, "Card 2 wins"),
            Verdict::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip() {
        assert_eq!(Verdict::FirstWins.flip(), Verdict::SecondWins);
        assert_eq!(Verdict::SecondWins.flip(), Verdict::FirstWins);
        assert_eq!(Verdict::Tie.flip(), Verdict::Tie);
    }

    #[test]
    fn test_winner_and_result_code() {
        assert_eq!(Verdict::FirstWins.winner(), Some(1));
        assert_eq!(Verdict::SecondWins.winner(), Some(2));
        assert_eq!(Verdict::Tie.winner(), None);

        assert_eq!(Verdict::FirstWins.result_code(), Some(1));
        assert_eq!(Verdict::SecondWins.result_code(), Some(0));
        assert_eq!(Verdict::Tie.result_code(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::FirstWins.to_string(), "Card 1 wins");
        assert_eq!(Verdict::Tie.to_string(), "Tie");
        assert!(Verdict::Tie.is_tie());
        assert!(!Verdict::SecondWins.is_tie());
    }
}
