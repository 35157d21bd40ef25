//! Text rendering of cards and comparison results.

use std::io::{self, Write};

use super::level::Level;
use crate::cards::{Attribute, Card};
use crate::compare::{value_of, ComparisonReport, Verdict};

/// Writes card sheets and result lines for a level.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    level: Level,
    precision: usize,
}

impl Renderer {
    pub fn new(level: Level, precision: usize) -> Self {
        Self { level, precision }
    }

    /// Attributes shown on a card sheet at this level.
    pub fn visible_attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter().filter(move |attribute| match attribute {
            Attribute::Density | Attribute::GdpPerCapita => self.level.shows_derived(),
            Attribute::PowerScore => self.level.shows_power(),
            _ => true,
        })
    }

    /// Format one attribute's value with its unit.
    pub fn value(&self, attribute: Attribute, card: &Card) -> String {
        let number = match attribute {
            Attribute::Population => card.population().to_string(),
            Attribute::Landmarks => card.landmarks().to_string(),
            _ => format!("{:.*}", self.precision, value_of(attribute, card)),
        };

        match attribute.unit() {
            Some(unit) => format!("{number} {unit}"),
            None => number,
        }
    }

    /// Write a card sheet under `title` (e.g. "Card 1").
    pub fn card<W: Write>(&self, out: &mut W, title: &str, card: &Card) -> io::Result<()> {
        writeln!(out, "{title} (Code: {}):", card.code())?;
        for attribute in self.visible_attributes() {
            writeln!(out, "  {}: {}", attribute.label(), self.value(attribute, card))?;
        }
        writeln!(out)
    }

    /// Write one result line per attribute followed by the tally.
    pub fn report<W: Write>(&self, out: &mut W, report: &ComparisonReport) -> io::Result<()> {
        writeln!(out, "=== COMPARISON RESULTS ===")?;
        for outcome in report.iter() {
            writeln!(
                out,
                "  {}: {}",
                outcome.attribute.label(),
                verdict_text(outcome.verdict)
            )?;
        }

        let tally = report.tally();
        writeln!(
            out,
            "Card 1 won {}, Card 2 won {}, ties {}",
            tally.first_wins, tally.second_wins, tally.ties
        )
    }
}

fn verdict_text(verdict: Verdict) -> String {
    match verdict.result_code() {
        Some(code) => format!("{code} ({verdict})"),
        None => verdict.to_string(),
    }
}
