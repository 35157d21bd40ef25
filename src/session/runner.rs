//! Playing a round.

use std::io::{self, BufRead, Write};

use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::info;

use super::card_file::CardPair;
use super::config::{OutputFormat, SessionConfig};
use super::level::Level;
use super::prompt::{CardPrompter, InputError};
use super::render::Renderer;
use crate::cards::{Card, CardCode};
use crate::compare::{compare_all, ComparisonReport};

/// Error playing a round.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode results: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Both prepared cards of a round and, at the master level, the report.
///
/// Serializes only what the level computed: density and GDP per capita
/// from the adventurer level on, super power at the master level.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    pub level: Level,
    pub first: Card,
    pub second: Card,
    pub report: Option<ComparisonReport>,
}

impl RoundOutcome {
    /// Prepare both cards for `level` and compare them if it calls for it.
    #[must_use]
    pub fn play(level: Level, pair: CardPair) -> Self {
        let first = level.prepare(pair.first);
        let second = level.prepare(pair.second);
        let report = level.compares().then(|| compare_all(&first, &second));

        Self {
            level,
            first,
            second,
            report,
        }
    }
}

impl Serialize for RoundOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RoundView {
            level: self.level,
            first: CardView::new(self.level, &self.first),
            second: CardView::new(self.level, &self.second),
            report: self.report.as_ref(),
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
struct RoundView<'a> {
    level: Level,
    first: CardView<'a>,
    second: CardView<'a>,
    report: Option<&'a ComparisonReport>,
}

#[derive(Serialize)]
struct CardView<'a> {
    code: &'a CardCode,
    population: u64,
    area: f32,
    gdp: f32,
    landmarks: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    density: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gdp_per_capita: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    power_score: Option<f32>,
}

impl<'a> CardView<'a> {
    fn new(level: Level, card: &'a Card) -> Self {
        let derived = level.shows_derived();
        Self {
            code: card.code(),
            population: card.population(),
            area: card.area(),
            gdp: card.gdp(),
            landmarks: card.landmarks(),
            density: derived.then(|| card.density()),
            gdp_per_capita: derived.then(|| card.gdp_per_capita()),
            power_score: level.shows_power().then(|| card.power_score()),
        }
    }
}

/// One round of the game.
#[derive(Clone, Debug, Default)]
pub struct Session {
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play an interactive round.
    ///
    /// Menus and field prompts go to `prompts`; card sheets and results go
    /// to `output`. In text format each card is shown right after it is
    /// registered. In JSON format a single document is written at the end.
    pub fn run<R, P, W>(
        &self,
        input: &mut R,
        prompts: &mut P,
        output: &mut W,
    ) -> Result<RoundOutcome, SessionError>
    where
        R: BufRead,
        P: Write,
        W: Write,
    {
        let mut prompter = CardPrompter::new(input, prompts);

        let level = match self.config.level {
            Some(level) => level,
            None => prompter.read_level()?,
        };
        info!(%level, "starting round");

        let text = self.config.format == OutputFormat::Text;
        let renderer = Renderer::new(level, self.config.precision);

        if text {
            writeln!(output, "{}", level.banner())?;
            writeln!(output)?;
        }

        let first = register(1, level, &renderer, text, &mut prompter, output)?;
        let second = register(2, level, &renderer, text, &mut prompter, output)?;

        let outcome = RoundOutcome {
            level,
            report: level.compares().then(|| compare_all(&first, &second)),
            first,
            second,
        };

        self.finish(&outcome, &renderer, output)?;
        Ok(outcome)
    }

    /// Play a round on cards that were already collected.
    ///
    /// Without a configured level the round is played at
    /// [`Level::Master`], since the pair already holds everything a full
    /// comparison needs.
    pub fn run_with_cards<W: Write>(
        &self,
        pair: CardPair,
        output: &mut W,
    ) -> Result<RoundOutcome, SessionError> {
        let level = self.config.level.unwrap_or(Level::Master);
        info!(%level, "starting round from card pair");

        let outcome = RoundOutcome::play(level, pair);
        let renderer = Renderer::new(level, self.config.precision);

        if self.config.format == OutputFormat::Text {
            writeln!(output, "{}", level.banner())?;
            writeln!(output)?;
            renderer.card(output, "Card 1", &outcome.first)?;
            renderer.card(output, "Card 2", &outcome.second)?;
        }

        self.finish(&outcome, &renderer, output)?;
        Ok(outcome)
    }

    fn finish<W: Write>(
        &self,
        outcome: &RoundOutcome,
        renderer: &Renderer,
        output: &mut W,
    ) -> Result<(), SessionError> {
        match self.config.format {
            OutputFormat::Text => {
                if let Some(report) = &outcome.report {
                    renderer.report(output, report)?;
                }
                writeln!(output, "=== End of Challenge ===")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *output, outcome)?;
                writeln!(output)?;
            }
        }
        output.flush()?;

        if let Some(report) = &outcome.report {
            let tally = report.tally();
            info!(
                first_wins = tally.first_wins,
                second_wins = tally.second_wins,
                ties = tally.ties,
                "round finished"
            );
        } else {
            info!(level = %outcome.level, "round finished");
        }
        Ok(())
    }
}

/// Read one card, prepare it for `level` and, in text format, show it.
fn register<R, P, W>(
    position: u8,
    level: Level,
    renderer: &Renderer,
    text: bool,
    prompter: &mut CardPrompter<'_, R, P>,
    output: &mut W,
) -> Result<Card, SessionError>
where
    R: BufRead,
    P: Write,
    W: Write,
{
    if text {
        writeln!(output, "Registering Card {position}...")?;
        output.flush()?;
    }

    let card = level.prepare(prompter.read_card()?);
    if text {
        renderer.card(output, &format!("Card {position}"), &card)?;
    }
    Ok(card)
}
