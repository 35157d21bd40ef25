//! Reading cards and level choices from a line-oriented input.
//!
//! Each field is one line. Prompts are written (and flushed) before every
//! read so an interactive terminal shows them in time.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use super::level::Level;
use crate::cards::{Card, CardCode, CardCodeError};

/// Error reading a card or a level choice.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before {field} was entered")]
    UnexpectedEof { field: &'static str },

    #[error(transparent)]
    InvalidCode(#[from] CardCodeError),

    #[error("invalid {field} `{value}`: expected {expected}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("invalid card file: {0}")]
    CardFile(#[from] serde_json::Error),
}

/// Prompts for and parses card fields.
pub struct CardPrompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> CardPrompter<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }

    /// Register one card: code, population, area, GDP, tourist attractions.
    pub fn read_card(&mut self) -> Result<Card, InputError> {
        writeln!(self.output, "=== CARD REGISTRATION ===")?;

        let code = CardCode::parse(&self.read_field("card code", "Card code (e.g. A01): ")?)?;
        let population = parse_count("population", &self.read_field("population", "Population: ")?)?;
        let area = parse_real("area", &self.read_field("area", "Area (km²): ")?)?;
        let gdp = parse_real("GDP", &self.read_field("GDP", "GDP (billions): ")?)?;
        let landmarks = parse_count(
            "tourist attractions",
            &self.read_field("tourist attractions", "Tourist attractions: ")?,
        )?;

        writeln!(self.output, "Registration complete!")?;
        writeln!(self.output)?;

        Ok(Card::new(code, population, area, gdp, landmarks))
    }

    /// Show the level menu and read a choice.
    ///
    /// An unknown choice falls back to [`Level::Novice`] with a notice; only
    /// missing input or I/O failures are errors.
    pub fn read_level(&mut self) -> Result<Level, InputError> {
        writeln!(self.output, "=== SUPER TRUNFO - COUNTRIES - CARD REGISTRATION ===")?;
        writeln!(self.output, "Choose the level to run:")?;
        for level in Level::ALL {
            writeln!(self.output, "{} - {}", level.choice(), level.name())?;
        }

        let answer = self.read_field("level", "Level: ")?;
        match answer.parse::<Level>() {
            Ok(level) => Ok(level),
            Err(err) => {
                warn!(%err, "falling back to novice level");
                writeln!(self.output, "Invalid level! Running Novice by default.")?;
                Ok(Level::Novice)
            }
        }
    }

    fn read_field(&mut self, field: &'static str, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof { field });
        }
        Ok(line.trim().to_string())
    }
}

fn parse_count<T: FromStr>(field: &'static str, text: &str) -> Result<T, InputError> {
    text.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: text.to_string(),
        expected: "a non-negative whole number",
    })
}

fn parse_real(field: &'static str, text: &str) -> Result<f32, InputError> {
    match text.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            field,
            value: text.to_string(),
            expected: "a finite number",
        }),
    }
}
