//! Session configuration.

use serde::{Deserialize, Serialize};

use super::level::Level;

/// How round results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable card sheets and result lines.
    #[default]
    Text,
    /// A single JSON document with both cards and the report.
    Json,
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Level to play. `None` asks the player through the level menu.
    pub level: Option<Level>,

    /// Output format for cards and results.
    pub format: OutputFormat,

    /// Decimal places for fractional values in text output.
    pub precision: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: OutputFormat::Text,
            precision: 2,
        }
    }
}

impl SessionConfig {
    /// Play a fixed level instead of showing the menu.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
