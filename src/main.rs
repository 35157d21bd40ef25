use std::io::{self, stderr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super_trunfo::{CardPair, Level, OutputFormat, Session, SessionConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Super Trunfo - Countries card registration and comparison")]
struct Cli {
    /// Level to play: 1 (novice), 2 (adventurer) or 3 (master).
    /// Shows the level menu when omitted.
    #[arg(long, value_parser = parse_level)]
    level: Option<Level>,

    /// JSON file with the two cards, instead of typing them in
    #[arg(long)]
    cards: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Decimal places for fractional values
    #[arg(long, default_value_t = 2)]
    precision: usize,
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|err| format!("{err}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Stderr only; stdout carries the game.
    if let Err(err) = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr).with_target(false))
        .with(env_filter)
        .try_init()
    {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = SessionConfig::default()
        .with_format(cli.format)
        .with_precision(cli.precision);
    if let Some(level) = cli.level {
        config = config.with_level(level);
    }
    let session = Session::new(config);

    let mut output = io::stdout();
    match cli.cards {
        Some(path) => {
            let pair = CardPair::load(&path)
                .with_context(|| format!("loading cards from {}", path.display()))?;
            session.run_with_cards(pair, &mut output)?;
        }
        None => {
            let mut input = io::stdin().lock();
            // Keep stdout clean for the JSON document.
            match cli.format {
                OutputFormat::Text => session.run(&mut input, &mut io::stdout(), &mut output)?,
                OutputFormat::Json => session.run(&mut input, &mut io::stderr(), &mut output)?,
            };
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["super-trunfo"]).unwrap();
        assert_eq!(cli.level, None);
        assert_eq!(cli.cards, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.precision, 2);
    }

    #[test]
    fn test_level_by_choice_or_name() {
        let cli = Cli::try_parse_from(["super-trunfo", "--level", "3"]).unwrap();
        assert_eq!(cli.level, Some(Level::Master));

        let cli = Cli::try_parse_from(["super-trunfo", "--level", "adventurer"]).unwrap();
        assert_eq!(cli.level, Some(Level::Adventurer));
    }

    #[test]
    fn test_bad_level_is_rejected() {
        assert!(Cli::try_parse_from(["super-trunfo", "--level", "4"]).is_err());
        assert!(Cli::try_parse_from(["super-trunfo", "--level", "expert"]).is_err());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "super-trunfo",
            "--cards",
            "round.json",
            "--format",
            "json",
            "--precision",
            "4",
        ])
        .unwrap();

        assert_eq!(cli.cards, Some(PathBuf::from("round.json")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.precision, 4);
    }

    #[test]
    fn test_bad_format_and_precision_are_rejected() {
        assert!(Cli::try_parse_from(["super-trunfo", "--format", "yaml"]).is_err());
        assert!(Cli::try_parse_from(["super-trunfo", "--precision", "-1"]).is_err());
    }
}
