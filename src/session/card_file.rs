//! Card pairs supplied as JSON instead of typed at the prompt.
//!
//! ```json
//! {
//!   "first":  { "code": "A01", "population": 1000, "area": 10.0, "gdp": 5.0, "landmarks": 2 },
//!   "second": { "code": "B02", "population": 2000, "area": 10.0, "gdp": 3.0, "landmarks": 1 }
//! }
//! ```
//!
//! Derived fields present in the document are ignored. Card codes are
//! checked the same way as typed ones.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::prompt::InputError;
use crate::cards::Card;

/// The two cards of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPair {
    pub first: Card,
    pub second: Card,
}

impl CardPair {
    pub fn new(first: Card, second: Card) -> Self {
        Self { first, second }
    }

    /// Parse a pair from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a pair from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InputError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a pair from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIR: &str = r#"{
        "first":  { "code": "A01", "population": 1000, "area": 10.0, "gdp": 5.0, "landmarks": 2 },
        "second": { "code": "B02", "population": 2000, "area": 10.0, "gdp": 3.0, "landmarks": 1, "density": 1.0 }
    }"#;

    #[test]
    fn test_from_json() {
        let pair = CardPair::from_json(PAIR).unwrap();
        assert_eq!(pair.first, Card::new("A01", 1000, 10.0, 5.0, 2));
        assert_eq!(pair.second, Card::new("B02", 2000, 10.0, 3.0, 1));
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{ "first": { "code": "A01" }, "second": { "code": "B02" } }"#;
        assert!(matches!(CardPair::from_json(json), Err(InputError::CardFile(_))));
    }

    #[test]
    fn test_negative_population_is_an_error() {
        let json = PAIR.replace("\"population\": 1000", "\"population\": -1");
        assert!(matches!(CardPair::from_json(&json), Err(InputError::CardFile(_))));
    }

    #[test]
    fn test_malformed_code_is_an_error() {
        for code in ["", "TOOLONG", "A 1"] {
            let json = PAIR.replace("\"code\": \"A01\"", &format!("\"code\": \"{code}\""));
            let result = CardPair::from_json(&json);
            assert!(matches!(result, Err(InputError::CardFile(_))), "{code:?}");
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = CardPair::load("/nonexistent/super-trunfo/cards.json");
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
