//! The interactive shell around the core.
//!
//! A session plays one round: register two cards, derive what the level
//! calls for, show both cards and, at the master level, compare them on
//! every attribute.
//!
//! ## Levels
//!
//! | Level        | Derivation         | Comparison |
//! |--------------|--------------------|------------|
//! | `Novice`     | none               | no         |
//! | `Adventurer` | basic              | no         |
//! | `Master`     | basic + super power| all seven  |
//!
//! Levels only decide which core operations run and which fields are shown.
//! The core itself has no notion of a level.

pub mod card_file;
pub mod config;
pub mod level;
pub mod prompt;
pub mod render;
pub mod runner;

pub use card_file::CardPair;
pub use config::{OutputFormat, SessionConfig};
pub use level::{Level, LevelError};
pub use prompt::{CardPrompter, InputError};
pub use render::Renderer;
pub use runner::{RoundOutcome, Session, SessionError};
