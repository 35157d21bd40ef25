//! Card system: the card record and its attribute selectors.
//!
//! ## Key Types
//!
//! - `CardCode`: Short identifier printed on the card (e.g. `A01`)
//! - `Card`: Raw country data plus the derived fields
//! - `Attribute`: One of the seven comparable attributes
//!
//! Raw fields are fixed at construction. Derived fields start at zero and
//! are filled in by the `derive` module.

pub mod attributes;
pub mod card;

pub use attributes::{Attribute, AttributeParseError};
pub use card::{Card, CardCode, CardCodeError, MAX_CODE_LEN};
