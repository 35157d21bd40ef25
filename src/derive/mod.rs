//! Attribute derivation.
//!
//! Two steps, callable in sequence:
//!
//! - **Basic**: population density and GDP per capita
//! - **Power**: the super power score, summed from every other attribute
//!
//! The power step reads whatever density and GDP per capita the card
//! currently holds. Running it on an underived card sums zeros for those
//! terms rather than failing.
//!
//! Every division is zero-guarded: a divisor that is not strictly positive
//! yields exactly `0.0`.

pub mod deriver;

pub use deriver::{apply_basic, apply_power, derive_all, derive_basic, derive_power, inverse_density};
