//! Derivation functions.
//!
//! All arithmetic is `f32`. Population and tourist attractions are widened
//! at the point of use; the stored integers are never touched.

use tracing::debug;

use crate::cards::Card;

/// `1 / density`, or `0.0` when density is not strictly positive.
#[must_use]
pub fn inverse_density(density: f32) -> f32 {
    if density > 0.0 {
        1.0 / density
    } else {
        0.0
    }
}

/// Fill in density and GDP per capita in place.
pub fn apply_basic(card: &mut Card) {
    card.density = if card.area > 0.0 {
        card.population as f32 / card.area
    } else {
        0.0
    };

    card.gdp_per_capita = if card.population > 0 {
        card.gdp / card.population as f32
    } else {
        0.0
    };

    debug!(
        code = %card.code,
        density = card.density,
        gdp_per_capita = card.gdp_per_capita,
        "derived basic attributes"
    );
}

/// Fill in the super power score in place.
///
/// Uses the density and GDP per capita currently on the card.
pub fn apply_power(card: &mut Card) {
    card.power_score = card.population as f32
        + card.area
        + card.gdp
        + card.landmarks as f32
        + card.density
        + card.gdp_per_capita
        + inverse_density(card.density);

    debug!(code = %card.code, power_score = card.power_score, "derived super power");
}

/// Return `card` with density and GDP per capita derived.
///
/// ```
/// use super_trunfo::{derive_basic, Card};
///
/// let card = derive_basic(Card::new("A01", 1000, 10.0, 5.0, 2));
/// assert_eq!(card.density(), 100.0);
/// assert_eq!(card.gdp_per_capita(), 0.005);
/// ```
#[must_use]
pub fn derive_basic(mut card: Card) -> Card {
    apply_basic(&mut card);
    card
}

/// Return `card` with the super power score derived.
///
/// Call [`derive_basic`] first; otherwise density and GDP per capita
/// contribute zero.
#[must_use]
pub fn derive_power(mut card: Card) -> Card {
    apply_power(&mut card);
    card
}

/// Basic derivation followed by super power.
#[must_use]
pub fn derive_all(card: Card) -> Card {
    derive_power(derive_basic(card))
}
