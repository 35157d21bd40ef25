//! Derivation tests.
//!
//! These tests verify the zero-guarded derived attributes:
//! - Density and GDP per capita from raw fields
//! - Super power summed from every other attribute
//! - The ordering dependency between the two steps

use proptest::prelude::*;
use super_trunfo::{derive_all, derive_basic, derive_power, inverse_density, Card};

// =============================================================================
// Worked Examples
// =============================================================================

/// Worked example: the two reference cards.
#[test]
fn test_reference_cards() {
    let a = derive_basic(Card::new("A01", 1000, 10.0, 5.0, 2));
    let b = derive_basic(Card::new("B02", 2000, 10.0, 3.0, 1));

    assert_eq!(a.density(), 100.0);
    assert_eq!(a.gdp_per_capita(), 0.005);
    assert_eq!(b.density(), 200.0);
}

/// A card with no area has zero density and a finite super power.
#[test]
fn test_zero_area_card() {
    let c = derive_basic(Card::new("C03", 500, 0.0, 1.0, 0));
    assert_eq!(c.density(), 0.0);
    assert_eq!(inverse_density(c.density()), 0.0);

    let c = derive_power(c);
    assert!(c.power_score().is_finite());

    // Inverse density contributes nothing.
    let without_inverse = 500.0 + 0.0 + 1.0 + 0.0 + c.density() + c.gdp_per_capita();
    assert_eq!(c.power_score(), without_inverse);
}

// =============================================================================
// Derivation Order
// =============================================================================

/// Super power on an underived card sums zeros for the derived terms.
#[test]
fn test_power_before_basic() {
    let raw = Card::new("A01", 1000, 10.0, 5.0, 2);

    let early = derive_power(raw.clone());
    let proper = derive_all(raw);

    assert_eq!(early.power_score(), 1017.0);
    assert!(proper.power_score() > early.power_score());
}

/// Deriving again after a basic pass picks up the current values.
#[test]
fn test_power_after_late_basic() {
    let early = derive_power(Card::new("A01", 1000, 10.0, 5.0, 2));
    let fixed = derive_power(derive_basic(early.clone()));

    assert_eq!(early.power_score(), 1017.0);
    assert_eq!(fixed, derive_all(Card::new("A01", 1000, 10.0, 5.0, 2)));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn density_is_zero_without_positive_area(
        population in any::<u64>(),
        area in -1.0e6f32..=0.0,
        gdp in 0.0f32..1.0e6,
    ) {
        let card = derive_basic(Card::new("P01", population, area, gdp, 0));
        prop_assert_eq!(card.density(), 0.0);
    }

    #[test]
    fn gdp_per_capita_is_zero_without_population(
        area in 0.0f32..1.0e6,
        gdp in -1.0e6f32..1.0e6,
        landmarks in any::<u32>(),
    ) {
        let card = derive_basic(Card::new("P02", 0, area, gdp, landmarks));
        prop_assert_eq!(card.gdp_per_capita(), 0.0);
    }

    #[test]
    fn inverse_density_is_zero_for_non_positive(density in -1.0e9f32..=0.0) {
        prop_assert_eq!(inverse_density(density), 0.0);
    }

    #[test]
    fn derived_values_are_finite(
        population in 0u64..10_000_000_000,
        area in prop_oneof![Just(0.0f32), 0.001f32..1.0e7],
        gdp in 0.0f32..1.0e5,
        landmarks in 0u32..10_000,
    ) {
        let card = derive_all(Card::new("P03", population, area, gdp, landmarks));
        prop_assert!(card.density().is_finite());
        prop_assert!(card.gdp_per_capita().is_finite());
        prop_assert!(card.power_score().is_finite());
    }

    #[test]
    fn raw_fields_survive_derivation(
        population in any::<u64>(),
        area in -1.0e6f32..1.0e6,
        gdp in -1.0e6f32..1.0e6,
        landmarks in any::<u32>(),
    ) {
        let card = derive_all(Card::new("P04", population, area, gdp, landmarks));
        prop_assert_eq!(card.population(), population);
        prop_assert_eq!(card.area(), area);
        prop_assert_eq!(card.gdp(), gdp);
        prop_assert_eq!(card.landmarks(), landmarks);
    }
}
