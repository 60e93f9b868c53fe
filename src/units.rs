//! # Unit System
//!
//! Canonical unit vocabulary for pantry and recipe quantities. Every raw unit
//! string ("Tablespoons", "lbs.", "fl oz") normalizes to a [`Unit`], and units
//! in the same [`UnitCategory`] convert through a per-category base unit
//! (grams for weight, milliliters for volume, the unit itself for count).
//!
//! Strings that are not in the alias table pass through unchanged as
//! [`Unit::Other`], so a novel unit never breaks downstream code. A typo does
//! become its own distinct unit.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_planner::units::{convert_units, normalize_unit, Unit};
//!
//! assert_eq!(normalize_unit("Tablespoons"), Unit::Tablespoons);
//! let ml = convert_units(1.0, "cup", "ml").unwrap();
//! assert!((ml - 236.588).abs() < 1e-9);
//! assert_eq!(convert_units(100.0, "g", "cup"), None);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;
use tracing::trace;

/// Canonical measurement units
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Unit {
    // Weight units
    /// Grams (weight base unit)
    Grams,
    /// Kilograms
    Kilograms,
    /// Avoirdupois ounces
    Ounces,
    /// Pounds
    Pounds,

    // Volume units
    /// Milliliters (volume base unit)
    Milliliters,
    /// Liters
    Liters,
    /// US cups
    Cups,
    /// Tablespoons
    Tablespoons,
    /// Teaspoons
    Teaspoons,
    /// US fluid ounces
    FluidOunces,
    /// US gallons
    Gallons,
    /// US pints
    Pints,
    /// US quarts
    Quarts,

    // Count-like units
    /// Discrete items
    Count,
    /// Heads (lettuce, garlic)
    Heads,
    /// Bunches
    Bunches,
    /// Cloves
    Cloves,
    /// Slices
    Slices,
    /// Cans
    Cans,
    /// Bottles
    Bottles,
    /// Bags
    Bags,
    /// Boxes
    Boxes,
    /// Packages
    Packages,
    /// Sticks
    Sticks,
    /// Stalks
    Stalks,
    /// Sprigs
    Sprigs,

    /// Pinches and dashes
    Pinches,

    /// Unrecognized unit text, kept as-is
    Other(String),
}

/// Measurement family a unit belongs to. Conversion only happens within one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Weight,
    Volume,
    Count,
    Other,
}

lazy_static! {
    /// Every known alias mapped to its canonical unit
    static ref UNIT_ALIASES: HashMap<&'static str, Unit> = {
        let mut map = HashMap::new();

        // Weight units
        map.insert("g", Unit::Grams);
        map.insert("gram", Unit::Grams);
        map.insert("grams", Unit::Grams);
        map.insert("kg", Unit::Kilograms);
        map.insert("kilogram", Unit::Kilograms);
        map.insert("kilograms", Unit::Kilograms);
        map.insert("oz", Unit::Ounces);
        map.insert("ounce", Unit::Ounces);
        map.insert("ounces", Unit::Ounces);
        map.insert("lb", Unit::Pounds);
        map.insert("lbs", Unit::Pounds);
        map.insert("pound", Unit::Pounds);
        map.insert("pounds", Unit::Pounds);

        // Volume units
        map.insert("ml", Unit::Milliliters);
        map.insert("milliliter", Unit::Milliliters);
        map.insert("milliliters", Unit::Milliliters);
        map.insert("millilitre", Unit::Milliliters);
        map.insert("millilitres", Unit::Milliliters);
        map.insert("l", Unit::Liters);
        map.insert("liter", Unit::Liters);
        map.insert("liters", Unit::Liters);
        map.insert("litre", Unit::Liters);
        map.insert("litres", Unit::Liters);
        map.insert("cup", Unit::Cups);
        map.insert("cups", Unit::Cups);
        map.insert("tbsp", Unit::Tablespoons);
        map.insert("tbs", Unit::Tablespoons);
        map.insert("tablespoon", Unit::Tablespoons);
        map.insert("tablespoons", Unit::Tablespoons);
        map.insert("tsp", Unit::Teaspoons);
        map.insert("teaspoon", Unit::Teaspoons);
        map.insert("teaspoons", Unit::Teaspoons);
        map.insert("fl oz", Unit::FluidOunces);
        map.insert("fl_oz", Unit::FluidOunces);
        map.insert("fluid ounce", Unit::FluidOunces);
        map.insert("fluid ounces", Unit::FluidOunces);
        map.insert("gal", Unit::Gallons);
        map.insert("gallon", Unit::Gallons);
        map.insert("gallons", Unit::Gallons);
        map.insert("pint", Unit::Pints);
        map.insert("pints", Unit::Pints);
        map.insert("quart", Unit::Quarts);
        map.insert("quarts", Unit::Quarts);

        // Count units
        map.insert("count", Unit::Count);
        map.insert("piece", Unit::Count);
        map.insert("pieces", Unit::Count);
        map.insert("whole", Unit::Count);
        map.insert("head", Unit::Heads);
        map.insert("heads", Unit::Heads);
        map.insert("bunch", Unit::Bunches);
        map.insert("bunches", Unit::Bunches);
        map.insert("clove", Unit::Cloves);
        map.insert("cloves", Unit::Cloves);
        map.insert("slice", Unit::Slices);
        map.insert("slices", Unit::Slices);
        map.insert("can", Unit::Cans);
        map.insert("cans", Unit::Cans);
        map.insert("bottle", Unit::Bottles);
        map.insert("bottles", Unit::Bottles);
        map.insert("bag", Unit::Bags);
        map.insert("bags", Unit::Bags);
        map.insert("box", Unit::Boxes);
        map.insert("boxes", Unit::Boxes);
        map.insert("package", Unit::Packages);
        map.insert("packages", Unit::Packages);
        map.insert("stick", Unit::Sticks);
        map.insert("sticks", Unit::Sticks);
        map.insert("stalk", Unit::Stalks);
        map.insert("stalks", Unit::Stalks);
        map.insert("sprig", Unit::Sprigs);
        map.insert("sprigs", Unit::Sprigs);

        // Specialized units
        map.insert("pinch", Unit::Pinches);
        map.insert("dash", Unit::Pinches);

        map
    };
}

/// Normalize a raw unit string to its canonical unit
///
/// Lowercases, trims, and strips trailing periods before the alias lookup.
/// Unrecognized text comes back as [`Unit::Other`] holding the cleaned text.
pub fn normalize_unit(raw: &str) -> Unit {
    let lowered = raw.trim().to_lowercase();
    let cleaned = lowered.trim_end_matches('.');

    match UNIT_ALIASES.get(cleaned) {
        Some(unit) => unit.clone(),
        None => {
            trace!("Unit '{}' not in alias table, passing through", cleaned);
            Unit::Other(cleaned.to_string())
        }
    }
}

/// Convert an amount between two raw unit strings
///
/// Returns `None` when either unit is unclassified or the units belong to
/// different categories. No density model exists, so grams never become cups.
pub fn convert_units(amount: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    normalize_unit(from_unit).convert(amount, &normalize_unit(to_unit))
}

impl Unit {
    /// Canonical code for this unit ("g", "fl_oz", "L", ...)
    pub fn code(&self) -> &str {
        match self {
            Unit::Grams => "g",
            Unit::Kilograms => "kg",
            Unit::Ounces => "oz",
            Unit::Pounds => "lb",
            Unit::Milliliters => "ml",
            Unit::Liters => "L",
            Unit::Cups => "cup",
            Unit::Tablespoons => "tbsp",
            Unit::Teaspoons => "tsp",
            Unit::FluidOunces => "fl_oz",
            Unit::Gallons => "gal",
            Unit::Pints => "pint",
            Unit::Quarts => "quart",
            Unit::Count => "count",
            Unit::Heads => "head",
            Unit::Bunches => "bunch",
            Unit::Cloves => "clove",
            Unit::Slices => "slice",
            Unit::Cans => "can",
            Unit::Bottles => "bottle",
            Unit::Bags => "bag",
            Unit::Boxes => "box",
            Unit::Packages => "package",
            Unit::Sticks => "stick",
            Unit::Stalks => "stalk",
            Unit::Sprigs => "sprig",
            Unit::Pinches => "pinch",
            Unit::Other(text) => text,
        }
    }

    /// Category of this unit, `None` for pass-through units
    pub fn category(&self) -> Option<UnitCategory> {
        match self {
            Unit::Grams | Unit::Kilograms | Unit::Ounces | Unit::Pounds => {
                Some(UnitCategory::Weight)
            }
            Unit::Milliliters
            | Unit::Liters
            | Unit::Cups
            | Unit::Tablespoons
            | Unit::Teaspoons
            | Unit::FluidOunces
            | Unit::Gallons
            | Unit::Pints
            | Unit::Quarts => Some(UnitCategory::Volume),
            Unit::Count
            | Unit::Heads
            | Unit::Bunches
            | Unit::Cloves
            | Unit::Slices
            | Unit::Cans
            | Unit::Bottles
            | Unit::Bags
            | Unit::Boxes
            | Unit::Packages
            | Unit::Sticks
            | Unit::Stalks
            | Unit::Sprigs => Some(UnitCategory::Count),
            Unit::Pinches => Some(UnitCategory::Other),
            Unit::Other(_) => None,
        }
    }

    /// Multiplier into the category's base unit
    fn base_factor(&self) -> Option<f64> {
        let factor = match self {
            Unit::Grams => 1.0,
            Unit::Kilograms => 1000.0,
            Unit::Ounces => 28.3495,
            Unit::Pounds => 453.592,
            Unit::Milliliters => 1.0,
            Unit::Liters => 1000.0,
            Unit::Cups => 236.588,
            Unit::Tablespoons => 14.787,
            Unit::Teaspoons => 4.929,
            Unit::FluidOunces => 29.5735,
            Unit::Gallons => 3785.41,
            Unit::Pints => 473.176,
            Unit::Quarts => 946.353,
            Unit::Other(_) => return None,
            // Count-like units and pinches are their own base
            _ => 1.0,
        };
        Some(factor)
    }

    /// Convert `amount` of this unit into `target`
    pub fn convert(&self, amount: f64, target: &Unit) -> Option<f64> {
        if self == target {
            return Some(amount);
        }

        let from_category = self.category()?;
        let to_category = target.category()?;
        if from_category != to_category {
            return None;
        }

        let base_amount = amount * self.base_factor()?;
        Some(base_amount / target.base_factor()?)
    }

    /// Whether an amount in this unit can be expressed in `target`
    pub fn is_compatible_with(&self, target: &Unit) -> bool {
        self == target || (self.category().is_some() && self.category() == target.category())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.code().to_string()
    }
}

impl From<String> for Unit {
    fn from(raw: String) -> Self {
        normalize_unit(&raw)
    }
}

impl From<&str> for Unit {
    fn from(raw: &str) -> Self {
        normalize_unit(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHT: &[&str] = &["g", "kg", "oz", "lb"];
    const VOLUME: &[&str] = &["ml", "L", "cup", "tbsp", "tsp", "fl_oz", "gal", "pint", "quart"];

    #[test]
    fn test_normalize_aliases() {
        assert_eq!(normalize_unit("Tablespoons"), Unit::Tablespoons);
        assert_eq!(normalize_unit("  LBS. "), Unit::Pounds);
        assert_eq!(normalize_unit("fl oz"), Unit::FluidOunces);
        assert_eq!(normalize_unit("l"), Unit::Liters);
        assert_eq!(normalize_unit("dash"), Unit::Pinches);
        assert_eq!(normalize_unit("pieces"), Unit::Count);
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        assert_eq!(normalize_unit("Handful"), Unit::Other("handful".to_string()));
        assert_eq!(normalize_unit("handful.."), Unit::Other("handful".to_string()));
        assert_eq!(normalize_unit("handful").code(), "handful");
        assert_eq!(normalize_unit("handful").category(), None);
    }

    #[test]
    fn test_codes_renormalize_to_themselves() {
        for code in WEIGHT.iter().chain(VOLUME) {
            assert_eq!(normalize_unit(code).code(), *code);
        }
        assert_eq!(normalize_unit("pinch").code(), "pinch");
        assert_eq!(normalize_unit("count").code(), "count");
    }

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert_units(3.0, "cups", "cup"), Some(3.0));
        assert_eq!(convert_units(2.0, "handful", "handful"), Some(2.0));
    }

    #[test]
    fn test_known_factors() {
        let grams = convert_units(1.0, "lb", "g").unwrap();
        assert!((grams - 453.592).abs() < 1e-9);

        let cups = convert_units(473.176, "ml", "cup").unwrap();
        assert!((cups - 2.0).abs() < 1e-3);

        let tsp = convert_units(1.0, "tbsp", "tsp").unwrap();
        assert!((tsp - 3.0).abs() < 0.01);
    }

    #[test]
    fn test_round_trip_within_category() {
        for group in [WEIGHT, VOLUME] {
            for from in group {
                for to in group {
                    let there = convert_units(7.25, from, to).unwrap();
                    let back = convert_units(there, to, from).unwrap();
                    assert!((back - 7.25).abs() < 1e-9, "{from} -> {to} -> {from}");
                }
            }
        }
    }

    #[test]
    fn test_cross_category_is_none() {
        for amount in [0.0, 1.0, 250.0] {
            assert_eq!(convert_units(amount, "g", "cup"), None);
        }
        assert_eq!(convert_units(1.0, "clove", "g"), None);
        assert_eq!(convert_units(1.0, "pinch", "tsp"), None);
        assert_eq!(convert_units(1.0, "handful", "g"), None);
    }

    #[test]
    fn test_count_units_convert_one_to_one() {
        assert_eq!(convert_units(4.0, "clove", "count"), Some(4.0));
        assert_eq!(convert_units(2.0, "bunch", "head"), Some(2.0));
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Unit::FluidOunces).unwrap();
        assert_eq!(json, "\"fl_oz\"");
        let unit: Unit = serde_json::from_str("\"Tablespoon\"").unwrap();
        assert_eq!(unit, Unit::Tablespoons);
    }
}
