//! # Quantity Parser
//!
//! Turns free-text ingredient measures ("1 1/2 cups", "200g", "½ tsp",
//! "a pinch") into a [`ParsedQuantity`]. Parsing never fails: text without a
//! recognizable amount defaults to one of whatever unit the text names, and
//! empty text defaults to one discrete item.
//!
//! ## Usage
//!
//! ```rust
//! use pantry_planner::quantity::parse_measure;
//! use pantry_planner::units::Unit;
//!
//! let parsed = parse_measure("1 1/2 tbsp");
//! assert_eq!(parsed.amount, 1.5);
//! assert_eq!(parsed.unit, Unit::Tablespoons);
//! ```

use crate::units::{normalize_unit, Unit};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A structured amount + canonical unit, derived from measure text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    /// Non-negative amount
    pub amount: f64,
    /// Canonical unit
    pub unit: Unit,
    /// The text this quantity was derived from
    pub original_text: String,
}

/// Unicode vulgar fractions, checked in this order
const VULGAR_FRACTIONS: &[(char, f64)] = &[
    ('½', 0.5),
    ('⅓', 0.333),
    ('⅔', 0.667),
    ('¼', 0.25),
    ('¾', 0.75),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 0.167),
    ('⅚', 0.833),
];

// Mixed fraction, simple fraction, or decimal, followed by the unit text
const NUMERIC_PREFIX_PATTERN: &str =
    r"(?s)^(\d+\s+\d+\s*/\s*\d+|\d+\s*/\s*\d+|\d+\.?\d*)\s*(.*)$";

lazy_static! {
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(NUMERIC_PREFIX_PATTERN).expect("Numeric prefix pattern should be valid");
    static ref SIMPLE_FRACTION: Regex =
        Regex::new(r"^(\d+)\s*/\s*(\d+)$").expect("Simple fraction pattern should be valid");
    static ref MIXED_FRACTION: Regex = Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)$")
        .expect("Mixed fraction pattern should be valid");
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^\d+(?:\.\d+)?").expect("Leading number pattern should be valid");
}

impl ParsedQuantity {
    /// Build a quantity from an amount and an already-canonical unit
    pub fn new(amount: f64, unit: Unit, original_text: &str) -> Self {
        Self {
            amount,
            unit,
            original_text: original_text.to_string(),
        }
    }

    /// Build a quantity from a stored amount and free-text unit
    pub fn from_amount_and_unit(amount: f64, raw_unit: &str) -> Self {
        Self {
            amount,
            unit: normalize_unit(raw_unit),
            original_text: format!("{} {}", amount, raw_unit),
        }
    }

    /// Express this quantity's amount in `target`, if the units are compatible
    pub fn amount_in(&self, target: &Unit) -> Option<f64> {
        self.unit.convert(self.amount, target)
    }
}

impl fmt::Display for ParsedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Parse a measure string like "1 cup", "200g", "2 1/2 tbsp" or "¾ cup"
pub fn parse_measure(text: &str) -> ParsedQuantity {
    let original = text.trim();
    if original.is_empty() {
        return ParsedQuantity::new(1.0, Unit::Count, original);
    }

    let (amount, unit_text) = split_vulgar_fraction(original)
        .or_else(|| split_numeric_prefix(original))
        .unwrap_or_else(|| {
            trace!("No amount found in '{}', assuming 1", original);
            (1.0, original)
        });

    let unit = if unit_text.is_empty() {
        Unit::Count
    } else {
        normalize_unit(unit_text)
    };

    debug!("Parsed measure '{}' -> {} {}", original, amount, unit);
    ParsedQuantity::new(amount, unit, original)
}

/// Split "1½ cups" into (1.5, "cups") when a vulgar fraction glyph is present
fn split_vulgar_fraction(text: &str) -> Option<(f64, &str)> {
    VULGAR_FRACTIONS.iter().find_map(|&(glyph, value)| {
        let idx = text.find(glyph)?;
        let before = text[..idx].trim();
        let after = text[idx + glyph.len_utf8()..].trim();
        let whole = leading_number(before).unwrap_or(0.0);
        Some((whole + value, after))
    })
}

/// Split a leading mixed fraction, simple fraction or decimal from the unit text
fn split_numeric_prefix(text: &str) -> Option<(f64, &str)> {
    let captures = NUMERIC_PREFIX.captures(text)?;
    let number_text = captures.get(1)?.as_str().trim();
    let rest = captures.get(2).map_or("", |m| m.as_str().trim());

    let amount = parse_fraction(number_text)
        .or_else(|| leading_number(number_text))
        .unwrap_or(1.0);

    Some((amount, rest))
}

/// Parse "3/4" or "1 1/2"; `None` for anything else or a zero denominator
fn parse_fraction(text: &str) -> Option<f64> {
    if let Some(captures) = SIMPLE_FRACTION.captures(text) {
        let numerator: f64 = captures[1].parse().ok()?;
        let denominator: f64 = captures[2].parse().ok()?;
        return (denominator != 0.0).then(|| numerator / denominator);
    }

    if let Some(captures) = MIXED_FRACTION.captures(text) {
        let whole: f64 = captures[1].parse().ok()?;
        let numerator: f64 = captures[2].parse().ok()?;
        let denominator: f64 = captures[3].parse().ok()?;
        return (denominator != 0.0).then(|| whole + numerator / denominator);
    }

    None
}

/// Round to two decimals, the precision used for reported amounts
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER.find(text)?.as_str().parse().ok()
}
