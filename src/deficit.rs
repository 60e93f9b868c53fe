//! # Deficit Analyzer
//!
//! Compares each recipe requirement against pantry stock. The pantry amount
//! is converted into the requirement's unit; when the two units cannot be
//! compared (grams of cheese against "1 pinch"), any recorded stock is
//! assumed to be enough. That branch is tagged
//! [`DeficitBasis::AssumedSufficient`] so callers can tell it apart.

use crate::matcher::IngredientMatcher;
use crate::pantry::PantryItem;
use crate::quantity::ParsedQuantity;
use crate::recipe::{Recipe, RecipeIngredientRequirement};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How a deficit result was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeficitBasis {
    /// No pantry item matched
    Missing,
    /// Pantry stock converted into the required unit
    Converted,
    /// Units were incompatible; stock is treated as sufficient
    AssumedSufficient,
}

/// Sufficiency of one recipe ingredient against the pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDeficit {
    pub ingredient_name: String,
    pub needed: ParsedQuantity,
    /// Matched pantry stock, in the pantry's own unit
    pub have: Option<ParsedQuantity>,
    /// Shortfall in `deficit_unit`, never negative
    pub deficit: f64,
    pub deficit_unit: Unit,
    pub sufficient: bool,
    pub basis: DeficitBasis,
}

impl IngredientDeficit {
    /// Matched but short
    pub fn is_insufficient(&self) -> bool {
        self.have.is_some() && !self.sufficient
    }

    pub fn is_missing(&self) -> bool {
        self.have.is_none()
    }
}

/// Deficit for one requirement; the first matching pantry item wins
pub fn calculate_deficit<M: IngredientMatcher>(
    requirement: &RecipeIngredientRequirement,
    pantry: &[PantryItem],
    matcher: &M,
) -> IngredientDeficit {
    let needed = requirement.quantity.clone();
    let deficit_unit = needed.unit.clone();

    let Some(item) = matcher.find_first(&requirement.name, pantry, |item| item.name.as_str()) else {
        trace!("No pantry match for '{}'", requirement.name);
        return IngredientDeficit {
            ingredient_name: requirement.name.clone(),
            deficit: needed.amount,
            needed,
            have: None,
            deficit_unit,
            sufficient: false,
            basis: DeficitBasis::Missing,
        };
    };

    let have = item.quantity();
    let (deficit, basis) = match have.amount_in(&needed.unit) {
        Some(converted) => ((needed.amount - converted).max(0.0), DeficitBasis::Converted),
        None => {
            debug!(
                "Cannot compare {} with {} for '{}', assuming sufficient",
                have.unit, needed.unit, requirement.name
            );
            (0.0, DeficitBasis::AssumedSufficient)
        }
    };

    IngredientDeficit {
        ingredient_name: requirement.name.clone(),
        needed,
        have: Some(have),
        deficit,
        deficit_unit,
        sufficient: deficit <= 0.0,
        basis,
    }
}

/// One deficit entry per used ingredient slot of `recipe`
pub fn analyze_recipe_deficits<M: IngredientMatcher>(
    recipe: &Recipe,
    pantry: &[PantryItem],
    matcher: &M,
) -> Vec<IngredientDeficit> {
    recipe
        .ingredients_with_quantity()
        .iter()
        .map(|requirement| calculate_deficit(requirement, pantry, matcher))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SubstringMatcher;

    fn analyze(recipe: &Recipe, pantry: &[PantryItem]) -> Vec<IngredientDeficit> {
        analyze_recipe_deficits(recipe, pantry, &SubstringMatcher)
    }

    #[test]
    fn test_sufficient_after_conversion() {
        let recipe = Recipe::new("1", "Soup").with_ingredient("Chicken Broth", "1 cup");
        let pantry = vec![PantryItem::new("chicken broth", 500.0, "ml")];

        let deficits = analyze(&recipe, &pantry);
        assert_eq!(deficits.len(), 1);
        assert!(deficits[0].sufficient);
        assert_eq!(deficits[0].deficit, 0.0);
        assert_eq!(deficits[0].basis, DeficitBasis::Converted);
        assert_eq!(deficits[0].ingredient_name, "chicken broth");
    }

    #[test]
    fn test_short_stock() {
        let recipe = Recipe::new("1", "Cake").with_ingredient("Flour", "2 cups");
        let pantry = vec![PantryItem::new("flour", 1.5, "cup")];

        let deficit = &analyze(&recipe, &pantry)[0];
        assert!(!deficit.sufficient);
        assert!(deficit.is_insufficient());
        assert!((deficit.deficit - 0.5).abs() < 1e-9);
        assert_eq!(deficit.deficit_unit, Unit::Cups);
    }

    #[test]
    fn test_missing_ingredient() {
        let recipe = Recipe::new("1", "Stew").with_ingredient("Garlic", "2 cloves");
        let deficit = &analyze(&recipe, &[])[0];

        assert!(deficit.is_missing());
        assert!(!deficit.sufficient);
        assert_eq!(deficit.deficit, 2.0);
        assert_eq!(deficit.basis, DeficitBasis::Missing);
    }

    #[test]
    fn test_incompatible_units_assumed_sufficient() {
        let recipe = Recipe::new("1", "Pasta").with_ingredient("Parmesan", "1 pinch");
        let pantry = vec![PantryItem::new("parmesan cheese", 500.0, "g")];

        let deficit = &analyze(&recipe, &pantry)[0];
        assert!(deficit.sufficient);
        assert_eq!(deficit.deficit, 0.0);
        assert_eq!(deficit.basis, DeficitBasis::AssumedSufficient);
    }

    #[test]
    fn test_first_pantry_match_wins() {
        let recipe = Recipe::new("1", "Omelette").with_ingredient("Eggs", "4");
        let pantry = vec![
            PantryItem::new("eggs", 2.0, "count"),
            PantryItem::new("eggs", 12.0, "count"),
        ];

        let deficit = &analyze(&recipe, &pantry)[0];
        assert_eq!(deficit.deficit, 2.0);
    }

    #[test]
    fn test_sufficiency_tracks_deficit_when_converted() {
        let recipe = Recipe::new("1", "Mix")
            .with_ingredient("Milk", "1 cup")
            .with_ingredient("Sugar", "100 g")
            .with_ingredient("Butter", "2 tbsp");
        let pantry = vec![
            PantryItem::new("milk", 0.1, "L"),
            PantryItem::new("sugar", 1.0, "lb"),
            PantryItem::new("butter", 1.0, "tbsp"),
        ];

        for deficit in analyze(&recipe, &pantry) {
            assert_eq!(deficit.basis, DeficitBasis::Converted);
            assert_eq!(deficit.sufficient, deficit.deficit == 0.0);
        }
    }

    #[test]
    fn test_empty_recipe() {
        assert!(analyze(&Recipe::new("1", "Nothing"), &[PantryItem::new("rice", 1.0, "kg")]).is_empty());
    }
}
