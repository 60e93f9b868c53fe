//! # Surplus Calculator
//!
//! Leftover pantry stock after a recipe consumes its requirements, and the
//! leftover from buying more than a recipe uses. Only sufficient ingredients
//! whose units convert produce surplus, and leftovers of 0.01 or less are
//! treated as floating-point noise.

use crate::deficit::{analyze_recipe_deficits, IngredientDeficit};
use crate::matcher::IngredientMatcher;
use crate::pantry::PantryItem;
use crate::quantity::round2;
use crate::recipe::Recipe;
use crate::reference::shelf_life_days;
use crate::units::{normalize_unit, Unit};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Leftovers at or below this amount are dropped
pub const SURPLUS_TOLERANCE: f64 = 0.01;

/// Pantry leftover for one ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSurplus {
    pub ingredient_name: String,
    /// Always above [`SURPLUS_TOLERANCE`], rounded to 2 decimals
    pub surplus: f64,
    pub unit: Unit,
    /// `None` when the shelf life is unknown
    pub shelf_life_days: Option<u32>,
}

impl RecipeSurplus {
    /// Known shelf life at or below `perishable_days`
    pub fn is_perishable(&self, perishable_days: u32) -> bool {
        self.shelf_life_days
            .is_some_and(|days| days <= perishable_days)
    }
}

/// Surplus for every sufficient deficit whose units convert
pub fn surplus_from_deficits(deficits: &[IngredientDeficit]) -> Vec<RecipeSurplus> {
    deficits
        .iter()
        .filter(|deficit| deficit.sufficient)
        .filter_map(|deficit| {
            let have = deficit.have.as_ref()?;
            let used = deficit.needed.amount_in(&have.unit)?;
            let remaining = have.amount - used;
            if remaining <= SURPLUS_TOLERANCE {
                return None;
            }

            Some(RecipeSurplus {
                ingredient_name: deficit.ingredient_name.clone(),
                surplus: round2(remaining),
                unit: have.unit.clone(),
                shelf_life_days: shelf_life_days(&deficit.ingredient_name),
            })
        })
        .collect()
}

/// Pantry leftovers after cooking `recipe`
pub fn calculate_surplus<M: IngredientMatcher>(
    recipe: &Recipe,
    pantry: &[PantryItem],
    matcher: &M,
) -> Vec<RecipeSurplus> {
    let surplus = surplus_from_deficits(&analyze_recipe_deficits(recipe, pantry, matcher));
    debug!("Recipe {} leaves {} surplus ingredients", recipe.id, surplus.len());
    surplus
}

/// Leftover from buying `buy_amount` and using `use_amount`, in the used unit
///
/// `None` when the units are incompatible or nothing meaningful is left.
pub fn calculate_shopping_list_surplus(
    buy_amount: f64,
    buy_unit: &str,
    use_amount: f64,
    use_unit: &str,
    ingredient_name: &str,
) -> Option<RecipeSurplus> {
    let use_unit = normalize_unit(use_unit);
    let bought = normalize_unit(buy_unit).convert(buy_amount, &use_unit)?;

    let surplus = bought - use_amount;
    if surplus <= SURPLUS_TOLERANCE {
        return None;
    }

    Some(RecipeSurplus {
        ingredient_name: ingredient_name.to_string(),
        surplus: round2(surplus),
        unit: use_unit,
        shelf_life_days: shelf_life_days(ingredient_name),
    })
}

/// Whether cooking `recipe` leaves any surplus that spoils within `perishable_days`
pub fn has_perishable_surplus<M: IngredientMatcher>(
    recipe: &Recipe,
    pantry: &[PantryItem],
    perishable_days: u32,
    matcher: &M,
) -> bool {
    calculate_surplus(recipe, pantry, matcher)
        .iter()
        .any(|surplus| surplus.is_perishable(perishable_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SubstringMatcher;

    #[test]
    fn test_surplus_in_pantry_unit() {
        let recipe = Recipe::new("1", "Soup").with_ingredient("milk", "1 cup");
        let pantry = vec![PantryItem::new("milk", 1.0, "L")];

        let surplus = calculate_surplus(&recipe, &pantry, &SubstringMatcher);
        assert_eq!(surplus.len(), 1);
        assert_eq!(surplus[0].unit, Unit::Liters);
        assert_eq!(surplus[0].surplus, 0.76);
        assert_eq!(surplus[0].shelf_life_days, Some(7));
        assert!(surplus[0].is_perishable(7));
    }

    #[test]
    fn test_negligible_leftover_is_dropped() {
        let recipe = Recipe::new("1", "Salad").with_ingredient("lettuce", "1 head");
        let pantry = vec![PantryItem::new("lettuce", 1.005, "head")];
        assert!(calculate_surplus(&recipe, &pantry, &SubstringMatcher).is_empty());
    }

    #[test]
    fn test_short_and_incompatible_ingredients_have_no_surplus() {
        let recipe = Recipe::new("1", "Bake")
            .with_ingredient("flour", "3 cups")
            .with_ingredient("salt", "1 pinch");
        let pantry = vec![
            PantryItem::new("flour", 1.0, "cup"),
            PantryItem::new("salt", 500.0, "g"),
        ];
        assert!(calculate_surplus(&recipe, &pantry, &SubstringMatcher).is_empty());
    }

    #[test]
    fn test_unknown_shelf_life_is_not_perishable() {
        let recipe = Recipe::new("1", "Curry").with_ingredient("coconut milk", "1 can");
        let pantry = vec![PantryItem::new("coconut milk", 3.0, "cans")];

        let surplus = calculate_surplus(&recipe, &pantry, &SubstringMatcher);
        assert_eq!(surplus[0].surplus, 2.0);
        assert_eq!(surplus[0].shelf_life_days, None);
        assert!(!has_perishable_surplus(&recipe, &pantry, 7, &SubstringMatcher));
    }

    #[test]
    fn test_has_perishable_surplus() {
        let recipe = Recipe::new("1", "Salad").with_ingredient("spinach", "2 oz");
        let pantry = vec![PantryItem::new("spinach", 5.0, "oz")];
        assert!(has_perishable_surplus(&recipe, &pantry, 7, &SubstringMatcher));
        assert!(!has_perishable_surplus(&recipe, &pantry, 3, &SubstringMatcher));
    }

    #[test]
    fn test_shopping_list_surplus() {
        let surplus = calculate_shopping_list_surplus(4.0, "cups", 2.0, "cup", "Chicken Broth").unwrap();
        assert_eq!(surplus.surplus, 2.0);
        assert_eq!(surplus.unit, Unit::Cups);

        let converted = calculate_shopping_list_surplus(1.0, "lb", 200.0, "g", "ground beef").unwrap();
        assert_eq!(converted.surplus, 253.59);
        assert_eq!(converted.shelf_life_days, Some(3));

        assert!(calculate_shopping_list_surplus(1.0, "lb", 1.0, "cup", "beef").is_none());
        assert!(calculate_shopping_list_surplus(2.0, "cup", 2.0, "cup", "milk").is_none());
    }
}
