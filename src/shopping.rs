//! # Shopping List
//!
//! Turns deficit results into shopping-list rows, and estimates what a
//! realistic purchase of standard store packages leaves over.

use crate::deficit::IngredientDeficit;
use crate::quantity::round2;
use crate::recipe::Recipe;
use crate::reference::standard_package;
use crate::units::{normalize_unit, Unit};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Absorbs conversion noise so 16.000000001 packages is not rounded up to 17
const PACKAGE_EPSILON: f64 = 1e-9;

/// One row to buy for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub ingredient_name: String,
    pub needed_amount: f64,
    pub needed_unit: Unit,
    /// Recipe display name
    pub for_recipe: String,
    pub for_recipe_id: String,
}

/// Packages to buy for a need, and what is left afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchasePlan {
    pub buy_packages: u32,
    /// "1 can" for a single package, "3x 1 can" otherwise
    pub buy_label: String,
    pub buy_amount: f64,
    pub buy_unit: Unit,
    pub surplus_amount: f64,
    pub surplus_unit: Unit,
}

/// Shopping rows for every missing or short ingredient of `recipe`
pub fn shopping_list_for(recipe: &Recipe, deficits: &[IngredientDeficit]) -> Vec<ShoppingListItem> {
    deficits
        .iter()
        .filter(|deficit| !deficit.sufficient && deficit.deficit > 0.0)
        .map(|deficit| ShoppingListItem {
            ingredient_name: deficit.ingredient_name.clone(),
            needed_amount: round2(deficit.deficit),
            needed_unit: deficit.deficit_unit.clone(),
            for_recipe: recipe.name.clone(),
            for_recipe_id: recipe.id.clone(),
        })
        .collect()
}

/// Standard packages needed to cover `needed_amount` of an ingredient
///
/// The need is converted into the package unit when the two are compatible;
/// otherwise the amounts are compared as-is. `None` for unknown ingredients
/// or a non-positive need.
pub fn purchase_plan(needed_amount: f64, needed_unit: &str, ingredient_name: &str) -> Option<PurchasePlan> {
    if needed_amount <= 0.0 {
        return None;
    }
    let package = standard_package(ingredient_name)?;

    let need = normalize_unit(needed_unit)
        .convert(needed_amount, &package.unit)
        .unwrap_or(needed_amount);
    let buy_packages = ((need / package.amount) - PACKAGE_EPSILON).ceil().max(1.0) as u32;
    let buy_amount = f64::from(buy_packages) * package.amount;

    let buy_label = if buy_packages == 1 {
        package.package_label.to_string()
    } else {
        format!("{}x {}", buy_packages, package.package_label)
    };
    debug!("Purchase for {} {} of '{}': {}", needed_amount, needed_unit, ingredient_name, buy_label);

    Some(PurchasePlan {
        buy_packages,
        buy_label,
        buy_amount,
        buy_unit: package.unit.clone(),
        surplus_amount: round2(buy_amount - need),
        surplus_unit: package.unit.clone(),
    })
}
