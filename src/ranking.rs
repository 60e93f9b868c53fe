//! # Recipe Ranker
//!
//! Orders candidate recipes for display: recipes that use something about
//! to expire come first, then recipes the pantry can fully cover, then
//! recipes with the widest ingredient overlap. The sort is stable, so ties
//! keep the caller's order.

use crate::deficit::analyze_recipe_deficits;
use crate::matcher::IngredientMatcher;
use crate::pantry::PantryItem;
use crate::recipe::Recipe;
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// A matched ingredient the pantry holds too little of
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsufficientIngredient {
    pub name: String,
    pub deficit: f64,
    pub unit: Unit,
}

/// A recipe annotated with how well the pantry covers it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Lowercased names of ingredients the pantry has any amount of
    pub matched_ingredients: Vec<String>,
    pub total_ingredients: usize,
    pub match_percent: u32,
    pub has_expiring_match: bool,
    pub sufficient_ingredients: Vec<String>,
    pub insufficient_ingredients: Vec<InsufficientIngredient>,
    pub missing_ingredients: Vec<String>,
    pub quantity_match_percent: u32,
}

/// Whole-number percentage of `part` over `total`, 0 for an empty total
pub fn percent_of(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

/// Annotate one recipe against the pantry
pub fn rank_recipe<M: IngredientMatcher>(
    recipe: &Recipe,
    pantry: &[PantryItem],
    expiring_names: &[String],
    matcher: &M,
) -> RankedRecipe {
    let deficits = analyze_recipe_deficits(recipe, pantry, matcher);
    let total_ingredients = deficits.len();

    let mut matched_ingredients = Vec::new();
    let mut sufficient_ingredients = Vec::new();
    let mut insufficient_ingredients = Vec::new();
    let mut missing_ingredients = Vec::new();

    for deficit in deficits {
        let name = deficit.ingredient_name.to_lowercase();
        if deficit.is_missing() {
            missing_ingredients.push(name);
            continue;
        }

        matched_ingredients.push(name.clone());
        if deficit.sufficient {
            sufficient_ingredients.push(name);
        } else {
            insufficient_ingredients.push(InsufficientIngredient {
                name,
                deficit: deficit.deficit,
                unit: deficit.deficit_unit,
            });
        }
    }

    let has_expiring_match = matched_ingredients.iter().any(|ingredient| {
        expiring_names
            .iter()
            .any(|expiring| matcher.matches(ingredient, expiring))
    });

    RankedRecipe {
        recipe: recipe.clone(),
        match_percent: percent_of(matched_ingredients.len(), total_ingredients),
        quantity_match_percent: percent_of(sufficient_ingredients.len(), total_ingredients),
        matched_ingredients,
        total_ingredients,
        has_expiring_match,
        sufficient_ingredients,
        insufficient_ingredients,
        missing_ingredients,
    }
}

/// Rank `recipes` against the pantry, dropping recipes with no overlap at all
pub fn rank_by_pantry_quantity<M: IngredientMatcher>(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    expiring_names: &[String],
    matcher: &M,
) -> Vec<RankedRecipe> {
    let mut ranked: Vec<RankedRecipe> = recipes
        .iter()
        .map(|recipe| rank_recipe(recipe, pantry, expiring_names, matcher))
        .filter(|ranked| ranked.match_percent > 0)
        .collect();

    ranked.sort_by_key(|ranked| {
        (
            !ranked.has_expiring_match,
            Reverse(ranked.quantity_match_percent),
            Reverse(ranked.match_percent),
        )
    });

    debug!("Ranked {} of {} recipes", ranked.len(), recipes.len());
    ranked
}
