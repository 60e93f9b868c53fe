//! # Companion Optimizer
//!
//! Suggests companion recipes that use up the perishable surplus a primary
//! recipe leaves behind. The lifecycle is
//! `NoSurplus | CandidatesGathered -> Scored -> ComboSelected`:
//!
//! 1. Surplus of the primary recipe is computed and filtered to perishables.
//! 2. Candidates are searched per perishable ingredient, fetched best-effort
//!    and deduplicated by id.
//! 3. Each candidate is scored by how much of each surplus it consumes.
//! 4. A greedy pass picks a small combination against a shrinking ledger of
//!    remaining surplus. It never backtracks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pantry_planner::config::PlannerConfig;
//! use pantry_planner::matcher::SubstringMatcher;
//! use pantry_planner::mealdb::MealDbClient;
//! use pantry_planner::optimizer::find_companion_recipes;
//! use pantry_planner::pantry::PantryItem;
//! use pantry_planner::recipe::Recipe;
//!
//! # async fn demo(primary: Recipe, pantry: Vec<PantryItem>) -> anyhow::Result<()> {
//! let config = PlannerConfig::default();
//! let source = MealDbClient::from_config(&config.sources);
//! let mut result = find_companion_recipes(&source, &primary, &pantry, &config, &SubstringMatcher).await?;
//! let combo_len = result.select_combo(config.max_combo_recipes).len();
//! println!("{} companions, {} in combo", result.companions.len(), combo_len);
//! # Ok(())
//! # }
//! ```

use crate::config::PlannerConfig;
use crate::matcher::IngredientMatcher;
use crate::pantry::PantryItem;
use crate::quantity::round2;
use crate::recipe::Recipe;
use crate::source::{fetch_details_best_effort, with_deadline, RecipeSource, SourceError};
use crate::surplus::{calculate_surplus, RecipeSurplus};
use crate::units::Unit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Share of a surplus assumed used when the units cannot be compared
pub const UNCONVERTIBLE_PERCENT_ESTIMATE: u32 = 50;

/// Where an optimization run ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationStage {
    /// Nothing perishable left over, nothing to do
    NoSurplus,
    CandidatesGathered,
    Scored,
    ComboSelected,
}

/// How much of one surplus ingredient a companion consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurplusUse {
    pub ingredient_name: String,
    /// In the surplus unit, 0 when the units could not be compared
    pub amount_used: f64,
    pub unit: Unit,
    pub percent_of_surplus: u32,
}

/// A candidate recipe scored against the perishable surplus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionRecipe {
    pub recipe: Recipe,
    pub surplus_used: Vec<SurplusUse>,
    /// Sum of `percent_of_surplus`; may exceed 100
    pub total_surplus_consumed: u32,
    /// Ingredients covered by neither the pantry nor the surplus
    pub additional_ingredients_needed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub primary: Recipe,
    pub surplus: Vec<RecipeSurplus>,
    pub perishable_surplus: Vec<RecipeSurplus>,
    /// Best candidates, most surplus consumed first
    pub companions: Vec<CompanionRecipe>,
    /// Greedy selection, filled in by [`OptimizationResult::select_combo`]
    pub combo: Vec<CompanionRecipe>,
    pub stage: OptimizationStage,
}

impl OptimizationResult {
    fn without_candidates(primary: &Recipe, surplus: Vec<RecipeSurplus>) -> Self {
        Self {
            primary: primary.clone(),
            surplus,
            perishable_surplus: Vec::new(),
            companions: Vec::new(),
            combo: Vec::new(),
            stage: OptimizationStage::NoSurplus,
        }
    }

    /// Run the greedy combination pass over the scored companions
    ///
    /// A run that ended at `NoSurplus` stays there.
    pub fn select_combo(&mut self, max_recipes: usize) -> &[CompanionRecipe] {
        if self.stage == OptimizationStage::NoSurplus {
            return &self.combo;
        }

        self.combo = find_optimal_combo(&self.companions, &self.perishable_surplus, max_recipes);
        self.stage = OptimizationStage::ComboSelected;
        info!(
            "Selected {} companion recipes for {}",
            self.combo.len(),
            self.primary.id
        );
        &self.combo
    }
}

/// Score one candidate against the perishable surplus
///
/// `None` when the candidate uses none of the perishable ingredients.
pub fn score_candidate<M: IngredientMatcher>(
    candidate: &Recipe,
    perishable_surplus: &[RecipeSurplus],
    pantry: &[PantryItem],
    surplus: &[RecipeSurplus],
    matcher: &M,
) -> Option<CompanionRecipe> {
    let requirements = candidate.ingredients_with_quantity();

    let surplus_used: Vec<SurplusUse> = perishable_surplus
        .iter()
        .filter_map(|leftover| {
            let requirement = requirements
                .iter()
                .find(|requirement| matcher.matches(&requirement.name, &leftover.ingredient_name))?;

            let usage = match requirement.quantity.amount_in(&leftover.unit) {
                Some(needed) => {
                    let used = needed.min(leftover.surplus);
                    SurplusUse {
                        ingredient_name: leftover.ingredient_name.clone(),
                        amount_used: round2(used),
                        unit: leftover.unit.clone(),
                        percent_of_surplus: (used / leftover.surplus * 100.0).round() as u32,
                    }
                }
                None => SurplusUse {
                    ingredient_name: leftover.ingredient_name.clone(),
                    amount_used: 0.0,
                    unit: leftover.unit.clone(),
                    percent_of_surplus: UNCONVERTIBLE_PERCENT_ESTIMATE,
                },
            };
            Some(usage)
        })
        .collect();

    if surplus_used.is_empty() {
        return None;
    }

    let have_names: Vec<String> = pantry
        .iter()
        .map(|item| item.name.to_lowercase())
        .chain(surplus.iter().map(|s| s.ingredient_name.to_lowercase()))
        .collect();

    let additional_ingredients_needed = candidate
        .ingredient_names()
        .into_iter()
        .filter(|ingredient| !have_names.iter().any(|have| matcher.matches(ingredient, have)))
        .collect();

    Some(CompanionRecipe {
        recipe: candidate.clone(),
        total_surplus_consumed: surplus_used.iter().map(|u| u.percent_of_surplus).sum(),
        surplus_used,
        additional_ingredients_needed,
    })
}

/// Search, fetch and score companion recipes for `primary`
///
/// Failed or timed-out detail fetches only drop that candidate. A failed
/// search is returned as an error.
pub async fn find_companion_recipes<M: IngredientMatcher>(
    source: &dyn RecipeSource,
    primary: &Recipe,
    pantry: &[PantryItem],
    config: &PlannerConfig,
    matcher: &M,
) -> Result<OptimizationResult, SourceError> {
    let surplus = calculate_surplus(primary, pantry, matcher);
    let perishable_surplus: Vec<RecipeSurplus> = surplus
        .iter()
        .filter(|s| s.is_perishable(config.perishable_days))
        .cloned()
        .collect();

    if perishable_surplus.is_empty() {
        debug!("Recipe {} leaves no perishable surplus", primary.id);
        return Ok(OptimizationResult::without_candidates(primary, surplus));
    }

    let per_request = config.sources.fetch_timeout();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for leftover in &perishable_surplus {
        let previews = with_deadline(
            &format!("search for '{}'", leftover.ingredient_name),
            per_request,
            source.search_by_ingredient(&leftover.ingredient_name),
        )
        .await?;

        let ids: Vec<String> = previews
            .into_iter()
            .take(config.max_candidates_per_ingredient)
            .map(|preview| preview.id)
            .collect();

        for recipe in fetch_details_best_effort(source, &ids, per_request).await {
            if recipe.id != primary.id && seen.insert(recipe.id.clone()) {
                candidates.push(recipe);
            }
        }
    }
    debug!(
        "{:?}: {} candidates for {} perishable ingredients",
        OptimizationStage::CandidatesGathered,
        candidates.len(),
        perishable_surplus.len()
    );

    let mut companions: Vec<CompanionRecipe> = candidates
        .iter()
        .filter_map(|candidate| score_candidate(candidate, &perishable_surplus, pantry, &surplus, matcher))
        .collect();

    companions.sort_by(|a, b| {
        b.total_surplus_consumed
            .cmp(&a.total_surplus_consumed)
            .then_with(|| {
                a.additional_ingredients_needed
                    .len()
                    .cmp(&b.additional_ingredients_needed.len())
            })
    });
    companions.truncate(config.max_companions);
    debug!("{:?}: kept {} companions", OptimizationStage::Scored, companions.len());

    Ok(OptimizationResult {
        primary: primary.clone(),
        surplus,
        perishable_surplus,
        companions,
        combo: Vec::new(),
        stage: OptimizationStage::Scored,
    })
}

/// Greedily pick up to `max_recipes` companions against the remaining surplus
///
/// Each round re-scores the unpicked candidates as the sum over their
/// surplus uses of `min(used, remaining) / remaining * 100`, takes the best
/// (first on ties), and deducts its usage from the ledger. Stops early once
/// no candidate scores above zero.
pub fn find_optimal_combo(
    companions: &[CompanionRecipe],
    perishable_surplus: &[RecipeSurplus],
    max_recipes: usize,
) -> Vec<CompanionRecipe> {
    let mut remaining: Vec<(String, f64)> = perishable_surplus
        .iter()
        .map(|s| (s.ingredient_name.to_lowercase(), s.surplus))
        .collect();
    let mut picked = vec![false; companions.len()];
    let mut combo = Vec::new();

    while combo.len() < max_recipes {
        let mut best: Option<(usize, f64)> = None;

        for (idx, companion) in companions.iter().enumerate() {
            if picked[idx] {
                continue;
            }
            let score = combo_score(companion, &remaining);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        let Some((idx, score)) = best else {
            break;
        };
        if score <= 0.0 {
            debug!("No remaining candidate helps, stopping after {}", combo.len());
            break;
        }

        let choice = &companions[idx];
        for used in &choice.surplus_used {
            if let Some(entry) = ledger_entry(&mut remaining, &used.ingredient_name) {
                entry.1 = (entry.1 - used.amount_used).max(0.0);
            }
        }
        picked[idx] = true;
        combo.push(choice.clone());
    }

    combo
}

fn combo_score(companion: &CompanionRecipe, remaining: &[(String, f64)]) -> f64 {
    let lookup = |name: &str| {
        let name = name.to_lowercase();
        remaining
            .iter()
            .find(|(ingredient, _)| *ingredient == name)
            .map(|(_, left)| *left)
    };

    companion
        .surplus_used
        .iter()
        .filter_map(|used| {
            let left = lookup(&used.ingredient_name).filter(|left| *left > 0.0)?;
            Some(used.amount_used.min(left) / left * 100.0)
        })
        .sum()
}

fn ledger_entry<'a>(remaining: &'a mut [(String, f64)], name: &str) -> Option<&'a mut (String, f64)> {
    let name = name.to_lowercase();
    remaining.iter_mut().find(|(ingredient, _)| *ingredient == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::SubstringMatcher;

    fn leftover(name: &str, surplus: f64, unit: Unit, days: u32) -> RecipeSurplus {
        RecipeSurplus {
            ingredient_name: name.to_string(),
            surplus,
            unit,
            shelf_life_days: Some(days),
        }
    }

    fn companion(id: &str, uses: &[(&str, f64)], extra: usize) -> CompanionRecipe {
        let surplus_used: Vec<SurplusUse> = uses
            .iter()
            .map(|(name, amount)| SurplusUse {
                ingredient_name: name.to_string(),
                amount_used: *amount,
                unit: Unit::Cups,
                percent_of_surplus: 0,
            })
            .collect();
        CompanionRecipe {
            recipe: Recipe::new(id, id),
            surplus_used,
            total_surplus_consumed: 0,
            additional_ingredients_needed: (0..extra).map(|i| format!("extra {i}")).collect(),
        }
    }

    fn ids(combo: &[CompanionRecipe]) -> Vec<&str> {
        combo.iter().map(|c| c.recipe.id.as_str()).collect()
    }

    #[test]
    fn test_score_candidate_converts_into_surplus_unit() {
        let perishable = vec![leftover("milk", 2.0, Unit::Cups, 7)];
        let candidate = Recipe::new("pancakes", "Pancakes")
            .with_ingredient("Milk", "250 ml")
            .with_ingredient("Flour", "1 cup")
            .with_ingredient("Eggs", "2");
        let pantry = vec![PantryItem::new("eggs", 6.0, "count")];

        let scored = score_candidate(&candidate, &perishable, &pantry, &perishable, &SubstringMatcher).unwrap();
        assert_eq!(scored.surplus_used.len(), 1);
        assert_eq!(scored.surplus_used[0].amount_used, 1.06);
        assert_eq!(scored.surplus_used[0].percent_of_surplus, 53);
        assert_eq!(scored.total_surplus_consumed, 53);
        assert_eq!(scored.additional_ingredients_needed, vec!["flour"]);
    }

    #[test]
    fn test_score_candidate_caps_at_available_surplus() {
        let perishable = vec![leftover("spinach", 3.0, Unit::Ounces, 5)];
        let candidate = Recipe::new("saag", "Saag").with_ingredient("spinach", "1 lb");

        let scored = score_candidate(&candidate, &perishable, &[], &perishable, &SubstringMatcher).unwrap();
        assert_eq!(scored.surplus_used[0].amount_used, 3.0);
        assert_eq!(scored.surplus_used[0].percent_of_surplus, 100);
    }

    #[test]
    fn test_score_candidate_unconvertible_estimate() {
        let perishable = vec![leftover("spinach", 3.0, Unit::Ounces, 5)];
        let candidate = Recipe::new("soup", "Soup").with_ingredient("spinach", "1 bunch");

        let scored = score_candidate(&candidate, &perishable, &[], &perishable, &SubstringMatcher).unwrap();
        assert_eq!(scored.surplus_used[0].amount_used, 0.0);
        assert_eq!(scored.surplus_used[0].percent_of_surplus, UNCONVERTIBLE_PERCENT_ESTIMATE);
    }

    #[test]
    fn test_score_candidate_without_overlap() {
        let perishable = vec![leftover("spinach", 3.0, Unit::Ounces, 5)];
        let candidate = Recipe::new("toast", "Toast").with_ingredient("bread", "2 slices");
        assert!(score_candidate(&candidate, &perishable, &[], &perishable, &SubstringMatcher).is_none());
    }

    #[test]
    fn test_combo_greedy_picks_and_deducts() {
        let perishable = vec![
            leftover("milk", 2.0, Unit::Cups, 7),
            leftover("cream", 1.0, Unit::Cups, 10),
        ];
        let companions = vec![
            companion("a", &[("milk", 1.0)], 0),
            companion("b", &[("milk", 2.0)], 0),
            companion("c", &[("cream", 0.5)], 0),
        ];

        // b clears the milk (100), then c takes half the cream (50); a no longer helps
        let combo = find_optimal_combo(&companions, &perishable, 3);
        assert_eq!(ids(&combo), vec!["b", "c"]);
    }

    #[test]
    fn test_combo_respects_max_recipes() {
        let perishable = vec![
            leftover("milk", 4.0, Unit::Cups, 7),
            leftover("cream", 4.0, Unit::Cups, 10),
        ];
        let companions = vec![
            companion("a", &[("milk", 1.0)], 0),
            companion("b", &[("cream", 1.0)], 0),
            companion("c", &[("milk", 1.0), ("cream", 1.0)], 0),
        ];

        let combo = find_optimal_combo(&companions, &perishable, 2);
        assert_eq!(combo.len(), 2);
        assert_eq!(ids(&combo)[0], "c");
        assert!(find_optimal_combo(&companions, &perishable, 0).is_empty());
    }

    #[test]
    fn test_combo_stops_when_nothing_helps() {
        let perishable = vec![leftover("milk", 2.0, Unit::Cups, 7)];
        let companions = vec![
            companion("estimate-only", &[("milk", 0.0)], 0),
            companion("other", &[("basil", 1.0)], 0),
        ];
        assert!(find_optimal_combo(&companions, &perishable, 3).is_empty());
        assert!(find_optimal_combo(&[], &perishable, 3).is_empty());
    }

    #[test]
    fn test_select_combo_keeps_no_surplus_terminal() {
        let mut result = OptimizationResult::without_candidates(&Recipe::new("1", "Plain"), Vec::new());
        assert!(result.select_combo(3).is_empty());
        assert_eq!(result.stage, OptimizationStage::NoSurplus);
    }
}
