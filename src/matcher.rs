//! # Ingredient Matcher
//!
//! Decides whether a pantry item "is" a recipe ingredient. The default
//! [`SubstringMatcher`] accepts case-insensitive equality or either name being
//! a substring of the other, so "chicken" matches "chicken breast". It also
//! lets "pea" match "peanut butter"; swap in another [`IngredientMatcher`] for
//! a stricter policy.

/// Name reconciliation between recipe ingredients and pantry items
pub trait IngredientMatcher: Send + Sync {
    /// Whether `recipe_name` and `pantry_name` refer to the same ingredient
    fn matches(&self, recipe_name: &str, pantry_name: &str) -> bool;

    /// First candidate (in order) matching `recipe_name`
    fn find_first<'a, T, F>(&self, recipe_name: &str, candidates: &'a [T], name_of: F) -> Option<&'a T>
    where
        Self: Sized,
        F: Fn(&T) -> &str,
    {
        candidates
            .iter()
            .find(|candidate| self.matches(recipe_name, name_of(candidate)))
    }
}

/// Case-insensitive equality-or-substring matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringMatcher;

impl IngredientMatcher for SubstringMatcher {
    fn matches(&self, recipe_name: &str, pantry_name: &str) -> bool {
        names_overlap(recipe_name, pantry_name)
    }
}

/// Case-insensitive: equal, or either contains the other
pub fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a == b || a.contains(&b) || b.contains(&a)
}
