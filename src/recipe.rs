//! # Recipe Records
//!
//! Provider-neutral recipe shape: identifier, display fields, and up to
//! [`MAX_INGREDIENT_SLOTS`] `(name, measure text)` slots. Both recipe adapters
//! produce this shape, and the analyzers only ever read it.

use crate::quantity::{parse_measure, ParsedQuantity};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Maximum number of ingredient slots a recipe carries
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One ingredient slot; an empty name marks an unused slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub name: String,
    pub measure: String,
}

/// A recipe as supplied by a [`crate::source::RecipeSource`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub area: String,
    /// Cooking instructions, empty when the provider has none
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub slots: Vec<IngredientSlot>,
}

/// A recipe ingredient with its parsed required quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientRequirement {
    pub name: String,
    pub quantity: ParsedQuantity,
}

impl Recipe {
    /// Create a recipe with no ingredients
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Add an ingredient slot; slots beyond the limit are ignored
    pub fn with_ingredient(mut self, name: &str, measure: &str) -> Self {
        if self.slots.len() < MAX_INGREDIENT_SLOTS {
            self.slots.push(IngredientSlot {
                name: name.to_string(),
                measure: measure.to_string(),
            });
        } else {
            trace!("Recipe {} already has {} slots, dropping '{}'", self.id, MAX_INGREDIENT_SLOTS, name);
        }
        self
    }

    pub fn with_category(mut self, category: &str, area: &str) -> Self {
        self.category = category.to_string();
        self.area = area.to_string();
        self
    }

    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = instructions.to_string();
        self
    }

    /// Used slots, capped at [`MAX_INGREDIENT_SLOTS`]
    fn used_slots(&self) -> impl Iterator<Item = &IngredientSlot> {
        self.slots
            .iter()
            .take(MAX_INGREDIENT_SLOTS)
            .filter(|slot| !slot.name.trim().is_empty())
    }

    /// Lowercased, trimmed ingredient names of every used slot
    pub fn ingredient_names(&self) -> Vec<String> {
        self.used_slots()
            .map(|slot| slot.name.trim().to_lowercase())
            .collect()
    }

    /// Lowercased ingredient names paired with their parsed measures
    pub fn ingredients_with_quantity(&self) -> Vec<RecipeIngredientRequirement> {
        self.used_slots()
            .map(|slot| RecipeIngredientRequirement {
                name: slot.name.trim().to_lowercase(),
                quantity: parse_measure(&slot.measure),
            })
            .collect()
    }
}
