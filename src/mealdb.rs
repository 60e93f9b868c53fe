//! # TheMealDB Adapter
//!
//! [`RecipeSource`] backed by TheMealDB's free JSON API. Meals carry their
//! ingredients in numbered `strIngredientN` / `strMeasureN` fields, which are
//! folded into [`Recipe`] slots. A `null` `meals` field means no results.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pantry_planner::mealdb::MealDbClient;
//! use pantry_planner::source::RecipeSource;
//!
//! # async fn demo() -> Result<(), pantry_planner::source::SourceError> {
//! let client = MealDbClient::new("https://www.themealdb.com/api/json/v1/1");
//! let previews = client.search_by_ingredient("chicken").await?;
//! if let Some(first) = previews.first() {
//!     let detail = client.get_by_id(&first.id).await?;
//!     println!("{:?}", detail.map(|recipe| recipe.ingredient_names()));
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::SourceConfig;
use crate::recipe::{IngredientSlot, Recipe, MAX_INGREDIENT_SLOTS};
use crate::source::{RecipeSource, SourceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// One meal as TheMealDB returns it
#[derive(Debug, Clone, Deserialize)]
pub struct MealDbMeal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Numbered ingredient/measure fields and anything else
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Option<Vec<MealDbMeal>>,
}

impl MealDbMeal {
    fn extra_text(&self, key: &str) -> &str {
        self.extra.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

impl From<MealDbMeal> for Recipe {
    fn from(meal: MealDbMeal) -> Self {
        let slots = (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = meal.extra_text(&format!("strIngredient{i}")).trim();
                (!name.is_empty()).then(|| IngredientSlot {
                    name: name.to_string(),
                    measure: meal.extra_text(&format!("strMeasure{i}")).trim().to_string(),
                })
            })
            .collect();

        Recipe {
            slots,
            id: meal.id,
            name: meal.name,
            image_url: meal.thumbnail.unwrap_or_default(),
            category: meal.category.unwrap_or_default(),
            area: meal.area.unwrap_or_default(),
            instructions: meal.instructions.unwrap_or_default(),
            source_url: meal.source.filter(|url| !url.trim().is_empty()),
        }
    }
}

/// HTTP client for TheMealDB
#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(&config.mealdb_base_url)
    }

    /// Recipes whose name matches `name` (full detail records)
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Recipe>, SourceError> {
        self.meals("search.php", &[("s", name)]).await
    }

    async fn meals(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Vec<Recipe>, SourceError> {
        let response: MealsResponse = self.get_json(endpoint, query).await?;
        let meals = response.meals.unwrap_or_default();
        debug!("TheMealDB {} returned {} meals", endpoint, meals.len());
        Ok(meals.into_iter().map(Recipe::from).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, SourceError> {
        self.meals("filter.php", &[("i", ingredient)]).await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError> {
        Ok(self.meals("lookup.php", &[("i", id)]).await?.into_iter().next())
    }
}
