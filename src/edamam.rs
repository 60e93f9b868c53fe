//! # Edamam Adapter
//!
//! [`RecipeSource`] backed by the Edamam Recipe Search API (v2). Edamam's
//! structured ingredients (food, quantity, measure) are rendered back into
//! `"{quantity} {unit}"` measure text so they flow through the same quantity
//! parser as every other recipe.

use crate::config::SourceConfig;
use crate::recipe::{IngredientSlot, Recipe, MAX_INGREDIENT_SLOTS};
use crate::source::{RecipeSource, SourceError};
use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

pub const EDAMAM_BASE_URL: &str = "https://api.edamam.com/api/recipes/v2";
const RECIPE_URI_PREFIX: &str = "http://www.edamam.com/ontologies/edamam.owl#recipe_";
const RECIPE_ID_MARKER: &str = "#recipe_";

lazy_static! {
    /// Edamam measure name -> unit text our parser understands
    static ref MEASURE_MAP: HashMap<&'static str, &'static str> =
        HashMap::from([
            ("cup", "cup"),
            ("tablespoon", "tbsp"),
            ("teaspoon", "tsp"),
            ("ounce", "oz"),
            ("pound", "lb"),
            ("gram", "g"),
            ("kilogram", "kg"),
            ("milliliter", "ml"),
            ("liter", "L"),
            ("fluid ounce", "fl_oz"),
            ("gallon", "gal"),
            ("pinch", "pinch"),
            ("clove", "count"),
            ("slice", "count"),
            ("piece", "count"),
            ("whole", "count"),
            ("large", "count"),
            ("medium", "count"),
            ("small", "count"),
            ("can", "can"),
            ("bunch", "bunch"),
            ("head", "count"),
            ("stalk", "count"),
            ("sprig", "count"),
            ("leaf", "count"),
            ("strip", "count"),
            // Edamam's placeholder for unitless items
            ("<unit>", "count"),
            ("", "count"),
        ]);
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdamamIngredient {
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub measure: Option<String>,
    pub food: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdamamImage {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct EdamamImages {
    pub regular: Option<EdamamImage>,
}

/// Recipe record as Edamam returns it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdamamRecipe {
    pub uri: String,
    pub label: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Option<EdamamImages>,
    /// Publisher name ("Food Network")
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "yield", default)]
    pub servings: f64,
    #[serde(default)]
    pub total_time: f64,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub diet_labels: Vec<String>,
    #[serde(default)]
    pub health_labels: Vec<String>,
    #[serde(default)]
    pub ingredient_lines: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<EdamamIngredient>,
    #[serde(default)]
    pub cuisine_type: Vec<String>,
    #[serde(default)]
    pub meal_type: Vec<String>,
    #[serde(default)]
    pub dish_type: Vec<String>,
}

/// Edamam details with no place on [`Recipe`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdamamExtras {
    /// Publisher name
    pub source: String,
    pub source_url: String,
    pub servings: f64,
    /// Minutes, 0 when Edamam does not know
    pub total_time: f64,
    pub calories: u32,
    pub calories_per_serving: u32,
    pub diet_labels: Vec<String>,
    pub health_labels: Vec<String>,
    /// Ingredient lines as the publisher wrote them
    pub ingredient_lines: Vec<String>,
}

impl EdamamRecipe {
    pub fn extras(&self) -> EdamamExtras {
        let servings = if self.servings > 0.0 { self.servings } else { 1.0 };
        EdamamExtras {
            source: self.source.clone(),
            source_url: self.url.clone(),
            servings: self.servings,
            total_time: self.total_time,
            calories: self.calories.round().max(0.0) as u32,
            calories_per_serving: (self.calories / servings).round().max(0.0) as u32,
            diet_labels: self.diet_labels.clone(),
            health_labels: self.health_labels.clone(),
            ingredient_lines: self.ingredient_lines.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EdamamHit {
    recipe: EdamamRecipe,
}

#[derive(Debug, Deserialize)]
struct EdamamLink {
    href: String,
}

#[derive(Debug, Default, Deserialize)]
struct EdamamLinks {
    next: Option<EdamamLink>,
}

#[derive(Debug, Deserialize)]
struct EdamamSearchResponse {
    #[serde(default)]
    count: u64,
    #[serde(rename = "_links", default)]
    links: EdamamLinks,
    #[serde(default)]
    hits: Vec<EdamamHit>,
}

/// Optional search filters, passed through as Edamam query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub diet: Option<String>,
    pub health: Option<String>,
    pub cuisine_type: Option<String>,
    pub meal_type: Option<String>,
    pub dish_type: Option<String>,
}

impl SearchFilters {
    fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("diet", &self.diet),
            ("health", &self.health),
            ("cuisineType", &self.cuisine_type),
            ("mealType", &self.meal_type),
            ("dishType", &self.dish_type),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

/// One page of search results
#[derive(Debug, Clone)]
pub struct EdamamPage {
    pub recipes: Vec<Recipe>,
    /// Extras for each recipe on the page, keyed by recipe id
    pub extras: HashMap<String, EdamamExtras>,
    pub total_results: u64,
    /// Absolute URL of the next page, if any
    pub next_page: Option<String>,
}

/// Map an Edamam measure name to unit text, defaulting to the lowercased name
pub fn normalize_edamam_measure(measure: Option<&str>) -> String {
    let Some(measure) = measure else {
        return "count".to_string();
    };
    let lower = measure.trim().to_lowercase();
    MEASURE_MAP
        .get(lower.as_str())
        .map(|unit| unit.to_string())
        .unwrap_or(lower)
}

/// Recipe id from an Edamam URI (the part after `#recipe_`)
pub fn recipe_id_from_uri(uri: &str) -> &str {
    uri.rsplit_once(RECIPE_ID_MARKER)
        .map(|(_, id)| id)
        .filter(|id| !id.is_empty())
        .unwrap_or(uri)
}

impl From<EdamamRecipe> for Recipe {
    fn from(recipe: EdamamRecipe) -> Self {
        let slots = recipe
            .ingredients
            .iter()
            .take(MAX_INGREDIENT_SLOTS)
            .map(|ingredient| IngredientSlot {
                name: ingredient.food.clone(),
                measure: if ingredient.quantity > 0.0 {
                    format!(
                        "{} {}",
                        ingredient.quantity,
                        normalize_edamam_measure(ingredient.measure.as_deref())
                    )
                } else {
                    String::new()
                },
            })
            .collect();

        let image_url = recipe
            .images
            .and_then(|images| images.regular)
            .map(|image| image.url)
            .unwrap_or(recipe.image);

        Recipe {
            id: recipe_id_from_uri(&recipe.uri).to_string(),
            name: recipe.label,
            image_url,
            category: recipe.dish_type.into_iter().next().unwrap_or_default(),
            area: recipe.cuisine_type.into_iter().next().unwrap_or_default(),
            // Edamam links to the original page instead of shipping instructions
            instructions: String::new(),
            source_url: Some(recipe.url).filter(|url| !url.is_empty()),
            slots,
        }
    }
}

/// HTTP client for Edamam recipe search
#[derive(Debug, Clone)]
pub struct EdamamClient {
    client: Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl EdamamClient {
    pub fn new(app_id: &str, app_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: EDAMAM_BASE_URL.to_string(),
            app_id: app_id.to_string(),
            app_key: app_key.to_string(),
        }
    }

    /// Client from configured credentials
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        let app_id = config
            .edamam_app_id
            .as_deref()
            .ok_or(SourceError::MissingCredentials("EDAMAM_APP_ID"))?;
        let app_key = config
            .edamam_app_key
            .as_deref()
            .ok_or(SourceError::MissingCredentials("EDAMAM_APP_KEY"))?;
        Ok(Self::new(app_id, app_key))
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Free-text recipe search with optional filters
    pub async fn search(&self, query: &str, filters: &SearchFilters) -> Result<EdamamPage, SourceError> {
        let mut params = self.auth_params();
        params.push(("q", query));
        params.extend(filters.query_pairs());

        let response: EdamamSearchResponse = self.get_json(&self.base_url, &params).await?;
        Ok(Self::page(response))
    }

    /// Search for recipes using all of `ingredients`
    pub async fn search_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<Recipe>, SourceError> {
        Ok(self.search(&ingredients.join(" "), &SearchFilters::default()).await?.recipes)
    }

    /// Follow a `next_page` link from a previous page
    pub async fn fetch_next_page(&self, next_page_url: &str) -> Result<EdamamPage, SourceError> {
        let response: EdamamSearchResponse = self.get_json(next_page_url, &[]).await?;
        Ok(Self::page(response))
    }

    fn auth_params(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("type", "public"),
            ("app_id", self.app_id.as_str()),
            ("app_key", self.app_key.as_str()),
        ]
    }

    fn page(response: EdamamSearchResponse) -> EdamamPage {
        let mut extras = HashMap::new();
        let recipes: Vec<Recipe> = response
            .hits
            .into_iter()
            .map(|hit| {
                let recipe_extras = hit.recipe.extras();
                let recipe: Recipe = hit.recipe.into();
                extras.insert(recipe.id.clone(), recipe_extras);
                recipe
            })
            .collect();
        debug!("Edamam returned {} of {} recipes", recipes.len(), response.count);
        EdamamPage {
            recipes,
            extras,
            total_results: response.count,
            next_page: response.links.next.map(|link| link.href),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, SourceError> {
        let response = self.client.get(url).query(query).send().await?;

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
impl RecipeSource for EdamamClient {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, SourceError> {
        Ok(self.search(ingredient, &SearchFilters::default()).await?.recipes)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError> {
        let uri = if id.starts_with("http") {
            id.to_string()
        } else {
            format!("{RECIPE_URI_PREFIX}{id}")
        };

        let mut params = self.auth_params();
        params.push(("uri", uri.as_str()));

        let url = format!("{}/by-uri", self.base_url);
        match self.get_json::<EdamamSearchResponse>(&url, &params).await {
            Ok(response) => Ok(response.hits.into_iter().next().map(|hit| hit.recipe.into())),
            Err(SourceError::Status { status, .. }) => {
                warn!("Edamam lookup of {} returned {}", id, status);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
