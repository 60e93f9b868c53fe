//! # Recipe Sources
//!
//! The [`RecipeSource`] trait every recipe provider implements, the error
//! type for provider I/O, and the best-effort batch helpers built on it.
//!
//! Detail fetches are issued concurrently and joined with "settle all, keep
//! successes" semantics: a failed, timed-out or empty fetch drops that one
//! recipe and is logged, never failing the batch.

use crate::config::PlannerConfig;
use crate::matcher::IngredientMatcher;
use crate::pantry::PantryItem;
use crate::ranking::{rank_by_pantry_quantity, RankedRecipe};
use crate::recipe::Recipe;
use async_trait::async_trait;
use futures_util::future::join_all;
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Pantry names used as discovery search terms
pub const DISCOVERY_SEARCH_TERMS: usize = 5;
/// Previews whose details are fetched during discovery
pub const DISCOVERY_DETAIL_LIMIT: usize = 30;

/// Errors from talking to a recipe provider
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{what} timed out after {after:?}")]
    Timeout { what: String, after: Duration },

    #[error("Missing credentials: {0}")]
    MissingCredentials(&'static str),
}

/// Supplier of recipe records
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Preview-level recipes mentioning `ingredient`; slots may be empty
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>, SourceError>;

    /// Full recipe detail, `None` when the id is unknown
    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError>;
}

/// Run `future` with a deadline, mapping expiry to [`SourceError::Timeout`]
pub async fn with_deadline<T, F>(what: &str, after: Duration, future: F) -> Result<T, SourceError>
where
    F: std::future::Future<Output = Result<T, SourceError>>,
{
    timeout(after, future).await.map_err(|_| SourceError::Timeout {
        what: what.to_string(),
        after,
    })?
}

/// Fetch full details for `ids` concurrently, keeping only successes
///
/// Output follows the order of `ids`.
pub async fn fetch_details_best_effort(
    source: &dyn RecipeSource,
    ids: &[String],
    per_request: Duration,
) -> Vec<Recipe> {
    let fetches = ids.iter().map(|id| async move {
        let result = with_deadline(&format!("lookup of recipe {id}"), per_request, source.get_by_id(id)).await;
        (id, result)
    });

    let mut recipes = Vec::with_capacity(ids.len());
    for (id, result) in join_all(fetches).await {
        match result {
            Ok(Some(recipe)) => recipes.push(recipe),
            Ok(None) => debug!("Recipe {} not found, skipping", id),
            Err(e) => warn!("Dropping recipe {}: {}", id, e),
        }
    }

    debug!("Fetched {} of {} recipe details", recipes.len(), ids.len());
    recipes
}

/// Search by the first pantry names, fetch details, and rank against the pantry
///
/// A failed search aborts discovery; failed detail fetches only shrink it.
pub async fn discover_ranked_recipes<M: IngredientMatcher>(
    source: &dyn RecipeSource,
    pantry: &[PantryItem],
    expiring_names: &[String],
    config: &PlannerConfig,
    matcher: &M,
) -> Result<Vec<RankedRecipe>, SourceError> {
    let per_request = config.sources.fetch_timeout();
    let mut seen = HashSet::new();
    let mut preview_ids = Vec::new();

    for item in pantry.iter().take(DISCOVERY_SEARCH_TERMS) {
        let previews = with_deadline(
            &format!("search for '{}'", item.name),
            per_request,
            source.search_by_ingredient(&item.name),
        )
        .await?;

        for preview in previews {
            if seen.insert(preview.id.clone()) {
                preview_ids.push(preview.id);
            }
        }
    }

    preview_ids.truncate(DISCOVERY_DETAIL_LIMIT);
    let recipes = fetch_details_best_effort(source, &preview_ids, per_request).await;
    let ranked = rank_by_pantry_quantity(&recipes, pantry, expiring_names, matcher);

    info!(
        "Discovered {} recipes, {} usable with the current pantry",
        recipes.len(),
        ranked.len()
    );
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedSource {
        recipes: HashMap<String, Recipe>,
    }

    #[async_trait]
    impl RecipeSource for FixedSource {
        async fn search_by_ingredient(&self, _ingredient: &str) -> Result<Vec<Recipe>, SourceError> {
            Ok(self.recipes.values().cloned().collect())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, SourceError> {
            if id == "broken" {
                return Err(SourceError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            Ok(self.recipes.get(id).cloned())
        }
    }

    #[tokio::test]
    async fn test_best_effort_keeps_successes_in_order() {
        let source = FixedSource {
            recipes: [("1", "Soup"), ("2", "Salad")]
                .into_iter()
                .map(|(id, name)| (id.to_string(), Recipe::new(id, name)))
                .collect(),
        };
        let ids: Vec<String> = ["2", "broken", "missing", "1"].iter().map(|s| s.to_string()).collect();

        let recipes = fetch_details_best_effort(&source, &ids, Duration::from_secs(1)).await;
        let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Salad", "Soup"]);
    }

    #[tokio::test]
    async fn test_with_deadline_times_out() {
        let result: Result<(), SourceError> = with_deadline("slow call", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        match result {
            Err(SourceError::Timeout { what, .. }) => assert_eq!(what, "slow call"),
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn test_error_messages() {
        let status = SourceError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(status.to_string(), "Provider returned 401: unauthorized");
        assert_eq!(
            SourceError::MissingCredentials("EDAMAM_APP_ID").to_string(),
            "Missing credentials: EDAMAM_APP_ID"
        );
    }
}
