//! # Planner Configuration
//!
//! Tunables for expiration windows, optimizer fan-out and the recipe
//! providers. Defaults match the household app; every field can be
//! overridden from the environment (or a `.env` file).

use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

// Constants for planner configuration
pub const DEFAULT_PERISHABLE_DAYS: u32 = 7;
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 5;
pub const DEFAULT_MAX_CANDIDATES_PER_INGREDIENT: usize = 10;
pub const DEFAULT_MAX_COMPANIONS: usize = 5;
pub const DEFAULT_MAX_COMBO_RECIPES: usize = 3;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Recipe provider settings
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// Deadline for every single provider request, in seconds
    pub fetch_timeout_secs: u64,
    pub mealdb_base_url: String,
    /// Edamam credentials; the Edamam client is unavailable without both
    pub edamam_app_id: Option<String>,
    pub edamam_app_key: Option<String>,
}

impl SourceConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            mealdb_base_url: DEFAULT_MEALDB_BASE_URL.to_string(),
            edamam_app_id: None,
            edamam_app_key: None,
        }
    }
}

/// Configuration for pantry analysis and companion optimization
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Surplus with a shelf life at or below this many days is perishable
    pub perishable_days: u32,
    /// Pantry items expiring within this many days count as "expiring"
    pub expiring_window_days: i64,
    /// Candidate recipes fetched per perishable ingredient
    pub max_candidates_per_ingredient: usize,
    /// Scored companions kept after sorting
    pub max_companions: usize,
    /// Upper bound on recipes in the greedy combo
    pub max_combo_recipes: usize,
    pub sources: SourceConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            perishable_days: DEFAULT_PERISHABLE_DAYS,
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
            max_candidates_per_ingredient: DEFAULT_MAX_CANDIDATES_PER_INGREDIENT,
            max_companions: DEFAULT_MAX_COMPANIONS,
            max_combo_recipes: DEFAULT_MAX_COMBO_RECIPES,
            sources: SourceConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Defaults overridden by the process environment, after loading `.env`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_parsed(&lookup, "PANTRY_PERISHABLE_DAYS", &mut config.perishable_days);
        override_parsed(&lookup, "PANTRY_EXPIRING_WINDOW_DAYS", &mut config.expiring_window_days);
        override_parsed(&lookup, "PANTRY_MAX_CANDIDATES", &mut config.max_candidates_per_ingredient);
        override_parsed(&lookup, "PANTRY_MAX_COMPANIONS", &mut config.max_companions);
        override_parsed(&lookup, "PANTRY_MAX_COMBO", &mut config.max_combo_recipes);
        override_parsed(&lookup, "PANTRY_FETCH_TIMEOUT_SECS", &mut config.sources.fetch_timeout_secs);

        if let Some(url) = non_empty(&lookup, "MEALDB_BASE_URL") {
            config.sources.mealdb_base_url = url.trim_end_matches('/').to_string();
        }
        config.sources.edamam_app_id = non_empty(&lookup, "EDAMAM_APP_ID");
        config.sources.edamam_app_key = non_empty(&lookup, "EDAMAM_APP_KEY");

        debug!("Planner configuration: {:?}", config);
        config
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|value| !value.trim().is_empty())
}

/// Replace `target` with the parsed variable; bad values keep the default
fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = non_empty(lookup, key) else {
        return;
    };

    match raw.trim().parse::<T>() {
        Ok(value) => *target = value,
        Err(_) => warn!("Ignoring invalid {}='{}', keeping {:?}", key, raw, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> PlannerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlannerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.perishable_days, 7);
        assert_eq!(config.expiring_window_days, 5);
        assert_eq!(config.max_candidates_per_ingredient, 10);
        assert_eq!(config.max_companions, 5);
        assert_eq!(config.max_combo_recipes, 3);
        assert_eq!(config.sources.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.sources.mealdb_base_url, DEFAULT_MEALDB_BASE_URL);
        assert!(config.sources.edamam_app_id.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PANTRY_PERISHABLE_DAYS", "5"),
            ("PANTRY_MAX_COMBO", "2"),
            ("PANTRY_FETCH_TIMEOUT_SECS", " 10 "),
            ("MEALDB_BASE_URL", "http://localhost:9000/api/"),
            ("EDAMAM_APP_ID", "abc"),
            ("EDAMAM_APP_KEY", "xyz"),
        ]);

        assert_eq!(config.perishable_days, 5);
        assert_eq!(config.max_combo_recipes, 2);
        assert_eq!(config.sources.fetch_timeout_secs, 10);
        assert_eq!(config.sources.mealdb_base_url, "http://localhost:9000/api");
        assert_eq!(config.sources.edamam_app_id.as_deref(), Some("abc"));
        assert_eq!(config.sources.edamam_app_key.as_deref(), Some("xyz"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = config_from(&[
            ("PANTRY_MAX_COMPANIONS", "lots"),
            ("PANTRY_PERISHABLE_DAYS", "-1"),
            ("EDAMAM_APP_ID", "  "),
        ]);

        assert_eq!(config.max_companions, DEFAULT_MAX_COMPANIONS);
        assert_eq!(config.perishable_days, DEFAULT_PERISHABLE_DAYS);
        assert!(config.sources.edamam_app_id.is_none());
    }
}
