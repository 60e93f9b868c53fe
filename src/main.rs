use anyhow::{anyhow, bail, Context, Result};
use chrono::Local;
use pantry_planner::config::PlannerConfig;
use pantry_planner::deficit::analyze_recipe_deficits;
use pantry_planner::matcher::SubstringMatcher;
use pantry_planner::mealdb::MealDbClient;
use pantry_planner::optimizer::find_companion_recipes;
use pantry_planner::pantry::{expiring_item_names, load_pantry_snapshot};
use pantry_planner::ranking::rank_recipe;
use pantry_planner::shopping::{purchase_plan, shopping_list_for};
use pantry_planner::source::{with_deadline, RecipeSource};
use serde_json::json;
use std::env;
use tracing::info;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, reading RUST_LOG and LOG_FORMAT through `lookup`
fn init_logging<F, W>(lookup: &F, make_writer: W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = lookup("RUST_LOG")
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer);

    let installed = if lookup("LOG_FORMAT").is_some_and(|format| format == "json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install logging: {}", e))
}

/// Logging first, so configuration warnings are not lost
fn startup<F, W>(lookup: F, make_writer: W) -> Result<PlannerConfig>
where
    F: Fn(&str) -> Option<String>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    init_logging(&lookup, make_writer)?;
    Ok(PlannerConfig::from_lookup(lookup))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry RUST_LOG, so it loads before the subscriber
    dotenv::dotenv().ok();
    let config = startup(|key| env::var(key).ok(), std::io::stderr)?;

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        bail!("Usage: {} <pantry.json> <recipe-id>", args[0]);
    }
    let (pantry_path, recipe_id) = (&args[1], &args[2]);

    info!("Starting pantry planner for recipe {}", recipe_id);
    let pantry = load_pantry_snapshot(pantry_path)?;

    let source = MealDbClient::from_config(&config.sources);
    let primary = with_deadline("primary recipe lookup", config.sources.fetch_timeout(), source.get_by_id(recipe_id))
        .await
        .with_context(|| format!("Failed to fetch recipe {}", recipe_id))?
        .with_context(|| format!("Recipe {} not found", recipe_id))?;

    let matcher = SubstringMatcher;
    let today = Local::now().date_naive();
    let expiring = expiring_item_names(&pantry, today, config.expiring_window_days);

    let deficits = analyze_recipe_deficits(&primary, &pantry, &matcher);
    let shopping_list = shopping_list_for(&primary, &deficits);
    let purchases: Vec<_> = shopping_list
        .iter()
        .filter_map(|item| purchase_plan(item.needed_amount, item.needed_unit.code(), &item.ingredient_name))
        .collect();

    let mut optimization = find_companion_recipes(&source, &primary, &pantry, &config, &matcher)
        .await
        .context("Companion search failed")?;
    optimization.select_combo(config.max_combo_recipes);

    let report = json!({
        "recipe": rank_recipe(&primary, &pantry, &expiring, &matcher),
        "deficits": deficits,
        "shopping_list": shopping_list,
        "purchases": purchases,
        "optimization": optimization,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
