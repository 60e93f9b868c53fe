//! # Reference Tables
//!
//! Static, read-only lookup data: default shelf life per ingredient and the
//! typical store package for common groceries. Both tables are built once on
//! first use and never mutated.

use crate::matcher::names_overlap;
use crate::units::{normalize_unit, Unit};
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use tracing::trace;

/// Grocery aisle a standard package belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageCategory {
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Bakery,
    Spices,
    Condiments,
    Beverages,
    Canned,
}

/// Typical store-bought package for an ingredient
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardPackage {
    /// Quantity in one package
    pub amount: f64,
    /// Unit of `amount`
    pub unit: Unit,
    /// Human-readable label ("1 dozen", "1 can")
    pub package_label: &'static str,
    /// Estimated shelf life after purchase
    pub shelf_days: u32,
    pub category: PackageCategory,
}

/// Default shelf life in days, keyed by lowercase ingredient name
const SHELF_LIFE_DAYS: &[(&str, u32)] = &[
    // Dairy
    ("milk", 7),
    ("cream", 10),
    ("yogurt", 14),
    ("butter", 30),
    ("cheese", 21),
    ("sour cream", 14),
    ("cream cheese", 14),
    ("eggs", 21),
    // Produce
    ("lettuce", 5),
    ("spinach", 5),
    ("tomato", 7),
    ("tomatoes", 7),
    ("onion", 30),
    ("onions", 30),
    ("garlic", 60),
    ("potato", 21),
    ("potatoes", 21),
    ("carrot", 21),
    ("carrots", 21),
    ("celery", 14),
    ("bell pepper", 7),
    ("mushrooms", 5),
    ("avocado", 4),
    ("banana", 5),
    ("bananas", 5),
    ("apple", 21),
    ("apples", 21),
    ("lemon", 21),
    ("lemons", 21),
    ("lime", 14),
    ("limes", 14),
    ("berries", 4),
    ("strawberries", 4),
    ("blueberries", 5),
    // Meat
    ("chicken", 3),
    ("chicken breast", 3),
    ("ground beef", 3),
    ("beef", 5),
    ("pork", 5),
    ("fish", 2),
    ("salmon", 2),
    ("shrimp", 2),
    ("bacon", 7),
    ("deli meat", 5),
    ("sausage", 5),
    // Pantry staples
    ("rice", 365),
    ("pasta", 365),
    ("flour", 180),
    ("sugar", 730),
    ("salt", 1825),
    ("olive oil", 365),
    ("vegetable oil", 365),
    ("soy sauce", 365),
    ("vinegar", 730),
    ("canned tomatoes", 365),
    ("canned beans", 365),
    ("peanut butter", 180),
    ("honey", 730),
    // Bread & baked
    ("bread", 5),
    ("tortillas", 14),
];

/// (name, amount, unit, label, shelf days, category), in lookup priority order
const PACKAGE_ROWS: &[(&str, f64, &str, &str, u32, PackageCategory)] = &[
    ("eggs", 12.0, "count", "1 dozen", 28, PackageCategory::Dairy),
    ("milk", 1.0, "gal", "1 gallon", 10, PackageCategory::Dairy),
    ("whole milk", 1.0, "gal", "1 gallon", 10, PackageCategory::Dairy),
    ("skim milk", 1.0, "gal", "1 gallon", 10, PackageCategory::Dairy),
    ("2% milk", 1.0, "gal", "1 gallon", 10, PackageCategory::Dairy),
    ("heavy cream", 16.0, "fl_oz", "1 pint", 14, PackageCategory::Dairy),
    ("half and half", 16.0, "fl_oz", "1 pint", 10, PackageCategory::Dairy),
    ("sour cream", 16.0, "oz", "16 oz container", 21, PackageCategory::Dairy),
    ("cream cheese", 8.0, "oz", "8 oz block", 21, PackageCategory::Dairy),
    ("butter", 1.0, "lb", "1 lb (4 sticks)", 30, PackageCategory::Dairy),
    ("unsalted butter", 1.0, "lb", "1 lb (4 sticks)", 30, PackageCategory::Dairy),
    ("yogurt", 32.0, "oz", "32 oz tub", 14, PackageCategory::Dairy),
    ("greek yogurt", 32.0, "oz", "32 oz tub", 14, PackageCategory::Dairy),
    ("cheddar cheese", 8.0, "oz", "8 oz block", 28, PackageCategory::Dairy),
    ("mozzarella cheese", 8.0, "oz", "8 oz bag", 21, PackageCategory::Dairy),
    ("parmesan cheese", 6.0, "oz", "6 oz wedge", 42, PackageCategory::Dairy),
    ("cheese", 8.0, "oz", "8 oz block", 28, PackageCategory::Dairy),
    ("shredded cheese", 8.0, "oz", "8 oz bag", 28, PackageCategory::Dairy),
    ("ricotta cheese", 15.0, "oz", "15 oz container", 14, PackageCategory::Dairy),
    ("cottage cheese", 16.0, "oz", "16 oz container", 14, PackageCategory::Dairy),
    ("whipped cream", 8.0, "oz", "8 oz can", 60, PackageCategory::Dairy),
    ("chicken breast", 2.0, "lb", "2 lb pack", 3, PackageCategory::Meat),
    ("chicken thighs", 2.0, "lb", "2 lb pack", 3, PackageCategory::Meat),
    ("chicken", 2.0, "lb", "2 lb pack", 3, PackageCategory::Meat),
    ("ground beef", 1.0, "lb", "1 lb pack", 3, PackageCategory::Meat),
    ("ground turkey", 1.0, "lb", "1 lb pack", 3, PackageCategory::Meat),
    ("ground pork", 1.0, "lb", "1 lb pack", 3, PackageCategory::Meat),
    ("steak", 1.0, "lb", "1 lb", 3, PackageCategory::Meat),
    ("pork chops", 1.5, "lb", "1.5 lb pack", 3, PackageCategory::Meat),
    ("bacon", 12.0, "oz", "12 oz pack", 7, PackageCategory::Meat),
    ("sausage", 1.0, "lb", "1 lb pack", 5, PackageCategory::Meat),
    ("italian sausage", 1.0, "lb", "1 lb pack", 5, PackageCategory::Meat),
    ("ham", 1.0, "lb", "1 lb", 5, PackageCategory::Meat),
    ("salmon", 1.0, "lb", "1 lb fillet", 2, PackageCategory::Meat),
    ("shrimp", 1.0, "lb", "1 lb bag", 2, PackageCategory::Meat),
    ("tuna", 5.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("tofu", 14.0, "oz", "14 oz block", 7, PackageCategory::Meat),
    ("onions", 3.0, "count", "3 lb bag", 30, PackageCategory::Produce),
    ("onion", 1.0, "count", "1 onion", 30, PackageCategory::Produce),
    ("yellow onion", 1.0, "count", "1 onion", 30, PackageCategory::Produce),
    ("red onion", 1.0, "count", "1 onion", 14, PackageCategory::Produce),
    ("garlic", 1.0, "count", "1 head", 30, PackageCategory::Produce),
    ("potatoes", 5.0, "lb", "5 lb bag", 21, PackageCategory::Produce),
    ("potato", 1.0, "count", "1 potato", 21, PackageCategory::Produce),
    ("sweet potatoes", 2.0, "count", "2 sweet potatoes", 14, PackageCategory::Produce),
    ("carrots", 1.0, "lb", "1 lb bag", 21, PackageCategory::Produce),
    ("celery", 1.0, "count", "1 bunch", 14, PackageCategory::Produce),
    ("broccoli", 1.0, "count", "1 head", 5, PackageCategory::Produce),
    ("cauliflower", 1.0, "count", "1 head", 7, PackageCategory::Produce),
    ("bell pepper", 1.0, "count", "1 pepper", 7, PackageCategory::Produce),
    ("bell peppers", 3.0, "count", "3 pack", 7, PackageCategory::Produce),
    ("tomatoes", 4.0, "count", "4 tomatoes", 7, PackageCategory::Produce),
    ("tomato", 1.0, "count", "1 tomato", 7, PackageCategory::Produce),
    ("lettuce", 1.0, "count", "1 head", 7, PackageCategory::Produce),
    ("spinach", 5.0, "oz", "5 oz bag", 5, PackageCategory::Produce),
    ("kale", 5.0, "oz", "1 bunch", 5, PackageCategory::Produce),
    ("mushrooms", 8.0, "oz", "8 oz package", 7, PackageCategory::Produce),
    ("zucchini", 2.0, "count", "2 zucchini", 7, PackageCategory::Produce),
    ("cucumber", 1.0, "count", "1 cucumber", 7, PackageCategory::Produce),
    ("corn", 4.0, "count", "4 ears", 5, PackageCategory::Produce),
    ("green beans", 12.0, "oz", "12 oz bag", 5, PackageCategory::Produce),
    ("asparagus", 1.0, "lb", "1 lb bunch", 4, PackageCategory::Produce),
    ("green onions", 6.0, "count", "1 bunch", 7, PackageCategory::Produce),
    ("scallions", 6.0, "count", "1 bunch", 7, PackageCategory::Produce),
    ("cilantro", 1.0, "bunch", "1 bunch", 7, PackageCategory::Produce),
    ("parsley", 1.0, "bunch", "1 bunch", 7, PackageCategory::Produce),
    ("basil", 1.0, "bunch", "1 bunch", 5, PackageCategory::Produce),
    ("ginger", 4.0, "oz", "1 knob", 21, PackageCategory::Produce),
    ("jalapeño", 3.0, "count", "3 peppers", 7, PackageCategory::Produce),
    ("cabbage", 1.0, "count", "1 head", 14, PackageCategory::Produce),
    ("eggplant", 1.0, "count", "1 eggplant", 7, PackageCategory::Produce),
    ("lemons", 4.0, "count", "4 lemons", 21, PackageCategory::Produce),
    ("lemon", 1.0, "count", "1 lemon", 21, PackageCategory::Produce),
    ("limes", 4.0, "count", "4 limes", 21, PackageCategory::Produce),
    ("lime", 1.0, "count", "1 lime", 21, PackageCategory::Produce),
    ("bananas", 6.0, "count", "1 bunch", 5, PackageCategory::Produce),
    ("apples", 6.0, "count", "3 lb bag", 21, PackageCategory::Produce),
    ("oranges", 6.0, "count", "4 lb bag", 14, PackageCategory::Produce),
    ("avocado", 1.0, "count", "1 avocado", 4, PackageCategory::Produce),
    ("avocados", 4.0, "count", "4 pack", 4, PackageCategory::Produce),
    ("berries", 6.0, "oz", "6 oz container", 5, PackageCategory::Produce),
    ("strawberries", 16.0, "oz", "1 lb container", 5, PackageCategory::Produce),
    ("blueberries", 6.0, "oz", "6 oz container", 7, PackageCategory::Produce),
    ("rice", 2.0, "lb", "2 lb bag", 365, PackageCategory::Pantry),
    ("white rice", 2.0, "lb", "2 lb bag", 365, PackageCategory::Pantry),
    ("brown rice", 2.0, "lb", "2 lb bag", 180, PackageCategory::Pantry),
    ("pasta", 1.0, "lb", "1 lb box", 730, PackageCategory::Pantry),
    ("spaghetti", 1.0, "lb", "1 lb box", 730, PackageCategory::Pantry),
    ("penne", 1.0, "lb", "1 lb box", 730, PackageCategory::Pantry),
    ("macaroni", 1.0, "lb", "1 lb box", 730, PackageCategory::Pantry),
    ("egg noodles", 12.0, "oz", "12 oz bag", 365, PackageCategory::Pantry),
    ("bread", 20.0, "count", "1 loaf", 7, PackageCategory::Bakery),
    ("tortillas", 10.0, "count", "10 pack", 14, PackageCategory::Bakery),
    ("flour tortillas", 10.0, "count", "10 pack", 14, PackageCategory::Bakery),
    ("corn tortillas", 30.0, "count", "30 pack", 14, PackageCategory::Bakery),
    ("pita bread", 6.0, "count", "6 pack", 7, PackageCategory::Bakery),
    ("hamburger buns", 8.0, "count", "8 pack", 7, PackageCategory::Bakery),
    ("flour", 5.0, "lb", "5 lb bag", 365, PackageCategory::Pantry),
    ("all-purpose flour", 5.0, "lb", "5 lb bag", 365, PackageCategory::Pantry),
    ("bread flour", 5.0, "lb", "5 lb bag", 365, PackageCategory::Pantry),
    ("oats", 18.0, "oz", "18 oz canister", 365, PackageCategory::Pantry),
    ("quinoa", 12.0, "oz", "12 oz bag", 365, PackageCategory::Pantry),
    ("couscous", 10.0, "oz", "10 oz box", 365, PackageCategory::Pantry),
    ("breadcrumbs", 15.0, "oz", "15 oz canister", 180, PackageCategory::Pantry),
    ("panko", 8.0, "oz", "8 oz bag", 180, PackageCategory::Pantry),
    ("canned tomatoes", 14.5, "oz", "1 can", 730, PackageCategory::Canned),
    ("diced tomatoes", 14.5, "oz", "1 can", 730, PackageCategory::Canned),
    ("crushed tomatoes", 28.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("tomato paste", 6.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("tomato sauce", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("black beans", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("kidney beans", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("chickpeas", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("pinto beans", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("cannellini beans", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("lentils", 1.0, "lb", "1 lb bag", 365, PackageCategory::Pantry),
    ("coconut milk", 13.5, "fl_oz", "1 can", 730, PackageCategory::Canned),
    ("chicken broth", 32.0, "fl_oz", "1 carton (4 cups)", 10, PackageCategory::Canned),
    ("beef broth", 32.0, "fl_oz", "1 carton (4 cups)", 10, PackageCategory::Canned),
    ("vegetable broth", 32.0, "fl_oz", "1 carton (4 cups)", 10, PackageCategory::Canned),
    ("canned corn", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("green peas", 15.0, "oz", "1 can", 730, PackageCategory::Canned),
    ("olive oil", 16.9, "fl_oz", "500ml bottle", 365, PackageCategory::Condiments),
    ("vegetable oil", 48.0, "fl_oz", "48 oz bottle", 365, PackageCategory::Condiments),
    ("canola oil", 48.0, "fl_oz", "48 oz bottle", 365, PackageCategory::Condiments),
    ("sesame oil", 8.4, "fl_oz", "250ml bottle", 365, PackageCategory::Condiments),
    ("coconut oil", 14.0, "fl_oz", "14 oz jar", 365, PackageCategory::Condiments),
    ("balsamic vinegar", 16.9, "fl_oz", "500ml bottle", 730, PackageCategory::Condiments),
    ("red wine vinegar", 16.0, "fl_oz", "16 oz bottle", 730, PackageCategory::Condiments),
    ("apple cider vinegar", 16.0, "fl_oz", "16 oz bottle", 730, PackageCategory::Condiments),
    ("white vinegar", 16.0, "fl_oz", "16 oz bottle", 730, PackageCategory::Condiments),
    ("rice vinegar", 12.0, "fl_oz", "12 oz bottle", 730, PackageCategory::Condiments),
    ("soy sauce", 15.0, "fl_oz", "15 oz bottle", 730, PackageCategory::Condiments),
    ("worcestershire sauce", 10.0, "fl_oz", "10 oz bottle", 730, PackageCategory::Condiments),
    ("hot sauce", 5.0, "fl_oz", "5 oz bottle", 730, PackageCategory::Condiments),
    ("ketchup", 20.0, "oz", "20 oz bottle", 180, PackageCategory::Condiments),
    ("mustard", 12.0, "oz", "12 oz bottle", 365, PackageCategory::Condiments),
    ("dijon mustard", 12.0, "oz", "12 oz jar", 365, PackageCategory::Condiments),
    ("mayonnaise", 30.0, "fl_oz", "30 oz jar", 60, PackageCategory::Condiments),
    ("salsa", 16.0, "oz", "16 oz jar", 14, PackageCategory::Condiments),
    ("marinara sauce", 24.0, "oz", "24 oz jar", 7, PackageCategory::Condiments),
    ("pasta sauce", 24.0, "oz", "24 oz jar", 7, PackageCategory::Condiments),
    ("bbq sauce", 18.0, "oz", "18 oz bottle", 120, PackageCategory::Condiments),
    ("teriyaki sauce", 10.0, "fl_oz", "10 oz bottle", 365, PackageCategory::Condiments),
    ("fish sauce", 6.76, "fl_oz", "200ml bottle", 730, PackageCategory::Condiments),
    ("peanut butter", 16.0, "oz", "16 oz jar", 180, PackageCategory::Condiments),
    ("honey", 12.0, "oz", "12 oz bottle", 730, PackageCategory::Condiments),
    ("maple syrup", 12.0, "fl_oz", "12 oz bottle", 365, PackageCategory::Condiments),
    ("salt", 26.0, "oz", "26 oz canister", 1825, PackageCategory::Spices),
    ("black pepper", 4.0, "oz", "4 oz tin", 730, PackageCategory::Spices),
    ("garlic powder", 3.12, "oz", "1 jar", 730, PackageCategory::Spices),
    ("onion powder", 2.62, "oz", "1 jar", 730, PackageCategory::Spices),
    ("paprika", 2.12, "oz", "1 jar", 730, PackageCategory::Spices),
    ("smoked paprika", 2.12, "oz", "1 jar", 730, PackageCategory::Spices),
    ("cumin", 1.68, "oz", "1 jar", 730, PackageCategory::Spices),
    ("chili powder", 2.5, "oz", "1 jar", 730, PackageCategory::Spices),
    ("cayenne pepper", 1.75, "oz", "1 jar", 730, PackageCategory::Spices),
    ("cinnamon", 2.37, "oz", "1 jar", 730, PackageCategory::Spices),
    ("nutmeg", 1.1, "oz", "1 jar", 730, PackageCategory::Spices),
    ("oregano", 0.75, "oz", "1 jar", 730, PackageCategory::Spices),
    ("dried oregano", 0.75, "oz", "1 jar", 730, PackageCategory::Spices),
    ("thyme", 0.62, "oz", "1 jar", 730, PackageCategory::Spices),
    ("dried thyme", 0.62, "oz", "1 jar", 730, PackageCategory::Spices),
    ("rosemary", 0.75, "oz", "1 jar", 730, PackageCategory::Spices),
    ("dried rosemary", 0.75, "oz", "1 jar", 730, PackageCategory::Spices),
    ("bay leaves", 0.5, "oz", "1 jar", 730, PackageCategory::Spices),
    ("italian seasoning", 0.87, "oz", "1 jar", 730, PackageCategory::Spices),
    ("red pepper flakes", 1.5, "oz", "1 jar", 730, PackageCategory::Spices),
    ("curry powder", 2.0, "oz", "1 jar", 730, PackageCategory::Spices),
    ("turmeric", 1.75, "oz", "1 jar", 730, PackageCategory::Spices),
    ("coriander", 1.5, "oz", "1 jar", 730, PackageCategory::Spices),
    ("vanilla extract", 2.0, "fl_oz", "2 oz bottle", 730, PackageCategory::Spices),
    ("sugar", 4.0, "lb", "4 lb bag", 730, PackageCategory::Pantry),
    ("brown sugar", 2.0, "lb", "2 lb bag", 365, PackageCategory::Pantry),
    ("powdered sugar", 2.0, "lb", "2 lb bag", 730, PackageCategory::Pantry),
    ("baking soda", 16.0, "oz", "1 lb box", 730, PackageCategory::Pantry),
    ("baking powder", 8.1, "oz", "8.1 oz can", 365, PackageCategory::Pantry),
    ("cocoa powder", 8.0, "oz", "8 oz can", 730, PackageCategory::Pantry),
    ("chocolate chips", 12.0, "oz", "12 oz bag", 365, PackageCategory::Pantry),
    ("cornstarch", 16.0, "oz", "1 lb box", 730, PackageCategory::Pantry),
    ("yeast", 0.75, "oz", "3 packets", 120, PackageCategory::Pantry),
    ("almonds", 6.0, "oz", "6 oz bag", 180, PackageCategory::Pantry),
    ("walnuts", 6.0, "oz", "6 oz bag", 180, PackageCategory::Pantry),
    ("pecans", 6.0, "oz", "6 oz bag", 180, PackageCategory::Pantry),
    ("peanuts", 16.0, "oz", "1 lb jar", 180, PackageCategory::Pantry),
    ("pine nuts", 2.0, "oz", "2 oz bag", 90, PackageCategory::Pantry),
    ("raisins", 12.0, "oz", "12 oz box", 180, PackageCategory::Pantry),
    ("dried cranberries", 6.0, "oz", "6 oz bag", 365, PackageCategory::Pantry),
    ("frozen peas", 16.0, "oz", "1 lb bag", 365, PackageCategory::Frozen),
    ("frozen corn", 16.0, "oz", "1 lb bag", 365, PackageCategory::Frozen),
    ("frozen spinach", 10.0, "oz", "10 oz box", 365, PackageCategory::Frozen),
    ("frozen berries", 12.0, "oz", "12 oz bag", 365, PackageCategory::Frozen),
    ("ice cream", 48.0, "fl_oz", "1.5 qt container", 60, PackageCategory::Frozen),
    ("frozen pizza", 1.0, "count", "1 pizza", 180, PackageCategory::Frozen),
    ("orange juice", 52.0, "fl_oz", "52 oz carton", 10, PackageCategory::Beverages),
    ("apple juice", 64.0, "fl_oz", "64 oz bottle", 10, PackageCategory::Beverages),
    ("coffee", 12.0, "oz", "12 oz bag", 30, PackageCategory::Beverages),
    ("tea", 20.0, "count", "20 tea bags", 365, PackageCategory::Beverages),
];

lazy_static! {
    static ref SHELF_LIFE: HashMap<&'static str, u32> = SHELF_LIFE_DAYS.iter().copied().collect();
    static ref STANDARD_PACKAGES: Vec<(&'static str, StandardPackage)> =
        PACKAGE_ROWS
            .iter()
            .map(|&(name, amount, unit, package_label, shelf_days, category)| {
                let package = StandardPackage {
                    amount,
                    unit: normalize_unit(unit),
                    package_label,
                    shelf_days,
                    category,
                };
                (name, package)
            })
            .collect();
}

/// Default shelf life for an ingredient (exact, case-insensitive name lookup)
///
/// `None` means unknown, which callers treat as non-perishable.
pub fn shelf_life_days(ingredient_name: &str) -> Option<u32> {
    SHELF_LIFE
        .get(ingredient_name.trim().to_lowercase().as_str())
        .copied()
}

/// Standard purchase size for an ingredient
///
/// Tries an exact name match first, then the first table entry whose name
/// overlaps the ingredient name.
pub fn standard_package(ingredient_name: &str) -> Option<&'static StandardPackage> {
    let lower = ingredient_name.trim().to_lowercase();
    let packages = &*STANDARD_PACKAGES;

    if let Some((_, package)) = packages.iter().find(|(name, _)| *name == lower) {
        return Some(package);
    }

    let partial = packages
        .iter()
        .find(|(name, _)| names_overlap(&lower, name))
        .map(|(_, package)| package);
    trace!("Partial package lookup for '{}': {:?}", lower, partial.is_some());
    partial
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_life_exact_lookup() {
        assert_eq!(shelf_life_days("Spinach"), Some(5));
        assert_eq!(shelf_life_days("chicken breast"), Some(3));
        assert_eq!(shelf_life_days("chicken broth"), None);
        assert_eq!(shelf_life_days("dragonfruit"), None);
    }

    #[test]
    fn test_standard_package_exact() {
        let eggs = standard_package("Eggs").unwrap();
        assert_eq!(eggs.amount, 12.0);
        assert_eq!(eggs.unit, Unit::Count);
        assert_eq!(eggs.package_label, "1 dozen");
        assert_eq!(eggs.category, PackageCategory::Dairy);

        let broth = standard_package("chicken broth").unwrap();
        assert_eq!(broth.unit, Unit::FluidOunces);
        assert_eq!(broth.amount, 32.0);
    }

    #[test]
    fn test_standard_package_partial() {
        let package = standard_package("organic baby spinach").unwrap();
        assert_eq!(package.unit, Unit::Ounces);
        assert_eq!(package.shelf_days, 5);
    }

    #[test]
    fn test_standard_package_unknown() {
        assert!(standard_package("xanthan gum").is_none());
    }
}
