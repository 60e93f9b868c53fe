//! # Pantry Items
//!
//! The household's stock as read from the record store, plus the
//! expiration helpers the ranker and shopping flow rely on. Nothing here
//! mutates stored pantry state; callers persist whatever they derive.

use crate::quantity::ParsedQuantity;
use crate::reference::shelf_life_days;
use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Shelf life assumed for ingredients missing from the reference table
pub const DEFAULT_SHELF_DAYS: u32 = 7;

/// One pantry row. Duplicate names may coexist as separate rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub quantity_amount: f64,
    /// Free-text unit, normalized when the item is compared
    pub quantity_unit: String,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

/// Freshness bucket for display and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpirationStatus {
    Expired,
    /// 0 to 3 days left
    Urgent { days: i64 },
    /// 4 to 7 days left
    Soon { days: i64 },
    Fresh { days: i64 },
    /// No expiration date recorded
    Unknown,
}

impl PantryItem {
    pub fn new(name: &str, amount: f64, unit: &str) -> Self {
        Self {
            id: String::new(),
            name: name.to_string(),
            quantity_amount: amount,
            quantity_unit: unit.to_string(),
            expiration_date: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_expiration(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }

    /// Stock as a parsed quantity in its normalized unit
    pub fn quantity(&self) -> ParsedQuantity {
        ParsedQuantity::from_amount_and_unit(self.quantity_amount, &self.quantity_unit)
    }

    /// Whole days from `today` until expiration; negative once expired
    pub fn days_until_expiration(&self, today: NaiveDate) -> Option<i64> {
        self.expiration_date
            .map(|date| date.signed_duration_since(today).num_days())
    }

    pub fn expiration_status(&self, today: NaiveDate) -> ExpirationStatus {
        match self.days_until_expiration(today) {
            None => ExpirationStatus::Unknown,
            Some(days) if days < 0 => ExpirationStatus::Expired,
            Some(days) if days <= 3 => ExpirationStatus::Urgent { days },
            Some(days) if days <= 7 => ExpirationStatus::Soon { days },
            Some(days) => ExpirationStatus::Fresh { days },
        }
    }
}

/// Names of items expiring within `window_days` of `today`
///
/// Items already past their date are not included.
pub fn expiring_item_names(items: &[PantryItem], today: NaiveDate, window_days: i64) -> Vec<String> {
    items
        .iter()
        .filter(|item| {
            item.days_until_expiration(today)
                .is_some_and(|days| (0..=window_days).contains(&days))
        })
        .map(|item| item.name.clone())
        .collect()
}

/// Expiration date for a freshly purchased ingredient
pub fn default_expiration(ingredient_name: &str, purchased_on: NaiveDate) -> NaiveDate {
    let shelf_days = shelf_life_days(ingredient_name).unwrap_or(DEFAULT_SHELF_DAYS);
    purchased_on
        .checked_add_days(Days::new(u64::from(shelf_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Dated items first, soonest first; undated items keep their order at the end
pub fn sort_by_expiration(items: &mut [PantryItem]) {
    items.sort_by(|a, b| match (a.expiration_date, b.expiration_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

/// Read a pantry snapshot (JSON array of items) from disk
pub fn load_pantry_snapshot(path: impl AsRef<Path>) -> Result<Vec<PantryItem>> {
    let path = path.as_ref();
    debug!("Loading pantry snapshot from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pantry file {}", path.display()))?;
    let items: Vec<PantryItem> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid pantry JSON in {}", path.display()))?;

    info!("Loaded {} pantry items", items.len());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_quantity_normalizes_unit() {
        let item = PantryItem::new("Flour", 2.0, "Cups");
        let quantity = item.quantity();
        assert_eq!(quantity.amount, 2.0);
        assert_eq!(quantity.unit, Unit::Cups);
    }

    #[test]
    fn test_expiration_status_buckets() {
        let today = date(2024, 3, 10);
        let item = |d| PantryItem::new("milk", 1.0, "L").with_expiration(d);

        assert_eq!(item(date(2024, 3, 9)).expiration_status(today), ExpirationStatus::Expired);
        assert_eq!(item(date(2024, 3, 10)).expiration_status(today), ExpirationStatus::Urgent { days: 0 });
        assert_eq!(item(date(2024, 3, 13)).expiration_status(today), ExpirationStatus::Urgent { days: 3 });
        assert_eq!(item(date(2024, 3, 17)).expiration_status(today), ExpirationStatus::Soon { days: 7 });
        assert_eq!(item(date(2024, 3, 18)).expiration_status(today), ExpirationStatus::Fresh { days: 8 });
        assert_eq!(PantryItem::new("salt", 1.0, "kg").expiration_status(today), ExpirationStatus::Unknown);
    }

    #[test]
    fn test_expiring_names_excludes_expired_and_undated() {
        let today = date(2024, 3, 10);
        let items = vec![
            PantryItem::new("spinach", 5.0, "oz").with_expiration(date(2024, 3, 12)),
            PantryItem::new("old milk", 1.0, "L").with_expiration(date(2024, 3, 8)),
            PantryItem::new("rice", 1.0, "kg"),
            PantryItem::new("cheese", 200.0, "g").with_expiration(date(2024, 3, 15)),
            PantryItem::new("honey", 1.0, "bottle").with_expiration(date(2024, 6, 1)),
        ];

        assert_eq!(expiring_item_names(&items, today, 5), vec!["spinach", "cheese"]);
        assert!(expiring_item_names(&[], today, 5).is_empty());
    }

    #[test]
    fn test_default_expiration_uses_shelf_life() {
        let bought = date(2024, 3, 1);
        assert_eq!(default_expiration("Milk", bought), date(2024, 3, 8));
        assert_eq!(default_expiration("salmon", bought), date(2024, 3, 3));
        assert_eq!(default_expiration("jackfruit", bought), date(2024, 3, 8));
    }

    #[test]
    fn test_sort_by_expiration() {
        let mut items = vec![
            PantryItem::new("rice", 1.0, "kg"),
            PantryItem::new("eggs", 6.0, "count").with_expiration(date(2024, 3, 20)),
            PantryItem::new("salt", 1.0, "kg"),
            PantryItem::new("fish", 1.0, "lb").with_expiration(date(2024, 3, 11)),
        ];
        sort_by_expiration(&mut items);

        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["fish", "eggs", "rice", "salt"]);
    }

    #[test]
    fn test_snapshot_item_json() {
        let json = r#"[{"name": "eggs", "quantity_amount": 6, "quantity_unit": "count",
                        "expiration_date": "2024-03-20"}]"#;
        let items: Vec<PantryItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].expiration_date, Some(date(2024, 3, 20)));
        assert!(items[0].id.is_empty());
    }
}
