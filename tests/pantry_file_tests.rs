#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pantry_planner::pantry::{load_pantry_snapshot, sort_by_expiration, ExpirationStatus};
    use pantry_planner::units::Unit;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_snapshot(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_snapshot() {
        let temp_file = write_snapshot(
            r#"[
                {"id": "a1", "name": "Spinach", "quantity_amount": 5, "quantity_unit": "oz",
                 "expiration_date": "2024-04-03"},
                {"id": "a2", "name": "Rice", "quantity_amount": 2.5, "quantity_unit": "Kilograms"},
                {"id": "a3", "name": "Milk", "quantity_amount": 1, "quantity_unit": "gallon",
                 "expiration_date": "2024-04-01"}
            ]"#,
        );

        let mut items = load_pantry_snapshot(temp_file.path()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].quantity().unit, Unit::Kilograms);

        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(items[0].expiration_status(today), ExpirationStatus::Urgent { days: 2 });
        assert_eq!(items[1].expiration_status(today), ExpirationStatus::Unknown);

        sort_by_expiration(&mut items);
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["a3", "a1", "a2"]);
    }

    #[test]
    fn test_empty_snapshot() {
        let temp_file = write_snapshot("[]");
        assert!(load_pantry_snapshot(temp_file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_snapshot_reports_path() {
        let temp_file = write_snapshot("{not json");
        let error = load_pantry_snapshot(temp_file.path()).unwrap_err();
        assert!(error.to_string().contains("Invalid pantry JSON"));
    }

    #[test]
    fn test_missing_file() {
        let error = load_pantry_snapshot("/nonexistent/pantry.json").unwrap_err();
        assert!(error.to_string().contains("Failed to read pantry file"));
    }
}
