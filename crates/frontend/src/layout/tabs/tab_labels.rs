//! Titles of the tabs. Static keys map to fixed labels; detail keys carry
//! their subject in the key and get a label built from it.

use crate::domain::a002_vehicle::ui::fuel::vehicle_id_from_tab_key;
use crate::domain::a004_bom::ui::details::bom_id_from_tab_key;
use crate::domain::a005_issue::scope::IssueScope;

/// Label of a top-level (menu) tab, empty for unknown keys.
pub fn static_tab_label(key: &str) -> &'static str {
    match key {
        "d400_production_calendar" => "Production calendar",
        "a001_item" => "Items",
        "a002_vehicle" => "Vehicles",
        "a003_visitor" => "Visitors",
        "a004_bom" => "Bills of materials",
        _ => "",
    }
}

/// Title for any tab key, used when a tab is restored from the URL.
///
/// Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    let label = static_tab_label(key);
    if !label.is_empty() {
        return label.to_string();
    }
    if let Some(scope) = IssueScope::from_tab_key(key) {
        return scope.tab_title(None);
    }
    if let Some(id) = vehicle_id_from_tab_key(key) {
        return format!("Fuel · #{}", id);
    }
    if let Some(id) = bom_id_from_tab_key(key) {
        return format!("BOM #{}", id);
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_item"), "Items");
        assert_eq!(tab_label_for_key("a002_vehicle_fuel_4"), "Fuel · #4");
        assert_eq!(tab_label_for_key("a004_bom_12"), "BOM #12");
        assert_eq!(tab_label_for_key("a005_issue_day_2025-10-21"), "Issues · 21.10.2025");
        assert_eq!(tab_label_for_key("nope"), "nope");
    }
}
