//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"d400_production_calendar--dashboard"`) and a
//! `data-page-category` with one of the constants below.

/// List of records with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a005_issue--detail"));
        assert!(!is_valid_page_id("a005_issue"));
        assert!(!is_valid_page_id("--list"));
    }
}
