use serde::{Deserialize, Serialize};

/// One page of a server-side paginated list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_count: u64,
}

impl<T> Default for PagedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

/// Number of pages for `total` rows, never less than one.
pub fn total_pages(total: u64, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        return 1;
    }
    let size = page_size as u64;
    ((total + size - 1) / size) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 50), 1);
        assert_eq!(total_pages(1, 50), 1);
        assert_eq!(total_pages(50, 50), 1);
        assert_eq!(total_pages(51, 50), 2);
        assert_eq!(total_pages(10, 0), 1);
    }

    #[test]
    fn test_missing_fields_default() {
        let page: PagedResponse<i32> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
    }
}
