use contracts::domain::a001_item::{Item, ItemListQuery};
use contracts::shared::validation::optional_text;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::config::config;
use crate::shared::list_utils::SortState;

#[derive(Clone, Debug)]
pub struct ItemListState {
    pub items: Vec<Item>,
    pub total_count: u64,
    /// 0-based; the API counts from 1.
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub category: String,
    pub only_active: bool,
    pub sort: SortState,
    pub selected: HashSet<i64>,
    pub is_loaded: bool,
}

impl ItemListState {
    fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: 0,
            page_size,
            search: String::new(),
            category: String::new(),
            only_active: false,
            sort: SortState::new("code"),
            selected: HashSet::new(),
            is_loaded: false,
        }
    }

    pub fn to_query(&self) -> ItemListQuery {
        ItemListQuery {
            search: optional_text(&self.search),
            category: optional_text(&self.category),
            only_active: self.only_active,
            page: self.page + 1,
            page_size: self.page_size,
        }
    }

    pub fn active_filters(&self) -> usize {
        [
            !self.search.trim().is_empty(),
            !self.category.trim().is_empty(),
            self.only_active,
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

pub fn create_state() -> RwSignal<ItemListState> {
    RwSignal::new(ItemListState::new(config().lists.page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_one_based_and_trimmed() {
        let mut state = ItemListState::new(25);
        state.page = 2;
        state.search = "  bolt ".into();
        state.category = "   ".into();
        let query = state.to_query();
        assert_eq!(query.page, 3);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.search.as_deref(), Some("bolt"));
        assert_eq!(query.category, None);
        assert_eq!(state.active_filters(), 1);
    }
}
