use contracts::domain::a004_bom::{BomHeader, BomListQuery};
use contracts::shared::validation::optional_text;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::config::config;
use crate::shared::list_utils::SortState;

#[derive(Clone, Debug)]
pub struct BomListState {
    pub boms: Vec<BomHeader>,
    pub total_count: u64,
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub sort: SortState,
    pub selected: HashSet<i64>,
    pub is_loaded: bool,
}

impl BomListState {
    fn new(page_size: usize) -> Self {
        Self {
            boms: Vec::new(),
            total_count: 0,
            page: 0,
            page_size,
            search: String::new(),
            sort: SortState::new("product"),
            selected: HashSet::new(),
            is_loaded: false,
        }
    }

    pub fn to_query(&self) -> BomListQuery {
        BomListQuery {
            search: optional_text(&self.search),
            page: self.page + 1,
            ..BomListQuery::first_page(self.page_size)
        }
    }
}

pub fn create_state() -> RwSignal<BomListState> {
    RwSignal::new(BomListState::new(config().lists.page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query() {
        let mut state = BomListState::new(25);
        assert_eq!(state.to_query(), BomListQuery::first_page(25));
        state.page = 1;
        state.search = " KAB ".into();
        let query = state.to_query();
        assert_eq!(query.page, 2);
        assert_eq!(query.search.as_deref(), Some("KAB"));
    }
}
