use contracts::domain::a002_vehicle::{Vehicle, VehicleListQuery};
use contracts::shared::validation::optional_text;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::shared::config::config;
use crate::shared::list_utils::SortState;

#[derive(Clone, Debug)]
pub struct VehicleListState {
    pub vehicles: Vec<Vehicle>,
    pub total_count: u64,
    pub page: usize,
    pub page_size: usize,
    pub search: String,
    pub only_active: bool,
    pub sort: SortState,
    pub selected: HashSet<i64>,
    pub is_loaded: bool,
}

impl VehicleListState {
    fn new(page_size: usize) -> Self {
        Self {
            vehicles: Vec::new(),
            total_count: 0,
            page: 0,
            page_size,
            search: String::new(),
            only_active: true,
            sort: SortState::new("plate"),
            selected: HashSet::new(),
            is_loaded: false,
        }
    }

    pub fn to_query(&self) -> VehicleListQuery {
        VehicleListQuery {
            search: optional_text(&self.search),
            only_active: self.only_active,
            page: self.page + 1,
            page_size: self.page_size,
        }
    }
}

pub fn create_state() -> RwSignal<VehicleListState> {
    RwSignal::new(VehicleListState::new(config().lists.page_size))
}
