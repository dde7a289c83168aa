//! Tab key → page. Every tab key the portal opens is resolved here.

use crate::dashboards::ProductionCalendarDashboard;
use crate::domain::a001_item::ui::list::ItemList;
use crate::domain::a002_vehicle::ui::fuel::{vehicle_id_from_tab_key, FuelPurchasesPage};
use crate::domain::a002_vehicle::ui::list::VehicleList;
use crate::domain::a003_visitor::ui::list::VisitorList;
use crate::domain::a004_bom::ui::details::{bom_id_from_tab_key, BomDetailsPage};
use crate::domain::a004_bom::ui::list::BomList;
use crate::domain::a005_issue::scope::IssueScope;
use crate::domain::a005_issue::ui::details::IssueDetailsPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "d400_production_calendar" => view! { <ProductionCalendarDashboard /> }.into_any(),
        "a001_item" => view! { <ItemList /> }.into_any(),
        "a002_vehicle" => view! { <VehicleList /> }.into_any(),
        "a003_visitor" => view! { <VisitorList /> }.into_any(),
        "a004_bom" => view! { <BomList /> }.into_any(),
        _ => render_detail_tab(key),
    }
}

fn render_detail_tab(key: &str) -> AnyView {
    if let Some(scope) = IssueScope::from_tab_key(key) {
        return view! { <IssueDetailsPage scope=scope /> }.into_any();
    }
    if let Some(vehicle_id) = vehicle_id_from_tab_key(key) {
        return view! { <FuelPurchasesPage vehicle_id=vehicle_id /> }.into_any();
    }
    if let Some(id) = bom_id_from_tab_key(key) {
        return view! { <BomDetailsPage id=id /> }.into_any();
    }
    log::warn!("unknown tab key: {}", key);
    view! { <div class="placeholder">{format!("Unknown page: {}", key)}</div> }.into_any()
}
