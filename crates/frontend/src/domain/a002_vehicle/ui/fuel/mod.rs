//! Fuel purchases of one vehicle, plus the fuel card import.

mod import;

pub use import::FuelImportDialog;

use chrono::{Datelike, NaiveDate};
use contracts::domain::a002_vehicle::{FuelPurchase, FuelPurchaseQuery, FuelSummary};
use contracts::shared::dates::{parse_wire_date, to_wire_date};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_vehicle::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_number, StatCard};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

pub const FUEL_TAB_PREFIX: &str = "a002_vehicle_fuel_";

pub fn fuel_tab_key(vehicle_id: i64) -> String {
    format!("{}{}", FUEL_TAB_PREFIX, vehicle_id)
}

pub fn vehicle_id_from_tab_key(key: &str) -> Option<i64> {
    key.strip_prefix(FUEL_TAB_PREFIX)?.parse().ok()
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

#[component]
pub fn FuelPurchasesPage(vehicle_id: i64) -> impl IntoView {
    let purchases = RwSignal::new(Vec::<FuelPurchase>::new());
    let plate = RwSignal::new(String::new());
    let date_from = RwSignal::new(to_wire_date(first_of_month(today())));
    let date_to = RwSignal::new(to_wire_date(today()));
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let import_open = RwSignal::new(false);

    let ctx = use_app_context();
    spawn_local(async move {
        match api::fetch_vehicle(vehicle_id).await {
            Ok(v) => {
                ctx.update_tab_title(&fuel_tab_key(vehicle_id), &format!("Fuel · {}", v.plate));
                plate.set(v.display_name());
            }
            Err(e) => log::warn!("vehicle {} not loaded: {}", vehicle_id, e),
        }
    });

    let load = move || {
        let query = FuelPurchaseQuery {
            date_from: Some(date_from.get_untracked()).filter(|d| parse_wire_date(d).is_ok()),
            date_to: Some(date_to.get_untracked()).filter(|d| parse_wire_date(d).is_ok()),
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_fuel_purchases(vehicle_id, &query).await {
                Ok(list) => purchases.set(list),
                Err(e) => {
                    log::error!("fuel purchases of vehicle {} failed: {}", vehicle_id, e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };
    load();

    let summary = Memo::new(move |_| purchases.with(|p| FuelSummary::from_purchases(p)));

    view! {
        <PageFrame page_id="a002_vehicle_fuel--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title=Signal::derive(move || format!("Fuel · {}", plate.get()))
                icon_name="fuel"
            >
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || date_from.get()
                    on:change=move |ev| {
                        date_from.set(event_target_value(&ev));
                        load();
                    }
                />
                <span>"–"</span>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || date_to.get()
                    on:change=move |ev| {
                        date_to.set(event_target_value(&ev));
                        load();
                    }
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load() disabled=loading>
                    {icon("refresh")}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| import_open.set(true)>
                    {icon("upload")}
                    " Import"
                </Button>
            </PageHeader>

            <ErrorBanner error=error />

            <div class="stat-cards">
                <StatCard
                    label="Purchases"
                    icon_name="list"
                    value=Signal::derive(move || summary.get().count.to_string())
                />
                <StatCard
                    label="Liters"
                    icon_name="fuel"
                    value=Signal::derive(move || format_number(summary.get().total_liters, 2))
                />
                <StatCard
                    label="Total amount"
                    icon_name="package"
                    value=Signal::derive(move || format_number(summary.get().total_amount, 2))
                />
                <StatCard
                    label="Average price / l"
                    icon_name="layers"
                    value=Signal::derive(move || format_number(summary.get().average_unit_price, 3))
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Station"</th>
                            <th class="table__header-cell table__cell--right">"Liters"</th>
                            <th class="table__header-cell table__cell--right">"Unit price"</th>
                            <th class="table__header-cell table__cell--right">"Amount"</th>
                            <th class="table__header-cell table__cell--right">"Km"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || purchases.get()
                            key=|p| p.id
                            children=|p| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format_date(p.purchase_date)}</td>
                                    <td class="table__cell">{p.station.unwrap_or_default()}</td>
                                    <td class="table__cell table__cell--right">{format_number(p.liters, 2)}</td>
                                    <td class="table__cell table__cell--right">{format_number(p.unit_price, 3)}</td>
                                    <td class="table__cell table__cell--right">{format_number(p.total_amount, 2)}</td>
                                    <td class="table__cell table__cell--right">
                                        {p.km.map(|km| format_number(km as f64, 0)).unwrap_or_default()}
                                    </td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || !loading.get() && purchases.with(|p| p.is_empty())>
                    <div class="table__empty">"No fuel purchases in this period."</div>
                </Show>
            </div>

            <Show when=move || import_open.get()>
                <FuelImportDialog
                    on_imported=Callback::new(move |_| load())
                    on_close=Callback::new(move |_| import_open.set(false))
                />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_tab_key() {
        assert_eq!(fuel_tab_key(12), "a002_vehicle_fuel_12");
        assert_eq!(vehicle_id_from_tab_key("a002_vehicle_fuel_12"), Some(12));
        assert_eq!(vehicle_id_from_tab_key("a002_vehicle_fuel_x"), None);
        assert_eq!(vehicle_id_from_tab_key("a002_vehicle"), None);
    }
}
