pub mod state;

use contracts::domain::a002_vehicle::{FuelImportResult, Vehicle, VehicleDto};
use contracts::shared::paging::total_pages;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use self::state::create_state;
use crate::domain::a002_vehicle::api;
use crate::domain::a002_vehicle::ui::details::VehicleDetails;
use crate::domain::a002_vehicle::ui::fuel::{fuel_tab_key, FuelImportDialog};
use crate::layout::global_context::use_app_context;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::{TableCheckbox, TableSelectAll};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_opt, confirm, remove_by, sort_list, upsert_by, SearchInput, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toasts;

impl Sortable for Vehicle {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "plate" => self.plate.cmp(&other.plate),
            "brand" => cmp_opt(&self.brand, &other.brand),
            "model" => cmp_opt(&self.model, &other.model),
            "year" => self.year.cmp(&other.year),
            "fuel" => self.fuel_type.cmp(&other.fuel_type),
            "km" => self.current_km.cmp(&other.current_km),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn VehicleList() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details = RwSignal::new(None::<VehicleDto>);
    let import_open = RwSignal::new(false);
    let filters_open = RwSignal::new(false);

    let load_vehicles = move || {
        let query = state.with_untracked(|s| s.to_query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_vehicles(&query).await {
                Ok(page) => state.update(|s| {
                    s.vehicles = page.items;
                    s.total_count = page.total_count;
                    s.selected.clear();
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("failed to load vehicles: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_vehicles();
        }
    });

    let reload_from_first_page = move || {
        state.update(|s| s.page = 0);
        load_vehicles();
    };

    let on_saved = Callback::new(move |vehicle: Vehicle| {
        let plate = vehicle.plate.clone();
        state.update(|s| {
            if upsert_by(&mut s.vehicles, vehicle, |v| v.id) {
                s.total_count += 1;
            }
        });
        details.set(None);
        toasts.success(format!("Vehicle {} saved", plate));
    });

    let delete_selected = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.selected.iter().copied().collect());
        if ids.is_empty() || !confirm(&format!("Delete {} selected vehicle(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            let mut deleted = Vec::new();
            let mut failures = Vec::new();
            for id in ids {
                match api::delete_vehicle(id).await {
                    Ok(()) => deleted.push(id),
                    Err(e) => failures.push(format!("#{}: {}", id, e)),
                }
            }
            state.update(|s| {
                let removed = remove_by(&mut s.vehicles, &deleted, |v| v.id);
                s.total_count = s.total_count.saturating_sub(removed as u64);
                s.selected.retain(|id| !deleted.contains(id));
            });
            if failures.is_empty() {
                toasts.success(format!("{} vehicle(s) deleted", deleted.len()));
            } else {
                log::warn!("vehicle delete failures: {:?}", failures);
                set_error.set(Some(format!("Some vehicles were not deleted: {}", failures.join("; "))));
            }
        });
    };

    let open_fuel = move |vehicle: &Vehicle| {
        ctx.open_tab(&fuel_tab_key(vehicle.id), &format!("Fuel · {}", vehicle.plate));
    };

    let sorted_vehicles = move || {
        let mut vehicles = state.with(|s| s.vehicles.clone());
        state.with(|s| sort_list(&mut vehicles, s.sort.field, s.sort.ascending));
        vehicles
    };

    let header_cell = move |label: &'static str, field: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| state.update(|s| s.sort.toggle(field))
            >
                {label}
                <span class="sort-icon">{move || state.with(|s| s.sort.indicator(field))}</span>
            </th>
        }
    };

    let pagination = move || {
        view! {
            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| total_pages(s.total_count, s.page_size)))
                total_count=Signal::derive(move || state.with(|s| s.total_count as usize))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| {
                    state.update(|s| s.page = page);
                    load_vehicles();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load_vehicles();
                })
            />
        }
    };

    view! {
        <PageFrame page_id="a002_vehicle--list" category=PAGE_CAT_LIST>
            <PageHeader title="Vehicles" icon_name="truck">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| details.set(Some(VehicleDto::new()))>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| import_open.set(true)>
                    {icon("upload")}
                    " Import fuel"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_vehicles() disabled=loading>
                    {icon("refresh")}
                    " Refresh"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| delete_selected()
                    disabled=Signal::derive(move || state.with(|s| s.selected.is_empty()))
                >
                    {icon("trash")}
                    {move || format!(" Delete ({})", state.with(|s| s.selected.len()))}
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=filters_open
                active_filters_count=Signal::derive(move || {
                    state.with(|s| usize::from(!s.search.trim().is_empty()) + usize::from(!s.only_active))
                })
                toolbar=pagination
            >
                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| {
                            state.update(|s| s.search = text);
                            reload_from_first_page();
                        })
                        placeholder="Plate, brand or model".to_string()
                    />
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || state.with(|s| s.only_active)
                            on:change=move |ev| {
                                state.update(|s| s.only_active = event_target_checked(&ev));
                                reload_from_first_page();
                            }
                        />
                        "Active only"
                    </label>
                </Flex>
            </FilterPanel>

            <ErrorBanner error=error />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <TableSelectAll
                                all_selected=Signal::derive(move || {
                                    state.with(|s| !s.vehicles.is_empty() && s.selected.len() == s.vehicles.len())
                                })
                                on_change=Callback::new(move |checked: bool| {
                                    state.update(|s| {
                                        s.selected = if checked {
                                            s.vehicles.iter().map(|v| v.id).collect()
                                        } else {
                                            Default::default()
                                        };
                                    })
                                })
                            />
                            {header_cell("Plate", "plate")}
                            {header_cell("Brand", "brand")}
                            {header_cell("Model", "model")}
                            {header_cell("Year", "year")}
                            {header_cell("Fuel", "fuel")}
                            {header_cell("Km", "km")}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_vehicles().into_iter().map(|vehicle| {
                            let id = vehicle.id;
                            let dto = VehicleDto::from(&vehicle);
                            let for_fuel = vehicle.clone();
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || state.with(|s| s.selected.contains(&id))
                                    class:table__row--inactive=!vehicle.is_active
                                    on:click=move |_| details.set(Some(dto.clone()))
                                >
                                    <TableCheckbox
                                        checked=Signal::derive(move || state.with(|s| s.selected.contains(&id)))
                                        on_change=Callback::new(move |checked: bool| state.update(|s| {
                                            if checked {
                                                s.selected.insert(id);
                                            } else {
                                                s.selected.remove(&id);
                                            }
                                        }))
                                    />
                                    <td class="table__cell table__cell--mono">{vehicle.plate}</td>
                                    <td class="table__cell">{vehicle.brand.unwrap_or_default()}</td>
                                    <td class="table__cell">{vehicle.model.unwrap_or_default()}</td>
                                    <td class="table__cell">{vehicle.year.map(|y| y.to_string()).unwrap_or_default()}</td>
                                    <td class="table__cell">{vehicle.fuel_type}</td>
                                    <td class="table__cell table__cell--right">
                                        {vehicle.current_km.map(|km| km.to_string()).unwrap_or_default()}
                                    </td>
                                    <td class="table__cell" on:click=|ev| ev.stop_propagation()>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| open_fuel(&for_fuel)
                                        >
                                            {icon("fuel")}
                                            " Fuel"
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || loading.get()>
                    <div class="table__loading"><Spinner /></div>
                </Show>
            </div>

            {move || details.get().map(|dto| view! {
                <VehicleDetails dto=dto on_saved=on_saved on_close=Callback::new(move |_| details.set(None)) />
            })}

            <Show when=move || import_open.get()>
                <FuelImportDialog
                    on_imported=Callback::new(move |r: FuelImportResult| {
                        if r.imported > 0 {
                            toasts.success(r.summary());
                        }
                    })
                    on_close=Callback::new(move |_| import_open.set(false))
                />
            </Show>
        </PageFrame>
    }
}
