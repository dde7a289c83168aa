pub mod state;

use contracts::domain::a001_item::{Item, ItemDto};
use contracts::shared::paging::total_pages;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use self::state::create_state;
use crate::domain::a001_item::api;
use crate::domain::a001_item::ui::details::ItemDetails;
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

impl Sortable for Item {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.to_lowercase().cmp(&other.code.to_lowercase()),
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => cmp_opt(&self.category, &other.category),
            "unit" => self.unit.cmp(&other.unit),
            "active" => self.is_active.cmp(&other.is_active),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details = RwSignal::new(None::<ItemDto>);
    let filters_open = RwSignal::new(false);

    let load_items = move || {
        let query = state.with_untracked(|s| s.to_query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_items(&query).await {
                Ok(page) => state.update(|s| {
                    s.items = page.items;
                    s.total_count = page.total_count;
                    s.selected.clear();
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("failed to load items: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let reload_from_first_page = move || {
        state.update(|s| s.page = 0);
        load_items();
    };

    let on_saved = Callback::new(move |item: Item| {
        let code = item.code.clone();
        state.update(|s| {
            if upsert_by(&mut s.items, item, |i| i.id) {
                s.total_count += 1;
            }
        });
        details.set(None);
        toasts.success(format!("Item {} saved", code));
    });

    let delete_selected = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.selected.iter().copied().collect());
        if ids.is_empty() || !confirm(&format!("Delete {} selected item(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            let mut deleted = Vec::new();
            let mut failures = Vec::new();
            for id in ids {
                match api::delete_item(id).await {
                    Ok(()) => deleted.push(id),
                    Err(e) => failures.push(format!("#{}: {}", id, e)),
                }
            }
            log::info!("deleted {} items, {} failed", deleted.len(), failures.len());
            state.update(|s| {
                let removed = remove_by(&mut s.items, &deleted, |i| i.id);
                s.total_count = s.total_count.saturating_sub(removed as u64);
                s.selected.retain(|id| !deleted.contains(id));
            });
            if failures.is_empty() {
                toasts.success(format!("{} item(s) deleted", deleted.len()));
            } else {
                set_error.set(Some(format!("Some items were not deleted: {}", failures.join("; "))));
            }
        });
    };

    let sorted_items = move || {
        let mut items = state.with(|s| s.items.clone());
        state.with(|s| sort_list(&mut items, s.sort.field, s.sort.ascending));
        items
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
                    load_items();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load_items();
                })
            />
        }
    };

    view! {
        <PageFrame page_id="a001_item--list" category=PAGE_CAT_LIST>
            <PageHeader title="Items" icon_name="package">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| details.set(Some(ItemDto::new()))>
                    {icon("plus")}
                    " New"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_items() disabled=loading>
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
                active_filters_count=Signal::derive(move || state.with(|s| s.active_filters()))
                toolbar=pagination
            >
                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| {
                            state.update(|s| s.search = text);
                            reload_from_first_page();
                        })
                        placeholder="Code or name".to_string()
                    />
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Category"
                        prop:value=move || state.with(|s| s.category.clone())
                        on:change=move |ev| {
                            state.update(|s| s.category = event_target_value(&ev));
                            reload_from_first_page();
                        }
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
                                    state.with(|s| !s.items.is_empty() && s.selected.len() == s.items.len())
                                })
                                on_change=Callback::new(move |checked: bool| {
                                    state.update(|s| {
                                        s.selected = if checked {
                                            s.items.iter().map(|i| i.id).collect()
                                        } else {
                                            Default::default()
                                        };
                                    })
                                })
                            />
                            {header_cell("Code", "code")}
                            {header_cell("Name", "name")}
                            {header_cell("Category", "category")}
                            {header_cell("Unit", "unit")}
                            {header_cell("Active", "active")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|item| {
                            let id = item.id;
                            let dto = ItemDto::from(&item);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || state.with(|s| s.selected.contains(&id))
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
                                    <td class="table__cell">{item.code}</td>
                                    <td class="table__cell">{item.name}</td>
                                    <td class="table__cell">{item.category.unwrap_or_default()}</td>
                                    <td class="table__cell">{item.unit}</td>
                                    <td class="table__cell">{if item.is_active { "✓" } else { "" }}</td>
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
                <ItemDetails dto=dto on_saved=on_saved on_close=Callback::new(move |_| details.set(None)) />
            })}
        </PageFrame>
    }
}
