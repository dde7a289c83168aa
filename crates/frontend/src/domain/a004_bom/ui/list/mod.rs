pub mod state;

use contracts::domain::a004_bom::BomHeader;
use contracts::shared::paging::total_pages;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use self::state::create_state;
use crate::domain::a004_bom::api;
use crate::domain::a004_bom::ui::details::bom_tab_key;
use crate::domain::a004_bom::ui::import::BomImportReview;
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

impl Sortable for BomHeader {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product" => self.product_code.cmp(&other.product_code),
            "name" => self.product_name.to_lowercase().cmp(&other.product_name.to_lowercase()),
            "revision" => cmp_opt(&self.revision, &other.revision),
            "imported" => cmp_opt(&self.imported_at, &other.imported_at),
            "lines" => self.line_count.cmp(&other.line_count),
            _ => Ordering::Equal,
        }
    }
}

fn bom_tab_title(bom: &BomHeader) -> String {
    match &bom.revision {
        Some(revision) => format!("BOM · {} rev. {}", bom.product_code, revision),
        None => format!("BOM · {}", bom.product_code),
    }
}

#[component]
pub fn BomList() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let import_open = RwSignal::new(false);
    let filters_open = RwSignal::new(false);

    let load_boms = move || {
        let query = state.with_untracked(|s| s.to_query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_boms(&query).await {
                Ok(page) => state.update(|s| {
                    s.boms = page.items;
                    s.total_count = page.total_count;
                    s.selected.clear();
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("failed to load BOMs: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_boms();
        }
    });

    let on_created = Callback::new(move |header: BomHeader| {
        let title = bom_tab_title(&header);
        let key = bom_tab_key(header.id);
        state.update(|s| {
            if upsert_by(&mut s.boms, header, |b| b.id) {
                s.total_count += 1;
            }
        });
        import_open.set(false);
        toasts.success(format!("{} saved", title));
        ctx.open_tab(&key, &title);
    });

    let delete_selected = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.selected.iter().copied().collect());
        if ids.is_empty() || !confirm(&format!("Delete {} selected BOM(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            let mut deleted = Vec::new();
            let mut failures = Vec::new();
            for id in ids {
                match api::delete_bom(id).await {
                    Ok(()) => deleted.push(id),
                    Err(e) => failures.push(format!("#{}: {}", id, e)),
                }
            }
            state.update(|s| {
                let removed = remove_by(&mut s.boms, &deleted, |b| b.id);
                s.total_count = s.total_count.saturating_sub(removed as u64);
                s.selected.retain(|id| !deleted.contains(id));
            });
            for id in &deleted {
                ctx.close_tab(&bom_tab_key(*id));
            }
            if failures.is_empty() {
                toasts.success(format!("{} BOM(s) deleted", deleted.len()));
            } else {
                set_error.set(Some(format!("Some BOMs were not deleted: {}", failures.join("; "))));
            }
        });
    };

    let sorted_boms = move || {
        let mut boms = state.with(|s| s.boms.clone());
        state.with(|s| sort_list(&mut boms, s.sort.field, s.sort.ascending));
        boms
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
                    load_boms();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load_boms();
                })
            />
        }
    };

    view! {
        <PageFrame page_id="a004_bom--list" category=PAGE_CAT_LIST>
            <PageHeader title="Bills of materials" icon_name="layers">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| import_open.set(true)>
                    {icon("upload")}
                    " Import"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_boms() disabled=loading>
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
                active_filters_count=Signal::derive(move || state.with(|s| usize::from(!s.search.trim().is_empty())))
                toolbar=pagination
            >
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |text: String| {
                        state.update(|s| {
                            s.search = text;
                            s.page = 0;
                        });
                        load_boms();
                    })
                    placeholder="Product code or name".to_string()
                />
            </FilterPanel>

            <ErrorBanner error=error />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <TableSelectAll
                                all_selected=Signal::derive(move || {
                                    state.with(|s| !s.boms.is_empty() && s.selected.len() == s.boms.len())
                                })
                                on_change=Callback::new(move |checked: bool| {
                                    state.update(|s| {
                                        s.selected = if checked {
                                            s.boms.iter().map(|b| b.id).collect()
                                        } else {
                                            Default::default()
                                        };
                                    })
                                })
                            />
                            {header_cell("Product", "product")}
                            {header_cell("Name", "name")}
                            {header_cell("Revision", "revision")}
                            <th class="table__header-cell">"File"</th>
                            {header_cell("Imported", "imported")}
                            {header_cell("Lines", "lines")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_boms().into_iter().map(|bom| {
                            let id = bom.id;
                            let key = bom_tab_key(id);
                            let title = bom_tab_title(&bom);
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || state.with(|s| s.selected.contains(&id))
                                    on:click=move |_| ctx.open_tab(&key, &title)
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
                                    <td class="table__cell table__cell--mono">{bom.product_code}</td>
                                    <td class="table__cell">{bom.product_name}</td>
                                    <td class="table__cell">{bom.revision.unwrap_or_default()}</td>
                                    <td class="table__cell">{bom.file_name.unwrap_or_default()}</td>
                                    <td class="table__cell">{bom.imported_at.unwrap_or_default()}</td>
                                    <td class="table__cell table__cell--right">{bom.line_count}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || loading.get()>
                    <div class="table__loading"><Spinner /></div>
                </Show>
            </div>

            <Show when=move || import_open.get()>
                <BomImportReview
                    on_created=on_created
                    on_close=Callback::new(move |_| import_open.set(false))
                />
            </Show>
        </PageFrame>
    }
}
