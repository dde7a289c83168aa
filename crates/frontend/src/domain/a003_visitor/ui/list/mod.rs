pub mod state;

use chrono::NaiveDate;
use contracts::domain::a003_visitor::{format_duration, Visitor, VisitorDto};
use contracts::shared::dates::{parse_wire_date, to_wire_date};
use contracts::shared::paging::total_pages;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

use self::state::create_state;
use crate::domain::a003_visitor::api;
use crate::domain::a003_visitor::ui::details::VisitorDetails;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::{TableCheckbox, TableSelectAll};
use crate::shared::date_utils::{format_datetime, now_local, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    cmp_opt, confirm, remove_by, sort_list, upsert_by, SearchInput, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toasts;

impl Sortable for Visitor {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.full_name.to_lowercase().cmp(&other.full_name.to_lowercase()),
            "company" => cmp_opt(&self.company, &other.company),
            "host" => cmp_opt(&self.host_name, &other.host_name),
            "entry" => self.entry_time.cmp(&other.entry_time),
            "exit" => self.exit_time.cmp(&other.exit_time),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn VisitorList() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details = RwSignal::new(None::<VisitorDto>);
    let filters_open = RwSignal::new(false);
    let checking_out = RwSignal::new(None::<i64>);

    let load_visitors = move || {
        let query = state.with_untracked(|s| s.to_query());
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_visitors(&query).await {
                Ok(page) => state.update(|s| {
                    s.visitors = page.items;
                    s.total_count = page.total_count;
                    s.selected.clear();
                    s.is_loaded = true;
                }),
                Err(e) => {
                    log::error!("failed to load visitors {}..{}: {}", query.date_from, query.date_to, e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_visitors();
        }
    });

    let reload_from_first_page = move || {
        state.update(|s| s.page = 0);
        load_visitors();
    };

    let set_range = move |from: Option<NaiveDate>, to: Option<NaiveDate>| {
        state.update(|s| {
            if let Some(from) = from {
                s.date_from = from;
            }
            if let Some(to) = to {
                s.date_to = to;
            }
        });
        reload_from_first_page();
    };

    let on_saved = Callback::new(move |visitor: Visitor| {
        let name = visitor.full_name.clone();
        state.update(|s| {
            if upsert_by(&mut s.visitors, visitor, |v| v.id) {
                s.total_count += 1;
            }
        });
        details.set(None);
        toasts.success(format!("Visit of {} saved", name));
    });

    let checkout = move |id: i64| {
        checking_out.set(Some(id));
        spawn_local(async move {
            match api::checkout_visitor(id).await {
                Ok(visitor) => {
                    let name = visitor.full_name.clone();
                    state.update(|s| {
                        upsert_by(&mut s.visitors, visitor, |v| v.id);
                    });
                    toasts.success(format!("{} checked out", name));
                }
                Err(e) => {
                    log::error!("checkout of visitor #{} failed: {}", id, e);
                    set_error.set(Some(e));
                }
            }
            checking_out.set(None);
        });
    };

    let delete_selected = move || {
        let ids: Vec<i64> = state.with_untracked(|s| s.selected.iter().copied().collect());
        if ids.is_empty() || !confirm(&format!("Delete {} selected visit(s)?", ids.len())) {
            return;
        }
        spawn_local(async move {
            let mut deleted = Vec::new();
            let mut failures = Vec::new();
            for id in ids {
                match api::delete_visitor(id).await {
                    Ok(()) => deleted.push(id),
                    Err(e) => failures.push(format!("#{}: {}", id, e)),
                }
            }
            state.update(|s| {
                let removed = remove_by(&mut s.visitors, &deleted, |v| v.id);
                s.total_count = s.total_count.saturating_sub(removed as u64);
                s.selected.retain(|id| !deleted.contains(id));
            });
            if failures.is_empty() {
                toasts.success(format!("{} visit(s) deleted", deleted.len()));
            } else {
                set_error.set(Some(format!("Some visits were not deleted: {}", failures.join("; "))));
            }
        });
    };

    let sorted_visitors = move || {
        let mut visitors = state.with(|s| s.visitors.clone());
        state.with(|s| sort_list(&mut visitors, s.sort.field, s.sort.ascending));
        visitors
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
                    load_visitors();
                })
                on_page_size_change=Callback::new(move |size| {
                    state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    });
                    load_visitors();
                })
            />
        }
    };

    let active_filters = Signal::derive(move || {
        state.with(|s| usize::from(!s.is_single_day(today())) + usize::from(!s.search.trim().is_empty()))
    });

    view! {
        <PageFrame page_id="a003_visitor--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Visitors"
                subtitle=Signal::derive(move || Some(format!("{} on site", state.with(|s| s.inside_count()))))
                icon_name="users"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| details.set(Some(VisitorDto::check_in(now_local())))
                >
                    {icon("plus")}
                    " Check in"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_visitors() disabled=loading>
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

            <FilterPanel is_expanded=filters_open active_filters_count=active_filters toolbar=pagination>
                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <div class="form__group">
                        <Label>"From"</Label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || state.with(|s| to_wire_date(s.date_from))
                            on:change=move |ev| set_range(parse_wire_date(&event_target_value(&ev)).ok(), None)
                        />
                    </div>
                    <div class="form__group">
                        <Label>"To"</Label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || state.with(|s| to_wire_date(s.date_to))
                            on:change=move |ev| set_range(None, parse_wire_date(&event_target_value(&ev)).ok())
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_range(Some(today()), Some(today()))
                    >
                        "Today"
                    </Button>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |text: String| {
                            state.update(|s| s.search = text);
                            reload_from_first_page();
                        })
                        placeholder="Name, company or host".to_string()
                    />
                </Flex>
            </FilterPanel>

            <ErrorBanner error=error />

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <TableSelectAll
                                all_selected=Signal::derive(move || {
                                    state.with(|s| !s.visitors.is_empty() && s.selected.len() == s.visitors.len())
                                })
                                on_change=Callback::new(move |checked: bool| {
                                    state.update(|s| {
                                        s.selected = if checked {
                                            s.visitors.iter().map(|v| v.id).collect()
                                        } else {
                                            Default::default()
                                        };
                                    })
                                })
                            />
                            {header_cell("Name", "name")}
                            {header_cell("Company", "company")}
                            <th class="table__header-cell">"Reason"</th>
                            {header_cell("Host", "host")}
                            <th class="table__header-cell">"Plate"</th>
                            {header_cell("Entry", "entry")}
                            {header_cell("Exit", "exit")}
                            <th class="table__header-cell">"Duration"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let now = now_local();
                            sorted_visitors().into_iter().map(|visitor| {
                                let id = visitor.id;
                                let inside = visitor.is_inside();
                                let duration = format_duration(visitor.duration(now));
                                let dto = VisitorDto::from(&visitor);
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || state.with(|s| s.selected.contains(&id))
                                        class:table__row--highlight=inside
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
                                        <td class="table__cell">{visitor.full_name}</td>
                                        <td class="table__cell">{visitor.company.unwrap_or_default()}</td>
                                        <td class="table__cell">{visitor.visit_reason}</td>
                                        <td class="table__cell">{visitor.host_name.unwrap_or_default()}</td>
                                        <td class="table__cell table__cell--mono">{visitor.vehicle_plate.unwrap_or_default()}</td>
                                        <td class="table__cell">{format_datetime(visitor.entry_time)}</td>
                                        <td class="table__cell">
                                            {visitor.exit_time.map(format_datetime).unwrap_or_default()}
                                        </td>
                                        <td class="table__cell table__cell--right">{duration}</td>
                                        <td class="table__cell" on:click=|ev| ev.stop_propagation()>
                                            {inside.then(|| view! {
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| checkout(id)
                                                    disabled=Signal::derive(move || checking_out.get() == Some(id))
                                                >
                                                    {icon("log-out")}
                                                    " Check out"
                                                </Button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || loading.get()>
                    <div class="table__loading"><Spinner /></div>
                </Show>
            </div>

            {move || details.get().map(|dto| view! {
                <VisitorDetails dto=dto on_saved=on_saved on_close=Callback::new(move |_| details.set(None)) />
            })}
        </PageFrame>
    }
}
