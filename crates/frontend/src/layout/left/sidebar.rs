//! Navigation menu. Entries open their page as a tab.

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_labels::static_tab_label;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// (tab key, icon)
    items: Vec<(&'static str, &'static str)>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "production",
            label: "Production",
            icon: "calendar",
            items: vec![("d400_production_calendar", "calendar"), ("a004_bom", "layers")],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "package",
            items: vec![("a001_item", "package")],
        },
        MenuGroup {
            id: "logistics",
            label: "Logistics & gate",
            icon: "truck",
            items: vec![("a002_vehicle", "truck"), ("a003_visitor", "users")],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let groups = menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item app-sidebar__item--group"
                            on:click=move |_| expanded_groups.update(|ids| {
                                match ids.iter().position(|id| *id == group_id) {
                                    Some(pos) => {
                                        ids.remove(pos);
                                    }
                                    None => ids.push(group_id),
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|ids| ids.contains(&group_id))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=move || expanded_groups.with(|ids| ids.contains(&group_id))>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| {
                                    let label = static_tab_label(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
