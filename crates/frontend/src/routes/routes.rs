use crate::layout::center::Tabs;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Tabs stand in for routes: the active tab is mirrored in `?active=`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let tabs_store = use_app_context();
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
