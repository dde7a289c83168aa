use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside data-zone="left" class="app-sidebar" class:app-sidebar--hidden=move || !ctx.left_open.get()>
            {children()}
        </aside>
    }
}
