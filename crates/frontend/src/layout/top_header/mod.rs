//! Top bar: menu toggle, application title and the signed-in user.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::storage::current_user_name;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let user = current_user_name();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide menu" } else { "Show menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Production Portal"</span>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user}</span>
                </div>
            </div>
        </header>
    }
}
