use contracts::domain::a001_item::{Item, ItemDto};
use leptos::prelude::*;

use super::view_model::ItemDetailsViewModel;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn ItemDetails(dto: ItemDto, on_saved: Callback<Item>, on_close: Callback<()>) -> impl IntoView {
    let vm = ItemDetailsViewModel::new(dto);
    let title = if vm.is_edit_mode() { "Edit item" } else { "New item" };

    let actions = move || {
        view! {
            <button
                class="button button--primary"
                on:click=move |_| vm.save_command(on_saved)
                disabled=move || vm.saving.get()
            >
                {icon("save")}
                {move || if vm.saving.get() { "Saving..." } else { "Save" }}
            </button>
        }
    };

    view! {
        <Modal title=title.to_string() on_close=on_close action_buttons=actions>
            <ErrorBanner error=vm.error />
            <div class="detail-form">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="item-code">"Code"</label>
                        <input
                            class="form__input"
                            id="item-code"
                            type="text"
                            prop:value=move || vm.form.with(|f| f.code.clone())
                            on:input=move |ev| vm.form.update(|f| f.code = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="item-unit">"Unit"</label>
                        <input
                            class="form__input"
                            id="item-unit"
                            type="text"
                            prop:value=move || vm.form.with(|f| f.unit.clone())
                            on:input=move |ev| vm.form.update(|f| f.unit = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form__group">
                    <label class="form__label" for="item-name">"Name"</label>
                    <input
                        class="form__input"
                        id="item-name"
                        type="text"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="item-category">"Category"</label>
                    <input
                        class="form__input"
                        id="item-category"
                        type="text"
                        prop:value=move || vm.form.with(|f| f.category.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.category = Some(event_target_value(&ev)))
                    />
                </div>
                <div class="form__group">
                    <label class="form__label" for="item-description">"Description"</label>
                    <textarea
                        class="form__textarea"
                        id="item-description"
                        prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.description = Some(event_target_value(&ev)))
                    />
                </div>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.with(|f| f.is_active)
                        on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "Active"
                </label>
            </div>
        </Modal>
    }
}
