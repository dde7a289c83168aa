use contracts::domain::a003_visitor::{Visitor, VisitorDto};
use leptos::prelude::*;

use super::view_model::VisitorDetailsViewModel;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn VisitorDetails(
    dto: VisitorDto,
    on_saved: Callback<Visitor>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = VisitorDetailsViewModel::new(dto);
    let title = if vm.is_edit_mode() { "Edit visit" } else { "Check in visitor" };

    let actions = move || {
        view! {
            <button
                class="button button--primary"
                on:click=move |_| vm.save_command(on_saved)
                disabled=move || vm.saving.get()
            >
                {icon("save")}
                "Save"
            </button>
        }
    };

    // text fields share one shape
    let text_field = move |id: &'static str,
                           label: &'static str,
                           get: fn(&VisitorDto) -> String,
                           set: fn(&mut VisitorDto, String)| {
        view! {
            <div class="form__group">
                <label class="form__label" for=id>{label}</label>
                <input
                    class="form__input"
                    id=id
                    type="text"
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| vm.form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <Modal title=title.to_string() on_close=on_close action_buttons=actions>
            <ErrorBanner error=vm.error />
            <div class="detail-form">
                <div class="form__row">
                    {text_field("visitor-name", "Full name", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {text_field(
                        "visitor-company",
                        "Company",
                        |f| f.company.clone().unwrap_or_default(),
                        |f, v| f.company = Some(v),
                    )}
                </div>
                <div class="form__row">
                    {text_field("visitor-reason", "Visit reason", |f| f.visit_reason.clone(), |f, v| f.visit_reason = v)}
                    {text_field(
                        "visitor-host",
                        "Host",
                        |f| f.host_name.clone().unwrap_or_default(),
                        |f, v| f.host_name = Some(v),
                    )}
                </div>
                <div class="form__row">
                    {text_field(
                        "visitor-plate",
                        "Vehicle plate",
                        |f| f.vehicle_plate.clone().unwrap_or_default(),
                        |f, v| f.vehicle_plate = Some(v),
                    )}
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="visitor-entry">"Entry"</label>
                        <input
                            class="form__input"
                            id="visitor-entry"
                            type="datetime-local"
                            prop:value=move || vm.entry_input()
                            on:change=move |ev| vm.set_entry(&event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="visitor-exit">"Exit"</label>
                        <input
                            class="form__input"
                            id="visitor-exit"
                            type="datetime-local"
                            prop:value=move || vm.exit_input()
                            on:change=move |ev| vm.set_exit(&event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>
        </Modal>
    }
}
