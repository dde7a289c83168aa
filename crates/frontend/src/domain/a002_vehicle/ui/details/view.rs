use contracts::domain::a002_vehicle::{Vehicle, VehicleDto};
use leptos::prelude::*;

use super::view_model::{parse_optional_number, VehicleDetailsViewModel, FUEL_TYPES};
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

#[component]
pub fn VehicleDetails(
    dto: VehicleDto,
    on_saved: Callback<Vehicle>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = VehicleDetailsViewModel::new(dto);
    let title = if vm.is_edit_mode() { "Edit vehicle" } else { "New vehicle" };

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

    view! {
        <Modal title=title.to_string() on_close=on_close action_buttons=actions>
            <ErrorBanner error=vm.error />
            <div class="detail-form">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="vehicle-plate">"Plate"</label>
                        <input
                            class="form__input form__input--upper"
                            id="vehicle-plate"
                            type="text"
                            prop:value=move || vm.form.with(|f| f.plate.clone())
                            on:input=move |ev| vm.form.update(|f| f.plate = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="vehicle-fuel">"Fuel type"</label>
                        <select
                            class="form__select"
                            id="vehicle-fuel"
                            prop:value=move || vm.form.with(|f| f.fuel_type.clone())
                            on:change=move |ev| vm.form.update(|f| f.fuel_type = event_target_value(&ev))
                        >
                            {FUEL_TYPES
                                .iter()
                                .map(|t| view! { <option value=*t>{*t}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="vehicle-brand">"Brand"</label>
                        <input
                            class="form__input"
                            id="vehicle-brand"
                            type="text"
                            prop:value=move || vm.form.with(|f| f.brand.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.brand = Some(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="vehicle-model">"Model"</label>
                        <input
                            class="form__input"
                            id="vehicle-model"
                            type="text"
                            prop:value=move || vm.form.with(|f| f.model.clone().unwrap_or_default())
                            on:input=move |ev| vm.form.update(|f| f.model = Some(event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="vehicle-year">"Year"</label>
                        <input
                            class="form__input"
                            id="vehicle-year"
                            type="number"
                            prop:value=move || vm.form.with(|f| f.year.map(|y| y.to_string()).unwrap_or_default())
                            on:change=move |ev| vm.form.update(|f| f.year = parse_optional_number(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="vehicle-km">"Current km"</label>
                        <input
                            class="form__input"
                            id="vehicle-km"
                            type="number"
                            prop:value=move || vm.form.with(|f| f.current_km.map(|k| k.to_string()).unwrap_or_default())
                            on:change=move |ev| vm.form.update(|f| f.current_km = parse_optional_number(&event_target_value(&ev)))
                        />
                    </div>
                </div>
                <div class="form__group">
                    <label class="form__label" for="vehicle-notes">"Notes"</label>
                    <textarea
                        class="form__textarea"
                        id="vehicle-notes"
                        prop:value=move || vm.form.with(|f| f.notes.clone().unwrap_or_default())
                        on:input=move |ev| vm.form.update(|f| f.notes = Some(event_target_value(&ev)))
                    />
                </div>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.with(|f| f.is_active)
                        on:change=move |ev| vm.form.update(|f| f.is_active = event_target_checked(&ev))
                    />
                    "In service"
                </label>
            </div>
        </Modal>
    }
}
