use chrono::Datelike;
use contracts::domain::a002_vehicle::{Vehicle, VehicleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_vehicle::api;
use crate::shared::date_utils::today;

pub const FUEL_TYPES: [&str; 5] = ["Diesel", "Gasoline", "LPG", "Electric", "Hybrid"];

/// Empty or unparsable numeric input means "not set".
pub fn parse_optional_number<T: std::str::FromStr>(input: &str) -> Option<T> {
    input.trim().parse().ok()
}

#[derive(Clone, Copy)]
pub struct VehicleDetailsViewModel {
    pub form: RwSignal<VehicleDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl VehicleDetailsViewModel {
    pub fn new(dto: VehicleDto) -> Self {
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Callback<Vehicle>) {
        let dto = self.form.get_untracked().normalized();
        if let Err(e) = dto.validate(today().year()) {
            self.error.set(Some(e.to_string()));
            return;
        }
        // show the normalized plate in the form
        self.form.update(|f| f.plate = dto.plate.clone());

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match dto.id {
                Some(id) => api::update_vehicle(id, &dto).await,
                None => api::create_vehicle(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(vehicle) => {
                    log::info!("vehicle {} saved", vehicle.plate);
                    on_saved.run(vehicle);
                }
                Err(e) => {
                    log::error!("saving vehicle {} failed: {}", dto.plate, e);
                    error.set(Some(e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_number() {
        assert_eq!(parse_optional_number::<i32>(" 2019 "), Some(2019));
        assert_eq!(parse_optional_number::<i32>(""), None);
        assert_eq!(parse_optional_number::<i64>("12a"), None);
    }
}
