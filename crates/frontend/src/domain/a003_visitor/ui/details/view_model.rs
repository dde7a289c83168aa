use chrono::NaiveDateTime;
use contracts::domain::a003_visitor::{Visitor, VisitorDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_visitor::api;
use crate::shared::date_utils::{parse_datetime_input, to_datetime_input};

#[derive(Clone, Copy)]
pub struct VisitorDetailsViewModel {
    pub form: RwSignal<VisitorDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl VisitorDetailsViewModel {
    pub fn new(dto: VisitorDto) -> Self {
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn entry_input(&self) -> String {
        self.form.with(|f| to_datetime_input(f.entry_time))
    }

    pub fn exit_input(&self) -> String {
        self.form
            .with(|f| f.exit_time.map(to_datetime_input).unwrap_or_default())
    }

    /// Unparsable input leaves the entry time unchanged.
    pub fn set_entry(&self, value: &str) {
        match parse_datetime_input(value) {
            Some(entry) => self.form.update(|f| f.entry_time = entry),
            None => log::debug!("ignoring entry time input {:?}", value),
        }
    }

    /// Cleared input means "still inside".
    pub fn set_exit(&self, value: &str) {
        let exit: Option<NaiveDateTime> = parse_datetime_input(value);
        self.form.update(|f| f.exit_time = exit);
    }

    pub fn save_command(&self, on_saved: Callback<Visitor>) {
        let dto = self.form.get_untracked().normalized();
        if let Err(e) = dto.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match dto.id {
                Some(id) => api::update_visitor(id, &dto).await,
                None => api::create_visitor(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(visitor) => {
                    log::info!("visitor #{} ({}) saved", visitor.id, visitor.full_name);
                    on_saved.run(visitor);
                }
                Err(e) => {
                    log::error!("saving visitor {} failed: {}", dto.full_name, e);
                    error.set(Some(e));
                }
            }
        });
    }
}
