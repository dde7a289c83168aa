use contracts::domain::a001_item::{Item, ItemDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_item::api;

/// Item form. The DTO is edited in place through `form.update()`.
#[derive(Clone, Copy)]
pub struct ItemDetailsViewModel {
    pub form: RwSignal<ItemDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ItemDetailsViewModel {
    pub fn new(dto: ItemDto) -> Self {
        Self {
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with_untracked(|f| f.id.is_some())
    }

    pub fn save_command(&self, on_saved: Callback<Item>) {
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
                Some(id) => api::update_item(id, &dto).await,
                None => api::create_item(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(item) => {
                    log::info!("item {} saved", item.code);
                    on_saved.run(item);
                }
                Err(e) => {
                    log::error!("saving item {} failed: {}", dto.code, e);
                    error.set(Some(e));
                }
            }
        });
    }
}
