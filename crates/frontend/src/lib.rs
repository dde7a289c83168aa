pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::task::spawn_local;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::shared::config::{config, load_config};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    spawn_local(async {
        let source = load_config().await;
        _ = console_log::init_with_level(config().logging.log_level());
        log::info!("portal config loaded from {}", source);
        leptos::mount::mount_to_body(app::App);
    });
}
