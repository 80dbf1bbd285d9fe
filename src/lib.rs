//! # coreup
//!
//! Leptos + WASM front end for `CoreUp`, a startup/investor networking
//! platform: auth forms, the investor dashboard (portfolio, matches, news
//! feed, search), profile editing, chats and notifications.
//!
//! There is no server. Records are seeded in memory (`net::mock`), auth runs
//! against a mock backend behind a trait, and the only durable state is the
//! auth token in browser local storage. Rule-bearing state lives in plain
//! structs under `state` and `forms` that build and test natively; the
//! `csr` feature adds the browser entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod forms;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::AppConfig::from_build_env().log_level;
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::error!("logger init failed: {e}");
    }
    log::info!("coreup starting (log level {level})");
    leptos::mount::mount_to_body(app::App);
}
