//! # ignition-landing
//!
//! Leptos + WASM landing page for the Ignition trial signup flow: a header
//! that gates on the user's session, a three-part hero, and a footer.
//!
//! The behavioral core is the session flow in `session`, written against
//! the injected `Backend` and `Navigator` capabilities so it runs (and is
//! tested) natively; `components` and `app` are the rendering surface.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod session;
pub mod state;
pub mod testing;
pub mod util;

/// Browser entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("logger already initialized");
    }
    leptos::mount::mount_to_body(|| view! { <App/> });
}
