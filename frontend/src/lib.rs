//! WebAssembly entry point for the documentation site.
//!
//! Hydrates the server-rendered page so the navigation bar can restyle itself
//! on client-side route changes, and sets up browser console logging.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the site on the client.
///
/// Initializes `console_log` and `console_error_panic_hook`, then mounts
/// `app::component` over the server-rendered body.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::debug!("hydrating documentation site");

    leptos::mount::hydrate_body(component);
}
