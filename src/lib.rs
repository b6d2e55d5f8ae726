// lib.rs - Root module for the chem_marketplace library
//
// The crate builds two ways: as the native rlib behind the SSR binary, and
// as a cdylib for the WASM hydration bundle. Both share the web_app module.

// Leptos' view! macro builds deeply-nested generic types; the default
// recursion limit overflows when resolving their layout.
#![recursion_limit = "256"]

pub mod web_app;

/// WASM entry point for client-side hydration.
///
/// cargo-leptos calls this from the generated JS shim after the page loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
