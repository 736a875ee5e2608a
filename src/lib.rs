// ============================================================================
// PET ADOPTION PWA - ROLE-AWARE SINGLE PAGE CLIENT (YEW CSR)
// ============================================================================
// Layering:
// - components: Yew views (render only, bound to hooks)
// - hooks:      reusable fetch/filter/alert state machines
// - context:    process-wide session store (token + user)
// - services:   stateless HTTP plumbing
// - models:     structures shared with the backend JSON
// - state:      pure session state machine (native-testable)
// - utils:      pure filter engine, validators, constants
// ============================================================================

pub mod config;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

pub mod services;

#[cfg(target_arch = "wasm32")]
pub mod components;
#[cfg(target_arch = "wasm32")]
pub mod context;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

/// Boot the Yew renderer. Panics and logs are wired to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🐾 Pet Adoption client starting ({})", config::CONFIG.environment);

    yew::Renderer::<components::App>::new().render();
}
