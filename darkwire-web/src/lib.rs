#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod dom;
pub mod game;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Apply the saved display accent before first paint
    let settings = game::load_settings(&game::WebSettingsStore).unwrap_or_default();
    a11y::apply_theme_accent(&settings.theme_accent);
    yew::Renderer::<app::App>::new().render();
}
