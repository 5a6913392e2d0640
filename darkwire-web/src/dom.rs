use wasm_bindgen::prelude::*;
use web_sys::Storage;

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console. Outside the browser
/// (server-side rendering, native tests) the message goes to the `log`
/// facade instead.
pub fn console_error(message: &str) {
    if cfg!(target_arch = "wasm32") {
        web_sys::console::error_1(&JsValue::from(message));
    } else {
        log::error!("{message}");
    }
}

/// Access the browser `localStorage` handle, or `None` outside a browser.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}
