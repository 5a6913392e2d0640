// Accessibility helpers

/// Update the live region status for screen readers.
///
/// Updates the text content of the #panel-helper element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("panel-helper"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Apply the display accent color from the settings store.
///
/// Sets a `data-accent` attribute on the HTML element so the stylesheet can
/// pick it up. Display-only: nothing reads it back.
pub fn apply_theme_accent(accent: &str) {
    if !cfg!(target_arch = "wasm32") {
        return;
    }
    if let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = html.set_attribute("data-accent", accent);
    }
}
