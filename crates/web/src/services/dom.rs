// =============================================================================
// Mobaus Web - Document Style Sink
// =============================================================================

use mobaus_common::theme::THEME_ATTRIBUTE;
use mobaus_common::{StyleSink, StyleUpdate};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Writes theme variables and the `data-theme` marker onto `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentStyleSink;

impl DocumentStyleSink {
    fn root() -> Option<HtmlElement> {
        web_sys::window()?
            .document()?
            .document_element()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl StyleSink for DocumentStyleSink {
    fn apply(&self, update: &StyleUpdate) {
        let Some(root) = Self::root() else {
            log::warn!("No document root, theme {} not applied", update.marker);
            return;
        };

        let style = root.style();
        for (name, value) in &update.variables {
            if let Err(err) = style.set_property(name, value) {
                log::warn!("Failed to set {}: {:?}", name, err);
            }
        }

        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, update.marker) {
            log::warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, err);
        }
    }
}
