//! Browser-backed capabilities against a real DOM and localStorage.
//! Run with `wasm-pack test --headless --firefox crates/web`.

#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use mobaus_common::theme::{CSS_VARIABLES, THEME_ATTRIBUTE};
use mobaus_common::{
    LanguageProvider, PreferenceStore, StyleSink, StyleUpdate, ThemeStore, ThemeStyle,
};
use mobaus_web::services::{BrowserStorage, DocumentStyleSink, NavigatorLanguage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn root() -> HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .expect("document root")
}

#[wasm_bindgen_test]
fn browser_storage_round_trips_plain_strings() {
    let storage = BrowserStorage;
    storage.set("mobaus-test", "aurora").unwrap();

    assert_eq!(storage.get("mobaus-test").unwrap().as_deref(), Some("aurora"));
    assert_eq!(storage.get("mobaus-test-missing").unwrap(), None);

    let raw = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    assert_eq!(raw.get_item("mobaus-test").unwrap().as_deref(), Some("aurora"));
    raw.remove_item("mobaus-test").unwrap();
}

#[wasm_bindgen_test]
fn document_sink_sets_variables_and_marker() {
    DocumentStyleSink.apply(&StyleUpdate::for_style(ThemeStyle::Matrix));

    let root = root();
    let style = root.style();
    assert_eq!(style.get_property_value(CSS_VARIABLES[0]).unwrap(), "#00ff00");
    assert_eq!(style.get_property_value(CSS_VARIABLES[3]).unwrap(), "#000000");
    assert_eq!(root.get_attribute(THEME_ATTRIBUTE).as_deref(), Some("matrix"));
}

#[wasm_bindgen_test]
fn theme_store_survives_reload_in_browser() {
    let storage: Arc<dyn PreferenceStore> = Arc::new(BrowserStorage);

    let mut first = ThemeStore::initialize(ThemeStyle::Cyberpunk, storage.clone(), Arc::new(DocumentStyleSink));
    first.select(ThemeStyle::Immersive);

    let mut second = ThemeStore::initialize(ThemeStyle::Cyberpunk, storage, Arc::new(DocumentStyleSink));
    second.mount();
    assert_eq!(second.active(), ThemeStyle::Immersive);
    assert_eq!(root().get_attribute(THEME_ATTRIBUTE).as_deref(), Some("immersive"));

    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .remove_item(ThemeStore::STORAGE_KEY)
        .unwrap();
}

#[wasm_bindgen_test]
fn navigator_reports_a_language() {
    assert!(NavigatorLanguage.language().is_some_and(|tag| !tag.is_empty()));
}

#[wasm_bindgen_test]
fn document_lang_follows_locale_code() {
    mobaus_web::utils::set_document_lang("zh");
    assert_eq!(root().get_attribute("lang").as_deref(), Some("zh"));
    mobaus_web::utils::set_document_lang("en");
    assert_eq!(root().get_attribute("lang").as_deref(), Some("en"));
}
