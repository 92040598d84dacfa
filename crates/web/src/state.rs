// =============================================================================
// Mobaus Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Theme Context
// 3. Locale Context
// 4. Providers
// =============================================================================

use std::sync::Arc;

use leptos::prelude::*;
use mobaus_common::i18n::Translations;
use mobaus_common::{
    Locale, LocaleStore, Palette, PreferenceStore, SiteConfig, ThemeStore, ThemeStyle,
};

use crate::services::{BrowserStorage, DocumentStyleSink, NavigatorLanguage};
use crate::utils::set_document_lang;

// -----------------------------------------------------------------------------
// 2. Theme Context
// -----------------------------------------------------------------------------

/// The theme store, shared via Leptos context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: RwSignal<ThemeStore>,
}

impl ThemeContext {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            store: RwSignal::new(store),
        }
    }

    /// Active style (tracked).
    pub fn style(&self) -> ThemeStyle {
        self.store.with(|s| s.active())
    }

    pub fn palette(&self) -> Palette {
        self.store.with(|s| s.palette())
    }

    pub fn is_mounted(&self) -> bool {
        self.store.with(|s| s.is_mounted())
    }

    pub fn select(&self, style: ThemeStyle) {
        self.store.update(|s| s.select(style));
    }

    /// Restore the saved theme and paint it. Called once after first render.
    pub fn mount(&self) {
        self.store.update(|s| s.mount());
    }
}

// -----------------------------------------------------------------------------
// 3. Locale Context
// -----------------------------------------------------------------------------

/// The locale store, shared via Leptos context.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    store: RwSignal<LocaleStore>,
}

impl LocaleContext {
    pub fn new(store: LocaleStore) -> Self {
        Self {
            store: RwSignal::new(store),
        }
    }

    /// Active locale (tracked).
    pub fn locale(&self) -> Locale {
        self.store.with(|s| s.active())
    }

    /// Translation table for the active locale (tracked).
    pub fn t(&self) -> &'static Translations {
        self.store.with(|s| s.translations())
    }

    pub fn toggle(&self) {
        self.store.update(|s| s.toggle());
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

pub fn use_locale() -> LocaleContext {
    expect_context::<LocaleContext>()
}

pub fn use_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

// -----------------------------------------------------------------------------
// 4. Providers
// -----------------------------------------------------------------------------

/// Build both stores over browser storage and provide them.
///
/// The locale is restored immediately. The theme waits for [`ThemeProvider`]
/// so the first paint and the saved palette never disagree.
pub fn provide_site_state() {
    let preferences: Arc<dyn PreferenceStore> = Arc::new(BrowserStorage);

    let theme = ThemeStore::initialize(
        ThemeStyle::default(),
        preferences.clone(),
        Arc::new(DocumentStyleSink),
    );

    let mut locale = LocaleStore::initialize(None, &NavigatorLanguage, preferences);
    locale.restore();
    log::debug!("Locale resolved to {}", locale.active());

    let locale = LocaleContext::new(locale);
    Effect::new(move |_| set_document_lang(locale.locale().code()));

    provide_context(SiteConfig::current());
    provide_context(ThemeContext::new(theme));
    provide_context(locale);
}

/// Mounts the theme after first render and hides content until then.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = use_theme();

    Effect::new(move |_| theme.mount());

    let style = move || {
        if theme.is_mounted() {
            ""
        } else {
            "visibility: hidden"
        }
    };

    view! {
        <div class="theme-root" style=style>
            {children()}
        </div>
    }
}
