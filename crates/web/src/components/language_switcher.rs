// =============================================================================
// Mobaus Web - Language Switcher
// =============================================================================

use leptos::prelude::*;
use mobaus_common::Locale;

use super::Icon;
use crate::state::{use_locale, use_theme};
use crate::utils::terminal_bracket;

/// Short label for the active locale.
fn locale_badge(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "中",
        Locale::En => "EN",
    }
}

/// Toggles between Chinese and English.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    let hint = move || locale.t().common.switch_language;
    let badge = move || terminal_bracket(theme.style(), locale_badge(locale.locale()));

    view! {
        <button
            type="button"
            class="language-switcher"
            title=hint
            aria-label=hint
            on:click=move |_| locale.toggle()
        >
            <Icon name="languages" />
            <span>{badge}</span>
        </button>
    }
}
