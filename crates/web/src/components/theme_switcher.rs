// =============================================================================
// Mobaus Web - Theme Switcher
// =============================================================================
// Floating palette button with a panel listing every theme.
// =============================================================================

use leptos::prelude::*;
use mobaus_common::ThemeStyle;

use super::Icon;
use crate::state::{use_locale, use_theme};
use crate::utils::terminal_comment;

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();
    let locale = use_locale();
    let open = RwSignal::new(false);

    let toggle_icon = move || if open.get() { "x" } else { "palette" };

    view! {
        <div class="theme-switcher">
            {move || open.get().then(|| view! {
                <div class="theme-panel">
                    <h3 class="theme-panel-title">
                        {move || terminal_comment(theme.style(), locale.t().theme_switcher.title)}
                    </h3>
                    <div class="theme-options">
                        {ThemeStyle::ALL.into_iter().map(|style| view! {
                            <ThemeOption style=style on_pick=move || open.set(false) />
                        }).collect_view()}
                    </div>
                </div>
            })}

            <button
                type="button"
                class="theme-switcher-toggle"
                aria-label=move || locale.t().theme_switcher.aria_label
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || view! { <Icon name=toggle_icon() /> }}
            </button>
        </div>
    }
}

/// One row in the panel: palette swatches, name, description, check mark.
#[component]
fn ThemeOption(style: ThemeStyle, on_pick: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    let theme = use_theme();
    let locale = use_locale();
    let definition = style.definition();
    let palette = definition.palette;
    let is_active = move || theme.style() == style;

    view! {
        <button
            type="button"
            class="theme-option"
            class:active=is_active
            on:click=move |_| {
                theme.select(style);
                on_pick();
            }
        >
            <div class="theme-swatches">
                {[palette.primary, palette.secondary, palette.accent]
                    .into_iter()
                    .map(|color| view! {
                        <span class="theme-swatch" style=format!("background-color: {}", color.css())></span>
                    })
                    .collect_view()}
            </div>
            <div class="theme-info">
                <div class="theme-name">{move || definition.display_name(locale.locale())}</div>
                <div class="theme-description">{move || definition.description(locale.locale())}</div>
            </div>
            {move || is_active().then(|| view! { <Icon name="check" class="theme-check" /> })}
        </button>
    }
}
