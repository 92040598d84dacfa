// =============================================================================
// Mobaus Web - Header Navigation
// =============================================================================
// Sticky header: gradient logo, page links, language switch, GitHub link.
// Collapses into a drawer on small screens.
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::{Icon, LanguageSwitcher};
use crate::state::{use_config, use_locale, use_theme};

/// Site header.
#[component]
pub fn Header() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let locale = use_locale();
    let pathname = use_location().pathname;

    let menu_open = RwSignal::new(false);

    let link_class = move |path: &'static str| {
        move || {
            if pathname.get() == path {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    let logo_style = move || {
        let palette = theme.palette();
        format!(
            "background-image: linear-gradient(135deg, {}, {})",
            palette.primary.css(),
            palette.secondary.css()
        )
    };

    let links = move || {
        let t = locale.t();
        [("/", t.common.home), ("/features", t.common.features), ("/download", t.common.download)]
    };

    view! {
        <header class="site-header">
            <nav class="header-inner">
                <A href="/" attr:class="nav-logo">
                    <span class="nav-logo-mark" style=logo_style>"M"</span>
                    <span class="nav-logo-text">{config.name}</span>
                </A>

                <div class="nav-links desktop-only">
                    {move || links().into_iter().map(|(path, label)| view! {
                        <A href=path attr:class=link_class(path)>{label}</A>
                    }).collect_view()}
                    <a href=config.docs_url target="_blank" rel="noopener noreferrer" class="nav-link">
                        {move || locale.t().common.docs}
                    </a>
                </div>

                <div class="nav-right">
                    <LanguageSwitcher />
                    <a href=config.github target="_blank" rel="noopener noreferrer" class="nav-github" aria-label="GitHub">
                        <Icon name="github" />
                    </a>
                    <button
                        type="button"
                        class="nav-menu-toggle mobile-only"
                        aria-label=move || locale.t().common.menu
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || view! { <Icon name=if menu_open.get() { "x" } else { "menu" } /> }}
                    </button>
                </div>
            </nav>

            {move || menu_open.get().then(|| view! {
                <div class="mobile-drawer mobile-only">
                    {links().into_iter().map(|(path, label)| view! {
                        <A href=path attr:class="mobile-nav-link" on:click=move |_| menu_open.set(false)>
                            {label}
                        </A>
                    }).collect_view()}
                    <a href=config.docs_url target="_blank" rel="noopener noreferrer" class="mobile-nav-link">
                        {locale.t().common.docs}
                    </a>
                </div>
            })}
        </header>
    }
}
