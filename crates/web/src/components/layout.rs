// =============================================================================
// Mobaus Web - Layout Components
// =============================================================================
// Table of Contents:
// 1. Layout (Main App Shell)
// 2. Scroll Restoration
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::{Footer, Header, ThemeSwitcher};
use crate::state::use_theme;
use crate::utils::scroll_to_top;

// -----------------------------------------------------------------------------
// 1. Layout (Main App Shell)
// -----------------------------------------------------------------------------

/// Header, page content, footer and the floating theme switcher.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="layout" class:terminal=move || theme.style().is_terminal()>
            <ScrollToTop />
            <Header />
            <main class="layout-content">
                {children()}
            </main>
            <Footer />
            <ThemeSwitcher />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Scroll Restoration
// -----------------------------------------------------------------------------

/// Scrolls to the top whenever the route changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        scroll_to_top();
    });
}
