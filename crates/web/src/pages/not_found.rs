// =============================================================================
// Mobaus Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::state::{use_locale, use_theme};
use crate::utils::terminal_prompt;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                {move || {
                    let t = &locale.t().not_found;
                    view! {
                        <h1>{t.title}</h1>
                        <p>{terminal_prompt(theme.style(), t.description)}</p>
                        <Button label=t.back_home variant=ButtonVariant::Primary href="/" />
                    }
                }}
            </div>
        </div>
    }
}
