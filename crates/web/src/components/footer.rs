// =============================================================================
// Mobaus Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;
use leptos_router::components::A;
use mobaus_common::Translations;

use super::Icon;
use crate::state::{use_config, use_locale, use_theme};
use crate::utils::terminal_comment;

/// Site footer.
#[component]
pub fn Footer() -> impl IntoView {
    let config = use_config();
    let locale = use_locale();
    let theme = use_theme();

    let changelog_url = config.changelog_url();
    let issues_url = config.issues_url();
    let heading = move |text: fn(&'static Translations) -> &'static str| {
        move || terminal_comment(theme.style(), text(locale.t()))
    };

    view! {
        <footer class="site-footer">
            <div class="footer-main">
                <div class="footer-brand-col">
                    <A href="/" attr:class="footer-logo-link">
                        <span class="footer-logo-text">{config.name}</span>
                    </A>
                    <p class="footer-description">{move || locale.t().footer.description}</p>
                    <a href=config.github target="_blank" rel="noopener noreferrer" class="social-link" aria-label="GitHub">
                        <Icon name="github" />
                    </a>
                </div>

                <div class="footer-links-grid">
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">{heading(|t| t.footer.quick_links)}</h5>
                        <A href="/" attr:class="footer-link">{move || locale.t().common.home}</A>
                        <A href="/features" attr:class="footer-link">{move || locale.t().common.features}</A>
                        <A href="/download" attr:class="footer-link">{move || locale.t().common.download}</A>
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">{heading(|t| t.footer.resources)}</h5>
                        <a href=config.docs_url target="_blank" rel="noopener noreferrer" class="footer-link">
                            {move || locale.t().common.docs}
                        </a>
                        <a href=changelog_url target="_blank" rel="noopener noreferrer" class="footer-link">
                            {move || locale.t().footer.changelog}
                        </a>
                        <a href=issues_url target="_blank" rel="noopener noreferrer" class="footer-link">
                            {move || locale.t().footer.feedback}
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer-divider"></div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">
                    {format!("© {} {}. ", chrono::Utc::now().format("%Y"), config.name)}
                    {move || locale.t().footer.made_with}
                    " Rust + Leptos"
                </p>
                <p class="footer-version">{format!("v{}", config.version)}</p>
            </div>
        </footer>
    }
}
