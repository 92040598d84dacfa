// =============================================================================
// Mobaus Web - Features Page
// =============================================================================

use leptos::prelude::*;
use mobaus_common::i18n::FeatureKey;

use crate::components::{Button, ButtonSize, Card, GlowBackground, Icon};
use crate::state::{use_locale, use_theme};
use crate::utils::{terminal_bracket, terminal_comment};

/// All twelve feature cards with their highlight tags.
#[component]
pub fn FeaturesPage() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    view! {
        <div class="page page-features">
            <section class="page-hero">
                <GlowBackground />
                <h1 class="page-title">
                    {move || terminal_comment(theme.style(), locale.t().features.title)}
                </h1>
                <p class="page-subtitle">{move || locale.t().features.subtitle}</p>
            </section>

            <section class="section">
                <div class="feature-grid feature-grid-full">
                    {move || {
                        let style = theme.style();
                        let items = &locale.t().features.items;
                        FeatureKey::ALL.into_iter().map(|key| {
                            let item = items.get(key);
                            view! {
                                <Card class="feature-card">
                                    <div class="feature-icon"><Icon name=key.icon() /></div>
                                    <h3 class="feature-title">{item.title}</h3>
                                    <p class="feature-description">{item.description}</p>
                                    <ul class="feature-tags">
                                        {item.highlights.iter().map(|tag| view! {
                                            <li class="feature-tag">{terminal_bracket(style, tag)}</li>
                                        }).collect_view()}
                                    </ul>
                                </Card>
                            }
                        }).collect_view()
                    }}
                </div>
            </section>

            <section class="section cta-section">
                {move || {
                    let cta = &locale.t().cta;
                    view! {
                        <h2 class="cta-title">{cta.title}</h2>
                        <p class="cta-description">{cta.description}</p>
                        <Button
                            label=cta.download_button
                            size=ButtonSize::Lg
                            icon="download"
                            href="/download"
                        />
                    }
                }}
            </section>
        </div>
    }
}
