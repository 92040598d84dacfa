// =============================================================================
// Mobaus Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Page
// 2. Hero
// 3. Features Section
// 4. Platforms Section
// 5. Call To Action
// =============================================================================

use leptos::prelude::*;
use mobaus_common::i18n::FeatureKey;
use mobaus_common::PLATFORMS;

use crate::components::{Button, ButtonSize, ButtonVariant, Card, GlowBackground, Icon, TypeWriter};
use crate::state::{use_config, use_locale, use_theme};
use crate::utils::{terminal_comment, terminal_prompt};

// -----------------------------------------------------------------------------
// 1. Page
// -----------------------------------------------------------------------------

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <Hero />
            <FeaturesSection />
            <PlatformsSection />
            <CtaSection />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Hero
// -----------------------------------------------------------------------------

#[component]
fn Hero() -> impl IntoView {
    let config = use_config();
    let locale = use_locale();
    let theme = use_theme();

    let taglines = Signal::derive(move || locale.t().hero.tagline);
    let highlights = move || {
        let h = &locale.t().highlights;
        [
            ("zap", h.fast_response),
            ("shield", h.secure),
            ("monitor", h.cross_platform),
            ("plug", h.mcp_extension),
        ]
    };

    view! {
        <section class="hero">
            <GlowBackground />

            <div class="hero-main">
                <div class="hero-text">
                    <h1 class="hero-headline">
                        <span class="headline-accent">{config.name}</span>
                    </h1>
                    <p class="hero-tagline">
                        <TypeWriter lines=taglines />
                    </p>
                    <p class="hero-description">
                        {move || terminal_prompt(theme.style(), locale.t().hero.description)}
                    </p>

                    <div class="hero-actions">
                        {move || {
                            let t = locale.t();
                            view! {
                                <Button
                                    label=t.common.download
                                    size=ButtonSize::Lg
                                    icon="download"
                                    href="/download"
                                />
                                <Button
                                    label=t.common.learn_more
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Lg
                                    icon_right="arrow-right"
                                    href="/features"
                                />
                            }
                        }}
                    </div>

                    <p class="hero-platforms">{move || locale.t().hero.platform_support}</p>

                    <ul class="hero-highlights">
                        {move || highlights().into_iter().map(|(icon, label)| view! {
                            <li class="highlight-chip">
                                <Icon name=icon />
                                <span>{label}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>

                <ChatPreview />
            </div>
        </section>
    }
}

/// Mock chat window showing a short exchange.
#[component]
fn ChatPreview() -> impl IntoView {
    let config = use_config();
    let locale = use_locale();

    view! {
        <div class="chat-preview" aria-hidden="true">
            <div class="chat-titlebar">
                <span class="chat-dot dot-red"></span>
                <span class="chat-dot dot-yellow"></span>
                <span class="chat-dot dot-green"></span>
                <span class="chat-title">{config.name}</span>
            </div>
            <div class="chat-body">
                <div class="chat-message chat-ai">{move || locale.t().chat.ai_greeting}</div>
                <div class="chat-message chat-user">{move || locale.t().chat.user_message}</div>
                <div class="chat-message chat-ai chat-pending">
                    <span class="spinner-small"></span>
                    {move || locale.t().chat.analyzing}
                </div>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Features Section
// -----------------------------------------------------------------------------

#[component]
fn FeaturesSection() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    view! {
        <section class="section features-section">
            <div class="section-header">
                <h2 class="section-title">
                    {move || terminal_comment(theme.style(), locale.t().features.title)}
                </h2>
                <p class="section-subtitle">{move || locale.t().features.subtitle}</p>
            </div>

            <div class="feature-grid">
                {move || {
                    let items = &locale.t().features.items;
                    FeatureKey::HIGHLIGHTED.into_iter().map(|key| {
                        let item = items.get(key);
                        view! {
                            <Card class="feature-card">
                                <div class="feature-icon"><Icon name=key.icon() /></div>
                                <h3 class="feature-title">{item.title}</h3>
                                <p class="feature-description">{item.description}</p>
                            </Card>
                        }
                    }).collect_view()
                }}
            </div>

            <div class="section-footer">
                {move || view! {
                    <Button
                        label=locale.t().common.learn_more
                        variant=ButtonVariant::Ghost
                        icon_right="arrow-right"
                        href="/features"
                    />
                }}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Platforms Section
// -----------------------------------------------------------------------------

#[component]
fn PlatformsSection() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    view! {
        <section class="section platforms-section">
            <div class="section-header">
                <h2 class="section-title">
                    {move || terminal_comment(theme.style(), locale.t().platforms.title)}
                </h2>
                <p class="section-subtitle">{move || locale.t().platforms.subtitle}</p>
            </div>

            <div class="platform-grid">
                {PLATFORMS.iter().map(|platform| {
                    let variants = platform
                        .variants
                        .iter()
                        .map(|v| v.label)
                        .collect::<Vec<_>>()
                        .join(" · ");
                    view! {
                        <Card class="platform-card">
                            <Icon name=platform.icon class="platform-icon" />
                            <h3 class="platform-name">{platform.name}</h3>
                            <p class="platform-detail">{variants}</p>
                        </Card>
                    }
                }).collect_view()}
                <Card class="platform-card">
                    <Icon name="globe" class="platform-icon" />
                    <h3 class="platform-name">"Web"</h3>
                    <p class="platform-detail">{move || locale.t().platforms.web}</p>
                </Card>
                <Card class="platform-card">
                    <Icon name="container" class="platform-icon" />
                    <h3 class="platform-name">"Docker"</h3>
                    <p class="platform-detail">{move || locale.t().platforms.docker}</p>
                </Card>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Call To Action
// -----------------------------------------------------------------------------

#[component]
fn CtaSection() -> impl IntoView {
    let config = use_config();
    let locale = use_locale();

    view! {
        <section class="section cta-section">
            <GlowBackground />
            {move || {
                let cta = &locale.t().cta;
                view! {
                    <h2 class="cta-title">{cta.title}</h2>
                    <p class="cta-description">{cta.description}</p>
                    <p class="cta-sub">{cta.sub_description}</p>
                    <div class="cta-actions">
                        <Button
                            label=cta.download_button
                            size=ButtonSize::Lg
                            icon="download"
                            href="/download"
                        />
                        <Button
                            label=cta.docs_button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Lg
                            icon_right="external-link"
                            href=config.docs_url
                            external=true
                        />
                    </div>
                }
            }}
        </section>
    }
}
