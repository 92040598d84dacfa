// =============================================================================
// Mobaus Web - Download Page
// =============================================================================
// Table of Contents:
// 1. Page
// 2. Recommended Download
// 3. Platform Cards
// 4. Other Deployments
// 5. System Requirements
// =============================================================================

use leptos::prelude::*;
use mobaus_common::downloads::{recommended_download, web_bundle_url};
use mobaus_common::{OsFamily, PlatformDownloads, PLATFORMS};

use crate::api::{use_latest_release, ReleaseSignals};
use crate::components::{Button, ButtonSize, ButtonVariant, Card, GlowBackground, Icon, LoadingSpinner};
use crate::state::{use_config, use_locale, use_theme};
use crate::utils::{detect_os, is_apple_silicon, terminal_comment, terminal_prompt};

// -----------------------------------------------------------------------------
// 1. Page
// -----------------------------------------------------------------------------

/// Download page. Fetches the latest release once per visit.
#[component]
pub fn DownloadPage() -> impl IntoView {
    let locale = use_locale();
    let release = use_latest_release();

    let os = detect_os();
    let apple_silicon = os == OsFamily::MacOs && is_apple_silicon();
    log::debug!("Detected {:?} (apple silicon: {})", os, apple_silicon);

    view! {
        <div class="page page-download">
            <section class="page-hero">
                <GlowBackground />
                <h1 class="page-title">{move || locale.t().download.title}</h1>
                <p class="page-subtitle">{move || locale.t().download.subtitle}</p>
                <ReleaseBadge release=release />
            </section>

            <RecommendedDownload release=release os=os apple_silicon=apple_silicon />
            <PlatformCards release=release />
            <OtherDeployments />
            <SystemRequirements />
        </div>
    }
}

/// `v1.2.3 · Released 2025-06-01`, once the fetch succeeded.
#[component]
fn ReleaseBadge(release: ReleaseSignals) -> impl IntoView {
    let locale = use_locale();

    move || {
        release.state.with(|state| {
            let state = state.as_ref().filter(|s| !s.is_fallback())?;
            let date = state
                .release
                .published_date()
                .map(|date| format!(" · {} {}", locale.t().common.released_on, date.format("%Y-%m-%d")))
                .unwrap_or_default();
            Some(view! {
                <a class="release-badge" href=state.release.url.clone() target="_blank" rel="noopener noreferrer">
                    <span class="release-dot"></span>
                    {format!("{} v{}{}", locale.t().common.new_version_released, state.release.version, date)}
                </a>
            })
        })
    }
}

// -----------------------------------------------------------------------------
// 2. Recommended Download
// -----------------------------------------------------------------------------

#[component]
fn RecommendedDownload(release: ReleaseSignals, os: OsFamily, apple_silicon: bool) -> impl IntoView {
    let config = use_config();
    let locale = use_locale();
    let theme = use_theme();

    let system = move || {
        let t = locale.t();
        let name = os.display_name().unwrap_or(t.common.all_platforms);
        format!("{}: {}", terminal_comment(theme.style(), t.common.detected_system), name)
    };

    view! {
        <section class="section recommended-section">
            <Card class="recommended-card" highlighted=true>
                <p class="recommended-system">{system}</p>
                {move || {
                    let t = locale.t();
                    if release.loading.get() {
                        return view! { <LoadingSpinner message=t.common.loading /> }.into_any();
                    }

                    let version = release.valid_version();
                    let link = recommended_download(os, apple_silicon, version.as_deref(), t, &config);
                    let label = match &version {
                        Some(version) if !link.is_release_page => format!("{} v{}", t.common.download, version),
                        _ => t.common.go_to_download_page.to_string(),
                    };

                    view! {
                        <Button
                            label=label
                            size=ButtonSize::Lg
                            icon="download"
                            href=link.url
                            external=link.is_release_page
                        />
                        <p class="recommended-target">{link.label}</p>
                    }
                    .into_any()
                }}
            </Card>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Platform Cards
// -----------------------------------------------------------------------------

#[component]
fn PlatformCards(release: ReleaseSignals) -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    view! {
        <section class="section platforms-download">
            <h2 class="section-title">
                {move || terminal_comment(theme.style(), locale.t().common.all_platforms)}
            </h2>
            <div class="platform-grid">
                {PLATFORMS.iter().map(|platform| view! {
                    <PlatformCard platform=platform release=release />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PlatformCard(platform: &'static PlatformDownloads, release: ReleaseSignals) -> impl IntoView {
    let config = use_config();
    let theme = use_theme();

    view! {
        <Card class="platform-card">
            <div class="platform-card-header">
                <Icon name=platform.icon class="platform-icon" />
                <h3 class="platform-name">{platform.name}</h3>
            </div>
            <div class="platform-variants">
                {move || {
                    let version = release.valid_version();
                    let style = theme.style();
                    platform.variants.iter().map(|variant| {
                        let link = variant.link(version.as_deref(), &config);
                        view! {
                            <Button
                                label=terminal_prompt(style, link.label.as_str())
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                icon="download"
                                href=link.url
                                external=link.is_release_page
                            />
                        }
                    }).collect_view()
                }}
            </div>
        </Card>
    }
}

// -----------------------------------------------------------------------------
// 4. Other Deployments
// -----------------------------------------------------------------------------

#[component]
fn OtherDeployments() -> impl IntoView {
    let config = use_config();
    let locale = use_locale();
    let theme = use_theme();

    let docker_command = config.docker_command();
    let bundle_url = web_bundle_url(&config);

    view! {
        <section class="section other-deployments">
            <h2 class="section-title">
                {move || terminal_comment(theme.style(), locale.t().common.other_deployments)}
            </h2>
            <div class="deployment-grid">
                <Card class="deployment-card">
                    <div class="platform-card-header">
                        <Icon name="container" class="platform-icon" />
                        <h3>{move || locale.t().download.docker.title}</h3>
                    </div>
                    <p>{move || locale.t().download.docker.description}</p>
                    <pre class="code-block"><code>{docker_command}</code></pre>
                    {move || view! {
                        <Button
                            label=locale.t().common.view_docs
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            icon_right="external-link"
                            href=config.docker_docs_url
                            external=true
                        />
                    }}
                </Card>

                <Card class="deployment-card">
                    <div class="platform-card-header">
                        <Icon name="globe" class="platform-icon" />
                        <h3>{move || locale.t().download.web.title}</h3>
                    </div>
                    <p>{move || locale.t().download.web.description}</p>
                    {move || view! {
                        <Button
                            label=locale.t().download.web.button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            icon="download"
                            href=bundle_url.clone()
                        />
                    }}
                </Card>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. System Requirements
// -----------------------------------------------------------------------------

#[component]
fn SystemRequirements() -> impl IntoView {
    let locale = use_locale();
    let theme = use_theme();

    view! {
        <section class="section requirements">
            <h2 class="section-title">
                {move || terminal_comment(theme.style(), locale.t().common.system_requirements)}
            </h2>
            {move || {
                let requirements = &locale.t().download.requirements;
                [requirements.macos, requirements.windows, requirements.linux]
                    .into_iter()
                    .map(|line| view! { <p class="requirement">{line}</p> })
                    .collect_view()
            }}
        </section>
    }
}
