// =============================================================================
// Mobaus Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Icon
// 2. Button (link)
// 3. Card
// 4. Loading Spinner
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Icon
// -----------------------------------------------------------------------------

/// Decorative SVG from `/assets/icons/`.
#[component]
pub fn Icon(
    name: &'static str,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <img
            src=format!("/assets/icons/{}.svg", name)
            alt=""
            aria-hidden="true"
            class=format!("icon {}", class)
        />
    }
}

// -----------------------------------------------------------------------------
// 2. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn {} {}", variant.class(), size.class())
}

/// Link styled as a button. External links open in a new tab.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] icon_right: Option<&'static str>,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    view! {
        <a
            class=button_class(variant, size)
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {icon.map(|name| view! { <Icon name=name /> })}
            <span>{label}</span>
            {icon_right.map(|name| view! { <Icon name=name /> })}
        </a>
    }
}

// -----------------------------------------------------------------------------
// 3. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    #[prop(optional)] highlighted: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {} {}", class, if highlighted { "card-highlighted" } else { "" })>
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Loading Spinner
// -----------------------------------------------------------------------------

/// Inline loading indicator with a label.
#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}
