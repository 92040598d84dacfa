// =============================================================================
// Mobaus Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::pages::{DownloadPage, FeaturesPage, HomePage, NotFoundPage};
use crate::state::{provide_site_state, use_config, ThemeProvider};

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_site_state();

    let config = use_config();

    view! {
        <Title text=config.title />
        <Meta name="description" content=config.description />
        <Meta property="og:title" content=config.title />
        <Meta property="og:description" content=config.description />
        <Meta property="og:url" content=config.url />

        <Router>
            <ThemeProvider>
                <Layout>
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/features") view=FeaturesPage />
                        <Route path=path!("/download") view=DownloadPage />
                    </Routes>
                </Layout>
            </ThemeProvider>
        </Router>
    }
}
