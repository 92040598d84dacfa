// =============================================================================
// Mobaus Web - Latest Release
// =============================================================================
// Table of Contents:
// 1. Fetch
// 2. Reactive Hook
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use mobaus_common::{ReleaseError, ReleaseState, SiteConfig};

use super::{ApiClient, ApiError};

// -----------------------------------------------------------------------------
// 1. Fetch
// -----------------------------------------------------------------------------

impl From<ApiError> for ReleaseError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) | ApiError::Read(message) => ReleaseError::Network(message),
        }
    }
}

/// Fetch the latest GitHub release once. Never fails: errors resolve to the
/// fallback release with `error` set.
pub async fn fetch_latest_release(config: &SiteConfig) -> ReleaseState {
    let state = match ApiClient::github().get_raw(config.release_api_url).await {
        Ok(response) => ReleaseState::from_response(response.status, &response.body, config),
        Err(err) => ReleaseState::from_error(err.into(), config),
    };

    match &state.error {
        None => log::info!("Latest release: {}", state.release.tag),
        Some(err) => log::warn!(
            "Release lookup failed ({}), falling back to v{}",
            err,
            state.release.version
        ),
    }

    state
}

// -----------------------------------------------------------------------------
// 2. Reactive Hook
// -----------------------------------------------------------------------------

/// Signals fed by [`use_latest_release`].
#[derive(Clone, Copy)]
pub struct ReleaseSignals {
    /// `None` until the fetch resolves.
    pub state: RwSignal<Option<ReleaseState>>,
    pub loading: RwSignal<bool>,
}

impl ReleaseSignals {
    /// Version for download file names, `None` while loading or on fallback.
    pub fn valid_version(&self) -> Option<String> {
        self.state
            .with(|state| state.as_ref().and_then(|s| s.valid_version().map(str::to_string)))
    }
}

/// Start the release fetch for the current view.
///
/// A response that arrives after the view is gone is dropped.
pub fn use_latest_release() -> ReleaseSignals {
    let signals = ReleaseSignals {
        state: RwSignal::new(None),
        loading: RwSignal::new(true),
    };

    spawn_local(async move {
        let result = fetch_latest_release(&SiteConfig::current()).await;
        if signals.state.try_set(Some(result)).is_some() {
            log::debug!("Release response arrived after unmount, discarded");
            return;
        }
        signals.loading.try_set(false);
    });

    signals
}
