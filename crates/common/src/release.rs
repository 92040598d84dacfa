// =============================================================================
// Mobaus Common - Release Info
// =============================================================================
// Table of Contents:
// 1. Error Types
// 2. GitHub Payload
// 3. Release Info
// 4. Release State (fetch outcome)
// =============================================================================

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::config::SiteConfig;

// -----------------------------------------------------------------------------
// 1. Error Types
// -----------------------------------------------------------------------------

/// Why the latest release could not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Release API returned status {0}")]
    Status(u16),

    #[error("Malformed release payload: {0}")]
    Malformed(String),

    #[error("Release payload has no tag name")]
    MissingTag,
}

// -----------------------------------------------------------------------------
// 2. GitHub Payload
// -----------------------------------------------------------------------------

/// Subset of the GitHub "latest release" response.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub tag_name: Option<String>,
    pub published_at: Option<String>,
    pub html_url: Option<String>,
}

/// Drop a single leading `v` from a tag (`v1.2.3` -> `1.2.3`).
pub fn strip_version_prefix(tag: &str) -> &str {
    tag.strip_prefix('v').unwrap_or(tag)
}

// -----------------------------------------------------------------------------
// 3. Release Info
// -----------------------------------------------------------------------------

/// Version metadata used to build download links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Version without the `v` prefix.
    pub version: String,
    pub tag: String,
    /// RFC 3339 timestamp, empty for the fallback.
    pub published_at: String,
    pub url: String,
}

impl ReleaseInfo {
    pub fn from_github(release: GithubRelease, config: &SiteConfig) -> Result<Self, ReleaseError> {
        let tag = release.tag_name.ok_or(ReleaseError::MissingTag)?;
        let version = strip_version_prefix(tag.trim()).trim();
        if version.is_empty() {
            return Err(ReleaseError::MissingTag);
        }

        Ok(Self {
            version: version.to_string(),
            published_at: release.published_at.unwrap_or_default(),
            url: release.html_url.unwrap_or_else(|| config.release_page_url()),
            tag,
        })
    }

    /// Static stand-in used when the fetch fails.
    pub fn fallback(config: &SiteConfig) -> Self {
        Self {
            version: config.version.to_string(),
            tag: format!("v{}", config.version),
            published_at: String::new(),
            url: config.release_page_url(),
        }
    }

    /// Publication date, when the timestamp parses.
    pub fn published_date(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|ts| ts.date_naive())
    }
}

// -----------------------------------------------------------------------------
// 4. Release State
// -----------------------------------------------------------------------------

/// Outcome of the one release fetch per page load.
///
/// `release` is always usable. `error` is set when it is the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseState {
    pub release: ReleaseInfo,
    pub error: Option<ReleaseError>,
}

impl ReleaseState {
    /// Resolve a raw HTTP response from the release API.
    pub fn from_response(status: u16, body: &str, config: &SiteConfig) -> Self {
        if !(200..=299).contains(&status) {
            return Self::from_error(ReleaseError::Status(status), config);
        }

        let parsed = serde_json::from_str::<GithubRelease>(body)
            .map_err(|e| ReleaseError::Malformed(e.to_string()))
            .and_then(|release| ReleaseInfo::from_github(release, config));

        match parsed {
            Ok(release) => Self { release, error: None },
            Err(err) => Self::from_error(err, config),
        }
    }

    pub fn from_error(error: ReleaseError, config: &SiteConfig) -> Self {
        Self {
            release: ReleaseInfo::fallback(config),
            error: Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Version to substitute into download file names, `None` on fallback.
    pub fn valid_version(&self) -> Option<&str> {
        match self.error {
            None if !self.release.version.is_empty() => Some(self.release.version.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "tag_name": "v1.2.3",
        "published_at": "2025-06-01T08:30:00Z",
        "html_url": "https://github.com/shulain/MobausStudio/releases/tag/v1.2.3",
        "assets": []
    }"#;

    #[test]
    fn test_strip_version_prefix() {
        assert_eq!(strip_version_prefix("v1.2.3"), "1.2.3");
        assert_eq!(strip_version_prefix("1.2.3"), "1.2.3");
        assert_eq!(strip_version_prefix("vv2"), "v2");
    }

    #[test]
    fn test_successful_response() {
        let config = SiteConfig::current();
        let state = ReleaseState::from_response(200, PAYLOAD, &config);

        assert_eq!(state.error, None);
        assert_eq!(state.valid_version(), Some("1.2.3"));
        assert_eq!(state.release.tag, "v1.2.3");
        assert_eq!(
            state.release.published_date(),
            NaiveDate::from_ymd_opt(2025, 6, 1)
        );
    }

    #[test]
    fn test_non_success_status_falls_back() {
        let config = SiteConfig::current();
        let state = ReleaseState::from_response(403, PAYLOAD, &config);

        assert_eq!(state.error, Some(ReleaseError::Status(403)));
        assert_eq!(state.release, ReleaseInfo::fallback(&config));
        assert_eq!(state.valid_version(), None);
    }

    #[test]
    fn test_malformed_body_falls_back() {
        let config = SiteConfig::current();
        let state = ReleaseState::from_response(200, "<html>rate limited</html>", &config);

        assert!(matches!(state.error, Some(ReleaseError::Malformed(_))));
        assert_eq!(state.release.version, config.version);
        assert_eq!(state.release.url, config.release_page_url());
    }

    #[test]
    fn test_missing_tag_falls_back() {
        let config = SiteConfig::current();
        let state = ReleaseState::from_response(200, r#"{"tag_name": null}"#, &config);
        assert_eq!(state.error, Some(ReleaseError::MissingTag));
    }

    #[test]
    fn test_tag_without_version_falls_back() {
        let config = SiteConfig::current();
        for tag in ["", "  ", "v", " v "] {
            let body = format!(r#"{{"tag_name": "{}"}}"#, tag);
            let state = ReleaseState::from_response(200, &body, &config);
            assert_eq!(state.error, Some(ReleaseError::MissingTag), "{:?}", tag);
            assert_eq!(state.release, ReleaseInfo::fallback(&config));
        }
    }

    #[test]
    fn test_missing_html_url_uses_release_page() {
        let config = SiteConfig::current();
        let state = ReleaseState::from_response(200, r#"{"tag_name": "v0.4.0"}"#, &config);
        assert_eq!(state.release.url, config.release_page_url());
        assert_eq!(state.release.published_date(), None);
    }

    #[test]
    fn test_fallback_shape() {
        let config = SiteConfig::current();
        let fallback = ReleaseInfo::fallback(&config);
        assert_eq!(fallback.tag, format!("v{}", config.version));
        assert!(fallback.published_at.is_empty());
    }
}
