// =============================================================================
// Mobaus Common - Site Configuration
// =============================================================================
// Static site constants. The fallback release version can be overridden at
// compile time with the `MOBAUS_VERSION` environment variable.
// =============================================================================

/// Version shown when the latest release cannot be fetched.
pub const DEFAULT_VERSION: &str = "0.3.0";

/// Static configuration for the marketing site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub github: &'static str,
    pub docs_url: &'static str,
    pub docker_docs_url: &'static str,
    pub docker_image: &'static str,
    /// Fallback version (no leading `v`).
    pub version: &'static str,
    /// GitHub API endpoint for the latest published release.
    pub release_api_url: &'static str,
}

impl SiteConfig {
    /// Configuration for the current build.
    pub fn current() -> Self {
        Self {
            name: "Mobaus Studio",
            title: "Mobaus Studio - AI 对话的未来形态",
            description: "一款跨平台的 AI 对话助手，支持多种 AI 模型和 MCP 扩展。",
            url: "https://mobaus.com",
            github: "https://github.com/shulain/MobausStudio",
            docs_url: "https://shulain.github.io/MobausStudio/",
            docker_docs_url: "https://shulain.github.io/MobausStudio/zh/deployment/docker.html",
            docker_image: "ghcr.io/shulain/mobausstudio:latest",
            version: option_env!("MOBAUS_VERSION").unwrap_or(DEFAULT_VERSION),
            release_api_url: "https://api.github.com/repos/shulain/MobausStudio/releases/latest",
        }
    }

    /// Release listing page, used whenever no concrete file can be linked.
    pub fn release_page_url(&self) -> String {
        format!("{}/releases/latest", self.github)
    }

    /// Base URL for release assets.
    pub fn download_base_url(&self) -> String {
        format!("{}/releases/latest/download", self.github)
    }

    pub fn changelog_url(&self) -> String {
        format!("{}/releases", self.github)
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.github)
    }

    /// `docker run` one-liner shown on the download page.
    pub fn docker_command(&self) -> String {
        format!("docker run -d -p 8080:80 {}", self.docker_image)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_urls() {
        let config = SiteConfig::current();
        assert_eq!(
            config.release_page_url(),
            "https://github.com/shulain/MobausStudio/releases/latest"
        );
        assert_eq!(
            config.download_base_url(),
            "https://github.com/shulain/MobausStudio/releases/latest/download"
        );
        assert!(config.docker_command().ends_with("ghcr.io/shulain/mobausstudio:latest"));
    }

    #[test]
    fn test_fallback_version_has_no_prefix() {
        assert!(!SiteConfig::current().version.starts_with('v'));
    }
}
