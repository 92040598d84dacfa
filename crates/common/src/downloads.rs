// =============================================================================
// Mobaus Common - Download Links
// =============================================================================
// Table of Contents:
// 1. Platform Detection
// 2. Platform Table
// 3. Link Construction
// =============================================================================

use crate::config::SiteConfig;
use crate::i18n::Translations;

// -----------------------------------------------------------------------------
// 1. Platform Detection
// -----------------------------------------------------------------------------

/// Desktop OS family, used to suggest a download.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OsFamily {
    MacOs,
    Windows,
    Linux,
    Unknown,
}

impl OsFamily {
    /// Classify from `navigator.userAgent` and `navigator.platform`.
    pub fn detect(user_agent: &str, platform: &str) -> Self {
        let user_agent = user_agent.to_lowercase();
        let platform = platform.to_lowercase();
        let matches = |needle: &str| platform.contains(needle) || user_agent.contains(needle);

        if matches("mac") {
            OsFamily::MacOs
        } else if matches("win") {
            OsFamily::Windows
        } else if matches("linux") {
            OsFamily::Linux
        } else {
            OsFamily::Unknown
        }
    }

    pub fn display_name(self) -> Option<&'static str> {
        match self {
            OsFamily::MacOs => Some("macOS"),
            OsFamily::Windows => Some("Windows"),
            OsFamily::Linux => Some("Linux"),
            OsFamily::Unknown => None,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Platform Table
// -----------------------------------------------------------------------------

/// Placeholder substituted in file templates.
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// One downloadable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadVariant {
    pub label: &'static str,
    /// File name template containing `{version}`.
    pub file: &'static str,
}

/// A desktop platform and its artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDownloads {
    pub name: &'static str,
    pub os: OsFamily,
    /// Icon asset name under `/assets/icons/`.
    pub icon: &'static str,
    pub variants: &'static [DownloadVariant],
}

pub static PLATFORMS: [PlatformDownloads; 3] = [
    PlatformDownloads {
        name: "macOS",
        os: OsFamily::MacOs,
        icon: "apple",
        variants: &[
            DownloadVariant { label: "Apple Silicon", file: "MobausStudio_{version}_aarch64.dmg" },
            DownloadVariant { label: "Intel", file: "MobausStudio_{version}_x64.dmg" },
        ],
    },
    PlatformDownloads {
        name: "Windows",
        os: OsFamily::Windows,
        icon: "monitor",
        variants: &[
            DownloadVariant { label: "Installer", file: "MobausStudio_{version}_x64-setup.exe" },
            DownloadVariant { label: "MSI", file: "MobausStudio_{version}_x64.msi" },
        ],
    },
    PlatformDownloads {
        name: "Linux",
        os: OsFamily::Linux,
        icon: "terminal",
        variants: &[
            DownloadVariant { label: "Debian/Ubuntu", file: "MobausStudio_{version}_amd64.deb" },
            DownloadVariant { label: "Fedora/RHEL", file: "MobausStudio_{version}_amd64.rpm" },
            DownloadVariant { label: "AppImage", file: "MobausStudio_{version}_amd64.AppImage" },
        ],
    },
];

// -----------------------------------------------------------------------------
// 3. Link Construction
// -----------------------------------------------------------------------------

/// A resolved download target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub label: String,
    pub url: String,
    /// Points at the release listing rather than a file (opened in a new tab).
    pub is_release_page: bool,
}

impl DownloadLink {
    fn file(label: impl Into<String>, file: &str, version: &str, config: &SiteConfig) -> Self {
        Self {
            label: label.into(),
            url: format!(
                "{}/{}",
                config.download_base_url(),
                file.replace(VERSION_PLACEHOLDER, version)
            ),
            is_release_page: false,
        }
    }

    fn release_page(label: impl Into<String>, config: &SiteConfig) -> Self {
        Self {
            label: label.into(),
            url: config.release_page_url(),
            is_release_page: true,
        }
    }
}

impl DownloadVariant {
    /// Direct file link for `version`, or the release page when there is none.
    pub fn link(&self, version: Option<&str>, config: &SiteConfig) -> DownloadLink {
        match version {
            Some(version) => DownloadLink::file(self.label, self.file, version, config),
            None => DownloadLink::release_page(self.label, config),
        }
    }
}

/// Suggested download for the visitor's system.
pub fn recommended_download(
    os: OsFamily,
    apple_silicon: bool,
    version: Option<&str>,
    t: &Translations,
    config: &SiteConfig,
) -> DownloadLink {
    let Some(version) = version else {
        let label = os.display_name().unwrap_or(t.common.all_platforms);
        return DownloadLink::release_page(label, config);
    };

    match os {
        OsFamily::MacOs if apple_silicon => DownloadLink::file(
            "macOS (Apple Silicon)",
            "MobausStudio_{version}_aarch64.dmg",
            version,
            config,
        ),
        OsFamily::MacOs => {
            DownloadLink::file("macOS (Intel)", "MobausStudio_{version}_x64.dmg", version, config)
        }
        OsFamily::Windows => {
            DownloadLink::file("Windows", "MobausStudio_{version}_x64-setup.exe", version, config)
        }
        OsFamily::Linux => DownloadLink::file(
            "Linux (AppImage)",
            "MobausStudio_{version}_amd64.AppImage",
            version,
            config,
        ),
        OsFamily::Unknown => DownloadLink::release_page(t.common.all_platforms, config),
    }
}

/// Static web bundle, published with every release.
pub fn web_bundle_url(config: &SiteConfig) -> String {
    format!("{}/MobausStudio-web.zip", config.download_base_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15";
    const WIN_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
    const LINUX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64)";

    #[test]
    fn test_detect_os() {
        assert_eq!(OsFamily::detect(MAC_UA, "MacIntel"), OsFamily::MacOs);
        assert_eq!(OsFamily::detect(WIN_UA, "Win32"), OsFamily::Windows);
        assert_eq!(OsFamily::detect(LINUX_UA, "Linux x86_64"), OsFamily::Linux);
        assert_eq!(OsFamily::detect("Mozilla/5.0 (FreeBSD)", ""), OsFamily::Unknown);
    }

    #[test]
    fn test_variant_link_with_version() {
        let config = SiteConfig::current();
        let link = PLATFORMS[1].variants[0].link(Some("1.2.3"), &config);
        assert_eq!(
            link.url,
            "https://github.com/shulain/MobausStudio/releases/latest/download/MobausStudio_1.2.3_x64-setup.exe"
        );
        assert!(!link.is_release_page);
    }

    #[test]
    fn test_variant_link_without_version() {
        let config = SiteConfig::current();
        for platform in &PLATFORMS {
            for variant in platform.variants {
                let link = variant.link(None, &config);
                assert_eq!(link.url, config.release_page_url());
                assert!(link.is_release_page);
            }
        }
    }

    #[test]
    fn test_recommended_download() {
        let config = SiteConfig::current();
        let t = Locale::En.translations();

        let mac_arm = recommended_download(OsFamily::MacOs, true, Some("1.2.3"), t, &config);
        assert_eq!(mac_arm.label, "macOS (Apple Silicon)");
        assert!(mac_arm.url.ends_with("MobausStudio_1.2.3_aarch64.dmg"));

        let mac_intel = recommended_download(OsFamily::MacOs, false, Some("1.2.3"), t, &config);
        assert!(mac_intel.url.ends_with("MobausStudio_1.2.3_x64.dmg"));

        let linux = recommended_download(OsFamily::Linux, false, Some("1.2.3"), t, &config);
        assert!(linux.url.ends_with("MobausStudio_1.2.3_amd64.AppImage"));

        let unknown = recommended_download(OsFamily::Unknown, false, Some("1.2.3"), t, &config);
        assert!(unknown.is_release_page);
        assert_eq!(unknown.label, "All Platforms");
    }

    #[test]
    fn test_recommended_without_version_keeps_os_label() {
        let config = SiteConfig::current();
        let t = Locale::Zh.translations();

        let windows = recommended_download(OsFamily::Windows, false, None, t, &config);
        assert_eq!(windows.label, "Windows");
        assert_eq!(windows.url, config.release_page_url());

        let unknown = recommended_download(OsFamily::Unknown, false, None, t, &config);
        assert_eq!(unknown.label, "所有平台");
    }

    #[test]
    fn test_web_bundle_url() {
        let config = SiteConfig::current();
        assert!(web_bundle_url(&config).ends_with("/releases/latest/download/MobausStudio-web.zip"));
    }
}
