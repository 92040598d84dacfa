// =============================================================================
// Mobaus Common - Translation Tables
// =============================================================================
// Table of Contents:
// 1. Locale Tables
// 2. Table Types
// 3. Feature Keys
// =============================================================================
//
// Both locales are values of the same `Translations` type, so a key missing
// from one table does not compile.
// =============================================================================

use serde::Serialize;

// -----------------------------------------------------------------------------
// 1. Locale Tables
// -----------------------------------------------------------------------------

pub mod en;
pub mod zh;

// -----------------------------------------------------------------------------
// 2. Table Types
// -----------------------------------------------------------------------------

/// Every piece of UI copy for one locale.
#[derive(Debug, Serialize)]
pub struct Translations {
    pub common: CommonText,
    pub hero: HeroText,
    pub highlights: HighlightsText,
    pub features: FeaturesText,
    pub download: DownloadText,
    pub chat: ChatText,
    pub footer: FooterText,
    pub cta: CtaText,
    pub platforms: PlatformsText,
    pub theme_switcher: ThemeSwitcherText,
    pub not_found: NotFoundText,
}

#[derive(Debug, Serialize)]
pub struct CommonText {
    pub download: &'static str,
    pub learn_more: &'static str,
    pub features: &'static str,
    pub docs: &'static str,
    pub home: &'static str,
    pub all_platforms: &'static str,
    pub loading: &'static str,
    pub go_to_download_page: &'static str,
    pub new_version_released: &'static str,
    pub detected_system: &'static str,
    pub system_requirements: &'static str,
    pub other_deployments: &'static str,
    pub view_docs: &'static str,
    pub menu: &'static str,
    pub released_on: &'static str,
    /// Label of the language switcher, written in the *other* language.
    pub switch_language: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HeroText {
    /// Lines cycled by the typewriter.
    pub tagline: &'static [&'static str],
    pub description: &'static str,
    pub platform_support: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HighlightsText {
    pub fast_response: &'static str,
    pub secure: &'static str,
    pub cross_platform: &'static str,
    pub mcp_extension: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FeaturesText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: FeatureItems,
}

#[derive(Debug, Serialize)]
pub struct FeatureText {
    pub title: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct FeatureItems {
    pub multi_model: FeatureText,
    pub mcp: FeatureText,
    pub skills: FeatureText,
    pub agent: FeatureText,
    pub chat: FeatureText,
    pub config: FeatureText,
    pub platform: FeatureText,
    pub update: FeatureText,
    pub security: FeatureText,
    pub performance: FeatureText,
    pub i18n: FeatureText,
    pub open_source: FeatureText,
}

#[derive(Debug, Serialize)]
pub struct DownloadText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub docker: DockerText,
    pub web: WebBundleText,
    pub requirements: RequirementsText,
}

#[derive(Debug, Serialize)]
pub struct DockerText {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WebBundleText {
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RequirementsText {
    pub macos: &'static str,
    pub windows: &'static str,
    pub linux: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatText {
    pub ai_greeting: &'static str,
    pub user_message: &'static str,
    pub analyzing: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FooterText {
    pub quick_links: &'static str,
    pub resources: &'static str,
    pub changelog: &'static str,
    pub feedback: &'static str,
    pub made_with: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CtaText {
    pub title: &'static str,
    pub description: &'static str,
    pub sub_description: &'static str,
    pub download_button: &'static str,
    pub docs_button: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlatformsText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub web: &'static str,
    pub docker: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThemeSwitcherText {
    pub title: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NotFoundText {
    pub title: &'static str,
    pub description: &'static str,
    pub back_home: &'static str,
}

// -----------------------------------------------------------------------------
// 3. Feature Keys
// -----------------------------------------------------------------------------

/// Feature card identifiers in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    MultiModel,
    Mcp,
    Skills,
    Agent,
    Chat,
    Config,
    Platform,
    Update,
    Security,
    Performance,
    I18n,
    OpenSource,
}

impl FeatureKey {
    /// All twelve features, as listed on the features page.
    pub const ALL: [FeatureKey; 12] = [
        FeatureKey::MultiModel,
        FeatureKey::Mcp,
        FeatureKey::Skills,
        FeatureKey::Agent,
        FeatureKey::Chat,
        FeatureKey::Config,
        FeatureKey::Platform,
        FeatureKey::Update,
        FeatureKey::Security,
        FeatureKey::Performance,
        FeatureKey::I18n,
        FeatureKey::OpenSource,
    ];

    /// The six features shown on the home page.
    pub const HIGHLIGHTED: [FeatureKey; 6] = [
        FeatureKey::MultiModel,
        FeatureKey::Mcp,
        FeatureKey::Skills,
        FeatureKey::Agent,
        FeatureKey::Platform,
        FeatureKey::Update,
    ];

    /// Icon asset name under `/assets/icons/`.
    pub const fn icon(self) -> &'static str {
        match self {
            FeatureKey::MultiModel => "bot",
            FeatureKey::Mcp => "plug",
            FeatureKey::Skills => "sparkles",
            FeatureKey::Agent => "workflow",
            FeatureKey::Chat => "message-square",
            FeatureKey::Config => "settings",
            FeatureKey::Platform => "monitor",
            FeatureKey::Update => "refresh-cw",
            FeatureKey::Security => "shield",
            FeatureKey::Performance => "zap",
            FeatureKey::I18n => "globe",
            FeatureKey::OpenSource => "code",
        }
    }
}

impl FeatureItems {
    pub fn get(&self, key: FeatureKey) -> &FeatureText {
        match key {
            FeatureKey::MultiModel => &self.multi_model,
            FeatureKey::Mcp => &self.mcp,
            FeatureKey::Skills => &self.skills,
            FeatureKey::Agent => &self.agent,
            FeatureKey::Chat => &self.chat,
            FeatureKey::Config => &self.config,
            FeatureKey::Platform => &self.platform,
            FeatureKey::Update => &self.update,
            FeatureKey::Security => &self.security,
            FeatureKey::Performance => &self.performance,
            FeatureKey::I18n => &self.i18n,
            FeatureKey::OpenSource => &self.open_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use crate::locale::Locale;

    /// Flatten a table into `path -> leaf` entries. String lists keep their
    /// length in the path so list sizes are compared too.
    fn collect_keys(value: &Value, prefix: String, out: &mut BTreeSet<String>, empty: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    collect_keys(child, format!("{}.{}", prefix, key), out, empty);
                }
            }
            Value::Array(items) => {
                out.insert(format!("{}[{}]", prefix, items.len()));
                for (index, item) in items.iter().enumerate() {
                    if item.as_str().is_some_and(str::is_empty) {
                        empty.push(format!("{}[{}]", prefix, index));
                    }
                }
            }
            Value::String(text) => {
                if text.is_empty() {
                    empty.push(prefix.clone());
                }
                out.insert(prefix);
            }
            other => panic!("unexpected value at {}: {:?}", prefix, other),
        }
    }

    fn key_set(locale: Locale) -> (BTreeSet<String>, Vec<String>) {
        let value = serde_json::to_value(locale.translations()).unwrap();
        let mut keys = BTreeSet::new();
        let mut empty = Vec::new();
        collect_keys(&value, String::new(), &mut keys, &mut empty);
        (keys, empty)
    }

    #[test]
    fn test_tables_share_key_set() {
        let (zh, _) = key_set(Locale::Zh);
        let (en, _) = key_set(Locale::En);
        assert_eq!(zh, en);
        assert!(zh.contains(".common.download"));
        assert!(zh.contains(".features.items.open_source.highlights[4]"));
    }

    #[test]
    fn test_tables_have_no_empty_values() {
        for locale in Locale::ALL {
            let (_, empty) = key_set(locale);
            assert!(empty.is_empty(), "{} has empty values: {:?}", locale, empty);
        }
    }

    #[test]
    fn test_feature_lookup_order() {
        let items = &Locale::En.translations().features.items;
        let titles: Vec<_> = super::FeatureKey::HIGHLIGHTED
            .iter()
            .map(|key| items.get(*key).title)
            .collect();
        assert_eq!(
            titles,
            [
                "Multi-Model Support",
                "MCP Extension Protocol",
                "Skills System",
                "Agent",
                "Cross-Platform",
                "Auto Update",
            ]
        );
    }
}
