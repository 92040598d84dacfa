// =============================================================================
// Mobaus Common - Locale Selection & Locale Store
// =============================================================================
// Table of Contents:
// 1. Locale
// 2. Environment Language Detection
// 3. Locale Store
// =============================================================================

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::i18n::{self, Translations};
use crate::storage::PreferenceStore;

// -----------------------------------------------------------------------------
// 1. Locale
// -----------------------------------------------------------------------------

/// Display language. Chinese is the primary language, English the fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    Zh,
    #[default]
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// Persisted identifier and `<html lang>` value.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Exact-match lookup of a persisted identifier.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "zh" => Some(Locale::Zh),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// The other supported language.
    pub const fn other(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    /// Complete translation table for this locale.
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::Zh => &i18n::zh::TRANSLATIONS,
            Locale::En => &i18n::en::TRANSLATIONS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when parsing an unknown locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
// 2. Environment Language Detection
// -----------------------------------------------------------------------------

/// Source of the user's preferred language tag (e.g. `navigator.language`).
pub trait LanguageProvider: Send + Sync {
    /// `None` when the signal is missing or cannot be read.
    fn language(&self) -> Option<String>;
}

/// Provider returning a fixed tag. Used off-browser and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedLanguage(pub Option<String>);

impl FixedLanguage {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl LanguageProvider for FixedLanguage {
    fn language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Chinese for any tag starting with `zh` (any case), English otherwise.
pub fn detect_default(provider: &dyn LanguageProvider) -> Locale {
    match provider.language() {
        Some(tag) if tag.to_lowercase().starts_with("zh") => Locale::Zh,
        _ => Locale::En,
    }
}

// -----------------------------------------------------------------------------
// 3. Locale Store
// -----------------------------------------------------------------------------

/// Holds the active locale and persists it.
pub struct LocaleStore {
    active: Locale,
    preferences: Arc<dyn PreferenceStore>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl LocaleStore {
    /// localStorage key for the selected locale.
    pub const STORAGE_KEY: &'static str = "locale";

    /// Start on `explicit_default`, or on the detected language when none is
    /// given. Persisted preferences are applied later by [`restore`](Self::restore).
    pub fn initialize(
        explicit_default: Option<Locale>,
        provider: &dyn LanguageProvider,
        preferences: Arc<dyn PreferenceStore>,
    ) -> Self {
        let active = explicit_default.unwrap_or_else(|| detect_default(provider));
        Self { active, preferences }
    }

    /// Adopt the persisted locale if it is `zh` or `en`.
    pub fn restore(&mut self) -> Option<Locale> {
        let stored = match self.preferences.get(Self::STORAGE_KEY) {
            Ok(value) => value?,
            Err(err) => {
                log::debug!("Locale preference unreadable: {}", err);
                return None;
            }
        };

        match Locale::from_code(&stored) {
            Some(locale) => {
                self.active = locale;
                Some(locale)
            }
            None => {
                log::debug!("Ignoring unknown persisted locale {:?}", stored);
                None
            }
        }
    }

    pub fn select(&mut self, locale: Locale) {
        self.active = locale;
        if let Err(err) = self.preferences.set(Self::STORAGE_KEY, locale.code()) {
            log::debug!("Locale preference not persisted: {}", err);
        }
        log::debug!("Locale switched to {}", locale);
    }

    /// Untyped variant of [`select`](Self::select). Unknown codes are ignored.
    pub fn select_code(&mut self, code: &str) -> bool {
        match Locale::from_code(code) {
            Some(locale) => {
                self.select(locale);
                true
            }
            None => false,
        }
    }

    /// Switch to the other language.
    pub fn toggle(&mut self) {
        self.select(self.active.other());
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    pub fn translations(&self) -> &'static Translations {
        self.active.translations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, NoopStore};

    #[test]
    fn test_detect_default() {
        assert_eq!(detect_default(&FixedLanguage::new("zh-CN")), Locale::Zh);
        assert_eq!(detect_default(&FixedLanguage::new("ZH-tw")), Locale::Zh);
        assert_eq!(detect_default(&FixedLanguage::new("zh")), Locale::Zh);
        assert_eq!(detect_default(&FixedLanguage::new("en-US")), Locale::En);
        assert_eq!(detect_default(&FixedLanguage::new("ja")), Locale::En);
        assert_eq!(detect_default(&FixedLanguage::new("")), Locale::En);
        assert_eq!(detect_default(&FixedLanguage::unavailable()), Locale::En);
    }

    #[test]
    fn test_explicit_default_skips_detection() {
        let store = LocaleStore::initialize(
            Some(Locale::En),
            &FixedLanguage::new("zh-CN"),
            Arc::new(NoopStore),
        );
        assert_eq!(store.active(), Locale::En);
    }

    #[test]
    fn test_persisted_preference_wins() {
        let prefs = Arc::new(MemoryStore::new().with_entry(LocaleStore::STORAGE_KEY, "en"));
        let mut store = LocaleStore::initialize(None, &FixedLanguage::new("zh-CN"), prefs);
        assert_eq!(store.active(), Locale::Zh);

        assert_eq!(store.restore(), Some(Locale::En));
        assert_eq!(store.active(), Locale::En);
    }

    #[test]
    fn test_malformed_preference_is_absent() {
        let prefs = Arc::new(MemoryStore::new().with_entry(LocaleStore::STORAGE_KEY, "fr"));
        let mut store = LocaleStore::initialize(None, &FixedLanguage::new("zh-HK"), prefs);

        assert_eq!(store.restore(), None);
        assert_eq!(store.active(), Locale::Zh);
    }

    #[test]
    fn test_toggle_persists() {
        let prefs = Arc::new(MemoryStore::new());
        let mut store = LocaleStore::initialize(Some(Locale::Zh), &FixedLanguage::unavailable(), prefs.clone());

        store.toggle();
        assert_eq!(store.active(), Locale::En);
        assert_eq!(prefs.get(LocaleStore::STORAGE_KEY).unwrap().as_deref(), Some("en"));

        assert!(!store.select_code("de"));
        assert_eq!(store.active(), Locale::En);
    }

    #[test]
    fn test_translations_follow_locale() {
        let mut store = LocaleStore::initialize(Some(Locale::Zh), &FixedLanguage::unavailable(), Arc::new(NoopStore));
        assert_eq!(store.translations().common.download, "下载");
        store.select(Locale::En);
        assert_eq!(store.translations().common.download, "Download");
    }
}
