//! Cross-session behaviour of the theme and locale stores and the
//! release fallback path. A "reload" is a fresh store over the same storage.

use std::sync::Arc;

use mobaus_common::downloads::{recommended_download, OsFamily, PLATFORMS};
use mobaus_common::theme::CSS_VARIABLES;
use mobaus_common::{
    detect_default, FixedLanguage, Locale, LocaleStore, MemoryStore, PreferenceStore, ReleaseError,
    ReleaseState, SiteConfig, StorageError, StyleSink, StyleUpdate, ThemeStore, ThemeStyle,
};
use parking_lot::Mutex;

#[derive(Default)]
struct RecordingSink {
    updates: Mutex<Vec<StyleUpdate>>,
}

impl StyleSink for RecordingSink {
    fn apply(&self, update: &StyleUpdate) {
        self.updates.lock().push(update.clone());
    }
}

/// Storage that refuses every read and write, like a disabled localStorage.
struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("SecurityError".into()))
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected {
            key: key.into(),
            reason: "QuotaExceededError".into(),
        })
    }
}

fn theme_store(prefs: Arc<dyn PreferenceStore>) -> ThemeStore {
    ThemeStore::initialize(ThemeStyle::Cyberpunk, prefs, Arc::new(RecordingSink::default()))
}

#[test]
fn test_theme_selection_survives_reload() {
    for style in ThemeStyle::ALL {
        let prefs: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());

        let mut before = theme_store(prefs.clone());
        before.mount();
        before.select(style);

        let mut after = theme_store(prefs);
        after.restore();
        assert_eq!(after.active(), style);
    }
}

#[test]
fn test_invalid_theme_selection_is_noop() {
    let prefs: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
    let mut store = theme_store(prefs.clone());
    store.select(ThemeStyle::Aurora);

    for bogus in ["", "AURORA", "neon", "matrix ", "cyberpunk2077"] {
        assert!(!store.select_id(bogus));
        assert_eq!(store.active(), ThemeStyle::Aurora);
    }
    assert_eq!(prefs.get(ThemeStore::STORAGE_KEY).unwrap().as_deref(), Some("aurora"));
}

#[test]
fn test_locale_selection_survives_reload() {
    for locale in Locale::ALL {
        let prefs: Arc<dyn PreferenceStore> = Arc::new(MemoryStore::new());
        let env = FixedLanguage::new("en-GB");

        let mut before = LocaleStore::initialize(None, &env, prefs.clone());
        before.restore();
        before.select(locale);

        let mut after = LocaleStore::initialize(None, &env, prefs);
        after.restore();
        assert_eq!(after.active(), locale);
    }
}

#[test]
fn test_detect_default_signals() {
    for tag in ["zh", "zh-CN", "zh-Hans-SG", "ZH-TW", "Zh"] {
        assert_eq!(detect_default(&FixedLanguage::new(tag)), Locale::Zh, "{}", tag);
    }
    for tag in ["en", "en-US", "ja-JP", "", " zh", "cmn"] {
        assert_eq!(detect_default(&FixedLanguage::new(tag)), Locale::En, "{}", tag);
    }
    assert_eq!(detect_default(&FixedLanguage::unavailable()), Locale::En);
}

#[test]
fn test_broken_storage_keeps_session_state() {
    let prefs: Arc<dyn PreferenceStore> = Arc::new(BrokenStore);

    let mut theme = theme_store(prefs.clone());
    theme.mount();
    assert_eq!(theme.active(), ThemeStyle::Cyberpunk);
    theme.select(ThemeStyle::Matrix);
    assert_eq!(theme.active(), ThemeStyle::Matrix);

    let mut locale = LocaleStore::initialize(None, &FixedLanguage::new("zh-CN"), prefs);
    assert_eq!(locale.restore(), None);
    assert_eq!(locale.active(), Locale::Zh);
    locale.select(Locale::En);
    assert_eq!(locale.active(), Locale::En);
}

#[test]
fn test_theme_switch_publishes_whole_palette_at_once() {
    let sink = Arc::new(RecordingSink::default());
    let mut store = ThemeStore::initialize(ThemeStyle::Cyberpunk, Arc::new(MemoryStore::new()), sink.clone());

    store.select(ThemeStyle::Immersive);
    store.select(ThemeStyle::Matrix);

    let updates = sink.updates.lock();
    assert_eq!(updates.len(), 2);

    for (update, style) in updates.iter().zip([ThemeStyle::Immersive, ThemeStyle::Matrix]) {
        let palette = style.palette();
        let expected = [
            palette.primary.css(),
            palette.secondary.css(),
            palette.accent.css(),
            palette.background.css(),
            palette.foreground.css(),
        ];
        assert_eq!(update.marker, style.id());
        for (index, (name, value)) in update.variables.iter().enumerate() {
            assert_eq!(*name, CSS_VARIABLES[index]);
            assert_eq!(*value, expected[index]);
        }
    }
}

#[test]
fn test_release_tag_drives_links() {
    let config = SiteConfig::current();
    let body = r#"{"tag_name":"v1.2.3","published_at":"2025-06-01T08:30:00Z","html_url":"https://example.invalid"}"#;
    let state = ReleaseState::from_response(200, body, &config);

    assert_eq!(state.valid_version(), Some("1.2.3"));
    let link = PLATFORMS[0].variants[0].link(state.valid_version(), &config);
    assert!(link.url.ends_with("/MobausStudio_1.2.3_aarch64.dmg"));
}

#[test]
fn test_failed_release_degrades_every_link() {
    let config = SiteConfig::current();
    let failures = [
        ReleaseState::from_error(ReleaseError::Network("offline".into()), &config),
        ReleaseState::from_response(500, "", &config),
        ReleaseState::from_response(200, "{not json", &config),
        ReleaseState::from_response(200, "{}", &config),
    ];

    for state in failures {
        assert!(state.error.is_some());
        assert_eq!(state.release.version, config.version);
        assert_eq!(state.valid_version(), None);

        for platform in &PLATFORMS {
            for variant in platform.variants {
                assert_eq!(variant.link(state.valid_version(), &config).url, config.release_page_url());
            }
        }

        let t = Locale::En.translations();
        let suggested = recommended_download(OsFamily::MacOs, true, state.valid_version(), t, &config);
        assert!(suggested.is_release_page);
    }
}
