// =============================================================================
// Mobaus Common - Shared Site Logic
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// =============================================================================
//
// Everything in this crate is browser-free. The web crate supplies the
// browser-backed `PreferenceStore`, `LanguageProvider` and `StyleSink`.
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod config;
pub mod downloads;
pub mod i18n;
pub mod locale;
pub mod release;
pub mod storage;
pub mod theme;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use config::SiteConfig;
pub use downloads::{DownloadLink, DownloadVariant, OsFamily, PlatformDownloads, PLATFORMS};
pub use i18n::Translations;
pub use locale::{detect_default, FixedLanguage, LanguageProvider, Locale, LocaleStore};
pub use release::{ReleaseError, ReleaseInfo, ReleaseState};
pub use storage::{MemoryStore, NoopStore, PreferenceStore, StorageError};
pub use theme::{Palette, Rgb, StyleSink, StyleUpdate, ThemeDefinition, ThemeStore, ThemeStyle};
