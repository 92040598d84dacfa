// =============================================================================
// Mobaus Web - Navigator Language
// =============================================================================

use mobaus_common::LanguageProvider;

/// Reads `navigator.language`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigatorLanguage;

impl LanguageProvider for NavigatorLanguage {
    fn language(&self) -> Option<String> {
        web_sys::window()?.navigator().language()
    }
}
