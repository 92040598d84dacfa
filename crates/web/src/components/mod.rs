// =============================================================================
// Mobaus Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Layout Components
// 2. Common Components
// 3. Switchers
// 4. Effects
// =============================================================================

pub mod common;
pub mod effects;
pub mod footer;
pub mod language_switcher;
pub mod layout;
pub mod nav;
pub mod theme_switcher;

pub use common::{Button, ButtonSize, ButtonVariant, Card, Icon, LoadingSpinner};
pub use effects::{GlowBackground, TypeWriter};
pub use footer::Footer;
pub use language_switcher::LanguageSwitcher;
pub use layout::Layout;
pub use nav::Header;
pub use theme_switcher::ThemeSwitcher;
