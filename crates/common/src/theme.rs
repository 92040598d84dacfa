// =============================================================================
// Mobaus Common - Theme Styles & Theme Store
// =============================================================================
// Table of Contents:
// 1. Colors & Palettes
// 2. Theme Styles
// 3. Style Propagation
// 4. Theme Store
// =============================================================================

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::locale::Locale;
use crate::storage::PreferenceStore;

// -----------------------------------------------------------------------------
// 1. Colors & Palettes
// -----------------------------------------------------------------------------

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// `#rrggbb`.
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// `#rrggbbaa`, used for translucent glows and gradients.
    pub fn css_alpha(self, alpha: u8) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, alpha)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The five colors every theme defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub background: Rgb,
    pub foreground: Rgb,
}

/// CSS custom property names, in palette order.
pub const CSS_VARIABLES: [&str; 5] = [
    "--theme-primary",
    "--theme-secondary",
    "--theme-accent",
    "--theme-background",
    "--theme-foreground",
];

impl Palette {
    /// Variable name / value pairs for all five colors.
    pub fn css_variables(&self) -> [(&'static str, String); 5] {
        [
            (CSS_VARIABLES[0], self.primary.css()),
            (CSS_VARIABLES[1], self.secondary.css()),
            (CSS_VARIABLES[2], self.accent.css()),
            (CSS_VARIABLES[3], self.background.css()),
            (CSS_VARIABLES[4], self.foreground.css()),
        ]
    }
}

// -----------------------------------------------------------------------------
// 2. Theme Styles
// -----------------------------------------------------------------------------

/// Static description of one theme.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub name_zh: &'static str,
    pub description_zh: &'static str,
    pub description_en: &'static str,
    pub palette: Palette,
}

impl ThemeDefinition {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.name_zh,
            Locale::En => self.name,
        }
    }

    pub fn description(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Zh => self.description_zh,
            Locale::En => self.description_en,
        }
    }
}

static CYBERPUNK: ThemeDefinition = ThemeDefinition {
    name: "Cyberpunk",
    name_zh: "赛博朋克",
    description_zh: "霓虹灯、暗色调、故障艺术",
    description_en: "Neon lights, dark tones, glitch art",
    palette: Palette {
        primary: Rgb::from_hex(0x00fff5),
        secondary: Rgb::from_hex(0xff00ff),
        accent: Rgb::from_hex(0xffff00),
        background: Rgb::from_hex(0x0a0a0f),
        foreground: Rgb::from_hex(0xffffff),
    },
};

static AURORA: ThemeDefinition = ThemeDefinition {
    name: "Aurora",
    name_zh: "极光幻境",
    description_zh: "流动极光、梦幻渐变、光晕脉动",
    description_en: "Flowing aurora, dreamy gradients, pulsing halos",
    palette: Palette {
        primary: Rgb::from_hex(0x00ff87),
        secondary: Rgb::from_hex(0x60efff),
        accent: Rgb::from_hex(0xff00e5),
        background: Rgb::from_hex(0x0d0d1a),
        foreground: Rgb::from_hex(0xffffff),
    },
};

static IMMERSIVE: ThemeDefinition = ThemeDefinition {
    name: "Immersive",
    name_zh: "3D 沉浸",
    description_zh: "星空粒子、3D 效果、科幻感",
    description_en: "Starfield particles, 3D depth, sci-fi feel",
    palette: Palette {
        primary: Rgb::from_hex(0x8b5cf6),
        secondary: Rgb::from_hex(0x06b6d4),
        accent: Rgb::from_hex(0xf59e0b),
        background: Rgb::from_hex(0x030014),
        foreground: Rgb::from_hex(0xffffff),
    },
};

static MATRIX: ThemeDefinition = ThemeDefinition {
    name: "Matrix",
    name_zh: "黑客帝国",
    description_zh: "数字雨、终端风格、代码美学",
    description_en: "Digital rain, terminal style, code aesthetics",
    palette: Palette {
        primary: Rgb::from_hex(0x00ff00),
        secondary: Rgb::from_hex(0x00cc00),
        accent: Rgb::from_hex(0x33ff33),
        background: Rgb::from_hex(0x000000),
        foreground: Rgb::from_hex(0x00ff00),
    },
};

/// The four visual styles of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeStyle {
    #[default]
    Cyberpunk,
    Aurora,
    Immersive,
    Matrix,
}

impl ThemeStyle {
    /// All styles in switcher order.
    pub const ALL: [ThemeStyle; 4] = [
        ThemeStyle::Cyberpunk,
        ThemeStyle::Aurora,
        ThemeStyle::Immersive,
        ThemeStyle::Matrix,
    ];

    /// Literal identifier used for persistence and the `data-theme` marker.
    pub const fn id(self) -> &'static str {
        match self {
            ThemeStyle::Cyberpunk => "cyberpunk",
            ThemeStyle::Aurora => "aurora",
            ThemeStyle::Immersive => "immersive",
            ThemeStyle::Matrix => "matrix",
        }
    }

    /// Exact-match lookup of an identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.id() == id)
    }

    pub fn definition(self) -> &'static ThemeDefinition {
        match self {
            ThemeStyle::Cyberpunk => &CYBERPUNK,
            ThemeStyle::Aurora => &AURORA,
            ThemeStyle::Immersive => &IMMERSIVE,
            ThemeStyle::Matrix => &MATRIX,
        }
    }

    pub fn palette(self) -> Palette {
        self.definition().palette
    }

    /// Matrix renders copy with terminal decorations (`// `, `> `, `[ ]`).
    pub const fn is_terminal(self) -> bool {
        matches!(self, ThemeStyle::Matrix)
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing an unknown theme identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme style: {0}")]
pub struct UnknownThemeStyle(pub String);

impl FromStr for ThemeStyle {
    type Err = UnknownThemeStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownThemeStyle(s.to_string()))
    }
}

// -----------------------------------------------------------------------------
// 3. Style Propagation
// -----------------------------------------------------------------------------

/// Root attribute carrying the active theme id.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Complete set of global style changes for one theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleUpdate {
    pub variables: [(&'static str, String); 5],
    pub marker: &'static str,
}

impl StyleUpdate {
    pub fn for_style(style: ThemeStyle) -> Self {
        Self {
            variables: style.palette().css_variables(),
            marker: style.id(),
        }
    }
}

/// Target for global style variables (the document root in the browser).
///
/// A single `apply` call carries every variable, so no consumer can observe
/// a mix of two palettes.
pub trait StyleSink: Send + Sync {
    fn apply(&self, update: &StyleUpdate);
}

// -----------------------------------------------------------------------------
// 4. Theme Store
// -----------------------------------------------------------------------------

/// Holds the active theme, persists it, and publishes its palette.
pub struct ThemeStore {
    active: ThemeStyle,
    mounted: bool,
    preferences: Arc<dyn PreferenceStore>,
    sink: Arc<dyn StyleSink>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("active", &self.active)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// localStorage key for the selected theme.
    pub const STORAGE_KEY: &'static str = "mobaus-theme";

    /// Create a store on `default`. Nothing is read, written or published.
    pub fn initialize(
        default: ThemeStyle,
        preferences: Arc<dyn PreferenceStore>,
        sink: Arc<dyn StyleSink>,
    ) -> Self {
        Self {
            active: default,
            mounted: false,
            preferences,
            sink,
        }
    }

    /// Adopt the persisted theme if it names a known style.
    ///
    /// Returns the adopted style. Unknown or unreadable values leave the
    /// current style in place.
    pub fn restore(&mut self) -> Option<ThemeStyle> {
        let stored = match self.preferences.get(Self::STORAGE_KEY) {
            Ok(value) => value?,
            Err(err) => {
                log::debug!("Theme preference unreadable: {}", err);
                return None;
            }
        };

        match ThemeStyle::from_id(&stored) {
            Some(style) => {
                self.active = style;
                Some(style)
            }
            None => {
                log::debug!("Ignoring unknown persisted theme {:?}", stored);
                None
            }
        }
    }

    /// Restore, publish the palette, and mark the store mounted.
    pub fn mount(&mut self) {
        self.restore();
        self.publish();
        self.mounted = true;
    }

    /// Switch to `style`, persist it and publish its palette.
    pub fn select(&mut self, style: ThemeStyle) {
        self.active = style;
        if let Err(err) = self.preferences.set(Self::STORAGE_KEY, style.id()) {
            log::debug!("Theme preference not persisted: {}", err);
        }
        self.publish();
        log::debug!("Theme switched to {}", style);
    }

    /// Untyped variant of [`select`](Self::select). Unknown ids are ignored.
    pub fn select_id(&mut self, id: &str) -> bool {
        match ThemeStyle::from_id(id) {
            Some(style) => {
                self.select(style);
                true
            }
            None => false,
        }
    }

    fn publish(&self) {
        self.sink.apply(&StyleUpdate::for_style(self.active));
    }

    pub fn active(&self) -> ThemeStyle {
        self.active
    }

    pub fn palette(&self) -> Palette {
        self.active.palette()
    }

    pub fn definition(&self) -> &'static ThemeDefinition {
        self.active.definition()
    }

    /// Every style with its definition, in switcher order.
    pub fn variants(&self) -> impl Iterator<Item = (ThemeStyle, &'static ThemeDefinition)> {
        ThemeStyle::ALL.into_iter().map(|style| (style, style.definition()))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<StyleUpdate>>);

    impl StyleSink for Recorder {
        fn apply(&self, update: &StyleUpdate) {
            self.0.lock().push(update.clone());
        }
    }

    fn store_with(prefs: Arc<MemoryStore>) -> (ThemeStore, Arc<Recorder>) {
        let sink = Arc::new(Recorder::default());
        let store = ThemeStore::initialize(ThemeStyle::Cyberpunk, prefs, sink.clone());
        (store, sink)
    }

    #[test]
    fn test_rgb_css() {
        let color = Rgb::from_hex(0x00fff5);
        assert_eq!(color, Rgb(0x00, 0xff, 0xf5));
        assert_eq!(color.css(), "#00fff5");
        assert_eq!(color.to_string(), "#00fff5");
        assert_eq!(color.css_alpha(0x20), "#00fff520");
    }

    #[test]
    fn test_ids_roundtrip() {
        for style in ThemeStyle::ALL {
            assert_eq!(ThemeStyle::from_id(style.id()), Some(style));
            assert_eq!(style.id().parse::<ThemeStyle>(), Ok(style));
        }
        assert_eq!(ThemeStyle::from_id("Matrix"), None);
        assert!("neon".parse::<ThemeStyle>().is_err());
    }

    #[test]
    fn test_matrix_palette() {
        let palette = ThemeStyle::Matrix.palette();
        assert_eq!(palette.primary.css(), "#00ff00");
        assert_eq!(palette.foreground.css(), "#00ff00");
        assert_eq!(palette.background.css(), "#000000");
    }

    #[test]
    fn test_initialize_has_no_side_effects() {
        let prefs = Arc::new(MemoryStore::new());
        let (store, sink) = store_with(prefs.clone());

        assert_eq!(store.active(), ThemeStyle::Cyberpunk);
        assert!(!store.is_mounted());
        assert!(prefs.is_empty());
        assert!(sink.0.lock().is_empty());
    }

    #[test]
    fn test_mount_restores_and_publishes() {
        let prefs = Arc::new(MemoryStore::new().with_entry(ThemeStore::STORAGE_KEY, "aurora"));
        let (mut store, sink) = store_with(prefs);

        store.mount();

        assert!(store.is_mounted());
        assert_eq!(store.active(), ThemeStyle::Aurora);
        let updates = sink.0.lock();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].marker, "aurora");
    }

    #[test]
    fn test_restore_ignores_unknown_value() {
        let prefs = Arc::new(MemoryStore::new().with_entry(ThemeStore::STORAGE_KEY, "vaporwave"));
        let (mut store, _sink) = store_with(prefs);

        assert_eq!(store.restore(), None);
        assert_eq!(store.active(), ThemeStyle::Cyberpunk);
    }

    #[test]
    fn test_select_id_rejects_unknown() {
        let prefs = Arc::new(MemoryStore::new());
        let (mut store, sink) = store_with(prefs.clone());
        store.select(ThemeStyle::Immersive);

        assert!(!store.select_id("neon"));
        assert_eq!(store.active(), ThemeStyle::Immersive);
        assert_eq!(prefs.get(ThemeStore::STORAGE_KEY).unwrap().as_deref(), Some("immersive"));
        assert_eq!(sink.0.lock().len(), 1);
    }

    #[test]
    fn test_variants_cover_all_styles() {
        let prefs = Arc::new(MemoryStore::new());
        let (store, _sink) = store_with(prefs);
        let ids: Vec<_> = store.variants().map(|(style, _)| style.id()).collect();
        assert_eq!(ids, ["cyberpunk", "aurora", "immersive", "matrix"]);
    }

    #[test]
    fn test_localized_names() {
        let def = ThemeStyle::Immersive.definition();
        assert_eq!(def.display_name(Locale::Zh), "3D 沉浸");
        assert_eq!(def.display_name(Locale::En), "Immersive");
        assert_eq!(def.description(Locale::Zh), "星空粒子、3D 效果、科幻感");
    }
}
