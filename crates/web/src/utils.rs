// =============================================================================
// Mobaus Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. System Detection
// 3. Theme Text Decorations
// =============================================================================

use mobaus_common::{OsFamily, ThemeStyle};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, ScrollBehavior, ScrollToOptions, WebGlRenderingContext};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Jump to the top of the page, used on route changes.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Instant);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Set `<html lang>` so assistive tech follows the locale switch.
pub fn set_document_lang(code: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(err) = root.set_attribute("lang", code) {
            log::warn!("Failed to set lang: {:?}", err);
        }
    }
}

// -----------------------------------------------------------------------------
// 2. System Detection
// -----------------------------------------------------------------------------

/// `UNMASKED_RENDERER_WEBGL` from `WEBGL_debug_renderer_info`.
const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;

/// Classify the visitor's OS from the navigator.
pub fn detect_os() -> OsFamily {
    let Some(window) = web_sys::window() else {
        return OsFamily::Unknown;
    };
    let navigator = window.navigator();
    let user_agent = navigator.user_agent().unwrap_or_default();
    let platform = navigator.platform().unwrap_or_default();
    OsFamily::detect(&user_agent, &platform)
}

/// Best-effort Apple Silicon check via the WebGL renderer string.
///
/// Browsers report "Apple M1", "Apple M2", ... on ARM Macs. Anything that
/// goes wrong reads as `false`.
pub fn is_apple_silicon() -> bool {
    webgl_renderer().is_some_and(|renderer| is_apple_silicon_renderer(&renderer))
}

fn webgl_renderer() -> Option<String> {
    let canvas = web_sys::window()?
        .document()?
        .create_element("canvas")
        .ok()?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    let gl = canvas
        .get_context("webgl")
        .ok()??
        .dyn_into::<WebGlRenderingContext>()
        .ok()?;

    gl.get_extension("WEBGL_debug_renderer_info").ok()??;
    gl.get_parameter(UNMASKED_RENDERER_WEBGL).ok()?.as_string()
}

fn is_apple_silicon_renderer(renderer: &str) -> bool {
    renderer.contains("Apple M")
}

// -----------------------------------------------------------------------------
// 3. Theme Text Decorations
// -----------------------------------------------------------------------------

/// Prefix `text` with `marker` under the terminal-style theme only.
pub fn terminal_text(style: ThemeStyle, marker: &str, text: &str) -> String {
    if style.is_terminal() {
        format!("{}{}", marker, text)
    } else {
        text.to_string()
    }
}

/// `// heading` under the terminal theme.
pub fn terminal_comment(style: ThemeStyle, text: &str) -> String {
    terminal_text(style, "// ", text)
}

/// `> line` under the terminal theme.
pub fn terminal_prompt(style: ThemeStyle, text: &str) -> String {
    terminal_text(style, "> ", text)
}

/// `[label]` under the terminal theme.
pub fn terminal_bracket(style: ThemeStyle, text: &str) -> String {
    if style.is_terminal() {
        format!("[{}]", text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_silicon_renderer() {
        assert!(is_apple_silicon_renderer("ANGLE (Apple, ANGLE Metal Renderer: Apple M2 Pro, Unspecified Version)"));
        assert!(is_apple_silicon_renderer("Apple M1"));
        assert!(!is_apple_silicon_renderer("Intel(R) Iris(TM) Plus Graphics 655"));
        assert!(!is_apple_silicon_renderer("Apple GPU"));
    }

    #[test]
    fn test_terminal_decorations_only_on_matrix() {
        assert_eq!(terminal_comment(ThemeStyle::Matrix, "Features"), "// Features");
        assert_eq!(terminal_prompt(ThemeStyle::Matrix, "Download"), "> Download");
        assert_eq!(terminal_bracket(ThemeStyle::Matrix, "EN"), "[EN]");

        for style in [ThemeStyle::Cyberpunk, ThemeStyle::Aurora, ThemeStyle::Immersive] {
            assert_eq!(terminal_comment(style, "Features"), "Features");
            assert_eq!(terminal_bracket(style, "EN"), "EN");
        }
    }
}
