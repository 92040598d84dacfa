// =============================================================================
// Mobaus Web - Visual Effects
// =============================================================================
// Table of Contents:
// 1. TypeWriter State
// 2. TypeWriter Component
// 3. Glow Background
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mobaus_common::{Palette, Rgb};

use crate::state::use_theme;

// -----------------------------------------------------------------------------
// 1. TypeWriter State
// -----------------------------------------------------------------------------

pub const TYPE_SPEED_MS: u32 = 100;
pub const DELETE_SPEED_MS: u32 = 50;
pub const PAUSE_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Typing,
    Paused,
    Deleting,
}

/// Type out each line, hold it, erase it, move to the next, forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeWriterState {
    line: usize,
    /// Characters of the current line on screen.
    shown: usize,
    phase: Phase,
}

impl TypeWriterState {
    fn current<'a>(&self, lines: &[&'a str]) -> &'a str {
        if lines.is_empty() {
            ""
        } else {
            lines[self.line % lines.len()]
        }
    }

    /// Advance one tick. Returns the delay before the next tick.
    pub fn step(&mut self, lines: &[&str]) -> u32 {
        if lines.is_empty() {
            return PAUSE_MS;
        }

        let length = self.current(lines).chars().count();
        match self.phase {
            Phase::Typing if self.shown >= length => {
                self.phase = Phase::Paused;
                PAUSE_MS
            }
            Phase::Typing => {
                self.shown += 1;
                TYPE_SPEED_MS
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
                DELETE_SPEED_MS
            }
            Phase::Deleting if self.shown == 0 => {
                self.line = (self.line + 1) % lines.len();
                self.phase = Phase::Typing;
                TYPE_SPEED_MS
            }
            Phase::Deleting => {
                self.shown -= 1;
                DELETE_SPEED_MS
            }
        }
    }

    /// Visible text. Counts characters, so CJK lines type one glyph per tick.
    pub fn text(&self, lines: &[&str]) -> String {
        self.current(lines).chars().take(self.shown).collect()
    }
}

// -----------------------------------------------------------------------------
// 2. TypeWriter Component
// -----------------------------------------------------------------------------

/// Cycles through `lines` with a blinking cursor. Restarts when the lines
/// change (locale switch).
#[component]
pub fn TypeWriter(
    #[prop(into)] lines: Signal<&'static [&'static str]>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let theme = use_theme();
    let state = RwSignal::new(TypeWriterState::default());

    Effect::new(move |_| {
        lines.track();
        state.set(TypeWriterState::default());
    });

    spawn_local(async move {
        let mut delay = TYPE_SPEED_MS;
        loop {
            TimeoutFuture::new(delay).await;
            let Some(current) = lines.try_get_untracked() else {
                break;
            };
            match state.try_update(|s| s.step(current)) {
                Some(next) => delay = next,
                None => break,
            }
        }
    });

    let cursor_style = move || format!("background-color: {}", theme.palette().primary.css());

    view! {
        <span class=format!("typewriter {}", class)>
            <span>{move || state.with(|s| s.text(lines.get()))}</span>
            <span class="typewriter-cursor" style=cursor_style></span>
        </span>
    }
}

// -----------------------------------------------------------------------------
// 3. Glow Background
// -----------------------------------------------------------------------------

/// Blurred palette orbs behind a section. Pure CSS, no canvas.
#[component]
pub fn GlowBackground() -> impl IntoView {
    let theme = use_theme();
    let orb = move |color: fn(&Palette) -> Rgb| {
        move || format!("background: {}", color(&theme.palette()).css_alpha(0x40))
    };

    view! {
        <div class="glow-background" aria-hidden="true">
            <div class="grid-overlay"></div>
            <div class="glow-orb glow-1" style=orb(|p| p.primary)></div>
            <div class="glow-orb glow-2" style=orb(|p| p.secondary)></div>
            <div class="glow-orb glow-3" style=orb(|p| p.accent)></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &["ab", "中文"];

    #[test]
    fn test_types_then_pauses() {
        let mut state = TypeWriterState::default();
        assert_eq!(state.step(LINES), TYPE_SPEED_MS);
        assert_eq!(state.text(LINES), "a");
        assert_eq!(state.step(LINES), TYPE_SPEED_MS);
        assert_eq!(state.text(LINES), "ab");
        assert_eq!(state.step(LINES), PAUSE_MS);
        assert_eq!(state.step(LINES), DELETE_SPEED_MS);
        assert_eq!(state.text(LINES), "ab");
    }

    #[test]
    fn test_full_cycle_moves_to_next_line() {
        let mut state = TypeWriterState::default();
        // type 2, pause, enter delete, delete 2, advance
        for _ in 0..7 {
            state.step(LINES);
        }
        assert_eq!(state.text(LINES), "");
        state.step(LINES);
        assert_eq!(state.text(LINES), "中");
    }

    #[test]
    fn test_wraps_after_last_line() {
        let mut state = TypeWriterState::default();
        for _ in 0..14 {
            state.step(LINES);
        }
        state.step(LINES);
        assert_eq!(state.text(LINES), "a");
    }

    #[test]
    fn test_empty_lines_idle() {
        let mut state = TypeWriterState::default();
        assert_eq!(state.step(&[]), PAUSE_MS);
        assert_eq!(state.text(&[]), "");
    }
}
