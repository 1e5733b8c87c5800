//! Test utilities for components and reducers
//!
//! - [`key`]: build a `KeyEvent` from a string (`"j"`, `"enter"`, `"ctrl+c"`)
//! - [`RenderHarness`]: render into ratatui's `TestBackend` and read the
//!   frame back as plain text

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

/// Create a `KeyEvent` from a key string.
///
/// Supports single characters, the named keys used by the app (`enter`,
/// `esc`, `tab`, `backtab`, `backspace`, `delete`, `up`, `down`, `left`,
/// `right`, `home`, `end`, `space`) and a `ctrl+` prefix.
///
/// # Panics
///
/// Panics on an unknown key string; this is test support code.
pub fn key(s: &str) -> KeyEvent {
    let (modifiers, rest) = match s.strip_prefix("ctrl+") {
        Some(rest) => (KeyModifiers::CONTROL, rest),
        None => (KeyModifiers::NONE, s),
    };

    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        rest => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => panic!("invalid key string: {:?}", s),
            }
        }
    };

    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a plain character.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Renders components into a test backend and exposes the frame as text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics when the test backend cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        Self { terminal }
    }

    /// Run one render pass and return the buffer contents, one line per
    /// terminal row, styling stripped.
    pub fn render_to_string(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(|frame| render(frame)).expect("draw");
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
