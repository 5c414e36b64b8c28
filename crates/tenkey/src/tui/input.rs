//! Keyboard input mapping.
//!
//! Keystrokes are normalized into engine [`Key`] tokens here, including the
//! Unicode operator glyphs some terminals paste in (`−`, `×`, `÷`). The
//! engine itself only ever sees the four canonical operators.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Key, Operator};

/// What a keystroke asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a key to the engine.
    Press(Key),
    /// Switch to the other skin.
    ToggleSkin,
    /// Empty the tape.
    ClearTape,
    /// Quit the application.
    Quit,
    /// Ignored input.
    None,
}

/// Translates a character into an engine key, if it maps to one.
///
/// This is the symbol-set lookup: ASCII operators and their Unicode
/// calculator glyphs both resolve to the same canonical [`Operator`].
#[must_use]
pub fn char_to_key(c: char) -> Option<Key> {
    match c {
        '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
        '.' => Some(Key::Decimal),
        '=' => Some(Key::Equals),
        'c' | 'C' => Some(Key::Clear),
        '−' => Some(Key::Operator(Operator::Subtract)),
        '×' => Some(Key::Operator(Operator::Multiply)),
        '÷' => Some(Key::Operator(Operator::Divide)),
        _ => Operator::from_symbol(c).map(Key::Operator),
    }
}

/// Maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearTape,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => char_to_key(c).map_or(KeyAction::None, KeyAction::Press),
            KeyCode::Enter => KeyAction::Press(Key::Equals),
            KeyCode::Esc => KeyAction::Press(Key::Clear),
            KeyCode::Tab => KeyAction::ToggleSkin,
            _ => KeyAction::None,
        }
    }
}
