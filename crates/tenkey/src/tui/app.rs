//! TUI application state.

use ratatui::layout::Rect;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::theme::Skin;
use crate::core::{Key, Phase, Session, Tape};

/// Everything the terminal front end holds: the shared session, the on-screen
/// keypad, and the active skin.
#[derive(Debug, Default)]
pub struct CalculatorApp {
    session: Session,
    keypad: Keypad,
    skin: Skin,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app with the default skin and tape capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with a chosen skin.
    #[must_use]
    pub fn with_skin(skin: Skin) -> Self {
        Self {
            skin,
            ..Self::default()
        }
    }

    /// Creates an app with a chosen skin and tape capacity.
    #[must_use]
    pub fn with_skin_and_tape_limit(skin: Skin, limit: usize) -> Self {
        Self {
            session: Session::with_tape_limit(limit),
            skin,
            ..Self::default()
        }
    }

    /// Feeds a key to the session and highlights the matching button.
    pub fn press(&mut self, key: Key) {
        self.session.press(key);
        self.keypad.highlight(key);
    }

    /// Applies a mapped keyboard action. Returns true when the app should
    /// quit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Press(key) => self.press(key),
            KeyAction::ToggleSkin => self.toggle_skin(),
            KeyAction::ClearTape => self.session.clear_all(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
        self.should_quit
    }

    /// Resolves a mouse click against the keypad pane and presses the button
    /// under it, if any.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        if let Some(key) = self.keypad.hit_test(keypad_area, x, y) {
            self.press(key);
        }
    }

    /// The current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// The engine phase behind the display.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// The calculation tape.
    #[must_use]
    pub fn tape(&self) -> &Tape {
        self.session.tape()
    }

    /// The on-screen keypad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The active skin.
    #[must_use]
    pub fn skin(&self) -> Skin {
        self.skin
    }

    /// Switches to the other skin.
    pub fn toggle_skin(&mut self) {
        self.skin = self.skin.toggled();
    }

    /// One-line status for the footer.
    #[must_use]
    pub fn status(&self) -> String {
        match self.session.last_error() {
            Some(err) => format!("error: {err} (press C to start over)"),
            None => match self.phase() {
                Phase::Idle => "ready".to_string(),
                Phase::OperandEntered => "entering operand".to_string(),
                Phase::OperatorPending => "operator pending".to_string(),
                Phase::ResultShown => "result".to_string(),
                Phase::ErrorShown => "error".to_string(),
            },
        }
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
