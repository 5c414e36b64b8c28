//! Web calculator state.
//!
//! Wraps the shared [`Session`] with the keypad bindings the page needs:
//! clicks arrive as element ids, keystrokes as browser key strings, and the
//! tape goes out as plain strings or JSON.

use tracing::debug;

use super::keypad::WebKeypad;
use crate::core::{EngineError, Key, Phase, Session, Tape};

/// The calculator as the web page sees it.
#[derive(Debug, Default)]
pub struct WebCalculator {
    session: Session,
    keypad: WebKeypad,
}

impl WebCalculator {
    /// Creates a calculator with the default tape capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator whose tape holds at most `limit` entries.
    #[must_use]
    pub fn with_tape_limit(limit: usize) -> Self {
        Self {
            session: Session::with_tape_limit(limit),
            keypad: WebKeypad::new(),
        }
    }

    /// Feeds an engine key directly.
    pub fn press(&mut self, key: Key) {
        self.session.press(key);
    }

    /// Handles a click on a keypad element. Returns the new display text when
    /// the id belonged to a button.
    pub fn handle_button(&mut self, element_id: &str) -> Option<String> {
        let key = self.keypad.resolve_click(element_id)?;
        debug!(element_id, ?key, "button click");
        self.session.press(key);
        Some(self.display().to_string())
    }

    /// Handles a browser keyboard event. Returns the new display text when
    /// the key mapped to a button.
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        let key = WebKeypad::resolve_key(key)?;
        self.session.press(key);
        Some(self.display().to_string())
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

    /// The failure behind the error marker, when it is showing.
    #[must_use]
    pub fn last_error(&self) -> Option<&EngineError> {
        self.session.last_error()
    }

    /// One-line status for the page footer.
    #[must_use]
    pub fn status(&self) -> String {
        match self.session.last_error() {
            Some(err) => format!("error: {err}"),
            None => "ok".to_string(),
        }
    }

    /// The keypad bindings.
    #[must_use]
    pub fn keypad(&self) -> &WebKeypad {
        &self.keypad
    }

    /// The calculation tape.
    #[must_use]
    pub fn tape(&self) -> &Tape {
        self.session.tape()
    }

    /// Tape lines, newest first, for list rendering.
    #[must_use]
    pub fn tape_lines(&self) -> Vec<String> {
        self.session
            .tape()
            .iter_rev()
            .map(|entry| entry.display())
            .collect()
    }

    /// The tape as JSON for interop.
    #[must_use]
    pub fn tape_json(&self) -> String {
        self.session
            .tape()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Resets the engine; the tape survives.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Resets the engine and empties the tape.
    pub fn clear_all(&mut self) {
        self.session.clear_all();
    }
}
