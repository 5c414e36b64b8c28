//! Live browser bindings.
//!
//! The `wasm-bindgen` surface over [`WebCalculator`]. The page script wires
//! button click handlers and a keydown listener to [`BrowserCalculator`] and
//! copies the returned display text into the document.

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::calculator::WebCalculator;

/// The calculator exposed to JavaScript.
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WebCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator and installs the panic hook.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WebCalculator::new(),
        }
    }

    /// The current display text.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.inner.display().to_string()
    }

    /// The one-line status text.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn status(&self) -> String {
        self.inner.status()
    }

    /// Handles a click on a keypad element id; returns the new display text,
    /// or `None` for ids that are not keypad buttons.
    pub fn handle_button(&mut self, element_id: &str) -> Option<String> {
        self.inner.handle_button(element_id)
    }

    /// Handles a keyboard event key string; returns the new display text, or
    /// `None` for keys the calculator ignores.
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        self.inner.handle_key(key)
    }

    /// Tape lines, newest first.
    #[must_use]
    pub fn tape_lines(&self) -> Vec<String> {
        self.inner.tape_lines()
    }

    /// The tape as JSON.
    #[must_use]
    pub fn tape_json(&self) -> String {
        self.inner.tape_json()
    }

    /// Number of tape entries.
    #[must_use]
    pub fn tape_len(&self) -> usize {
        self.inner.tape().len()
    }

    /// Resets the calculator; the tape survives.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Resets the calculator and empties the tape.
    pub fn clear_all(&mut self) {
        self.inner.clear_all();
    }
}

/// Module entry point, called by the browser on load.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"tenkey wasm ready".into());
}
