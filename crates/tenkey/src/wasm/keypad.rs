//! Web keypad definitions.
//!
//! The button grid with stable element ids, the click-to-key resolution, and
//! the keyboard-string mapping. Like the TUI input layer, the browser-glyph
//! translation (`−`, `×`, `÷`) happens here so the engine only ever sees
//! canonical operators.

use super::dom::DomElement;
use crate::core::{Key, Operator};

/// A keypad button bound to a DOM element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebKey {
    /// The engine key this button emits.
    pub key: Key,
    /// The element id, e.g. `"key-7"` or `"key-divide"`.
    pub id: String,
    /// Grid row (0-indexed).
    pub row: usize,
    /// Grid column (0-indexed).
    pub col: usize,
}

impl WebKey {
    /// Creates a button definition at a grid position.
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            id: element_id(key),
            key,
            row,
            col,
        }
    }
}

/// The stable element id for a key.
#[must_use]
pub fn element_id(key: Key) -> String {
    match key {
        Key::Digit(d) => format!("key-{d}"),
        Key::Decimal => "key-decimal".to_string(),
        Key::Operator(Operator::Add) => "key-plus".to_string(),
        Key::Operator(Operator::Subtract) => "key-minus".to_string(),
        Key::Operator(Operator::Multiply) => "key-times".to_string(),
        Key::Operator(Operator::Divide) => "key-divide".to_string(),
        Key::Equals => "key-equals".to_string(),
        Key::Clear => "key-clear".to_string(),
    }
}

/// The label a button shows (ASCII canonical form; the page's stylesheet may
/// swap in display glyphs).
#[must_use]
pub fn label(key: Key) -> String {
    match key {
        Key::Digit(d) => d.to_string(),
        Key::Decimal => ".".to_string(),
        Key::Operator(op) => op.symbol().to_string(),
        Key::Equals => "=".to_string(),
        Key::Clear => "C".to_string(),
    }
}

/// The web keypad: same shape as the terminal one.
#[derive(Debug, Clone)]
pub struct WebKeypad {
    buttons: Vec<WebKey>,
}

impl Default for WebKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WebKeypad {
    /// Creates the standard layout.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            WebKey::new(Key::Clear, 0, 0),
            WebKey::new(Key::Operator(Operator::Divide), 0, 1),
            WebKey::new(Key::Operator(Operator::Multiply), 0, 2),
            WebKey::new(Key::Operator(Operator::Subtract), 0, 3),
            WebKey::new(Key::Digit(7), 1, 0),
            WebKey::new(Key::Digit(8), 1, 1),
            WebKey::new(Key::Digit(9), 1, 2),
            WebKey::new(Key::Operator(Operator::Add), 1, 3),
            WebKey::new(Key::Digit(4), 2, 0),
            WebKey::new(Key::Digit(5), 2, 1),
            WebKey::new(Key::Digit(6), 2, 2),
            WebKey::new(Key::Equals, 2, 3),
            WebKey::new(Key::Digit(1), 3, 0),
            WebKey::new(Key::Digit(2), 3, 1),
            WebKey::new(Key::Digit(3), 3, 2),
            WebKey::new(Key::Digit(0), 3, 3),
            WebKey::new(Key::Decimal, 4, 0),
        ];
        Self { buttons }
    }

    /// All button definitions.
    #[must_use]
    pub fn buttons(&self) -> &[WebKey] {
        &self.buttons
    }

    /// Number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Finds a button by element id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&WebKey> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by the key it emits.
    #[must_use]
    pub fn find_by_key(&self, key: Key) -> Option<&WebKey> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Resolves a click on an element id to its engine key.
    #[must_use]
    pub fn resolve_click(&self, element_id: &str) -> Option<Key> {
        self.find_by_id(element_id).map(|b| b.key)
    }

    /// Maps a browser keyboard string to an engine key.
    ///
    /// Accepts the ASCII symbols and the Unicode calculator glyphs.
    #[must_use]
    pub fn resolve_key(key: &str) -> Option<Key> {
        match key {
            "." => Some(Key::Decimal),
            "+" => Some(Key::Operator(Operator::Add)),
            "-" | "−" => Some(Key::Operator(Operator::Subtract)),
            "*" | "×" => Some(Key::Operator(Operator::Multiply)),
            "/" | "÷" => Some(Key::Operator(Operator::Divide)),
            "Enter" | "=" => Some(Key::Equals),
            "Escape" | "c" | "C" => Some(Key::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Key::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    /// Builds the DOM elements for every button.
    #[must_use]
    pub fn dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|b| {
                DomElement::new("button")
                    .with_id(&b.id)
                    .with_text(&label(b.key))
                    .with_class("keypad-key")
                    .with_attr("data-row", &b.row.to_string())
                    .with_attr("data-col", &b.col.to_string())
            })
            .collect()
    }

    /// Builds the keypad container element with all buttons as children.
    #[must_use]
    pub fn container_element(&self) -> DomElement {
        let mut container = DomElement::new("div")
            .with_id("calc-keypad")
            .with_class("keypad");
        for button in self.dom_elements() {
            container = container.with_child(button);
        }
        container
    }
}
