//! Web driver for the unified suite.
//!
//! Pairs a [`WebCalculator`] with a [`MockDom`] and keeps the page in sync
//! after every key, so tests can assert against the DOM the way a browser
//! test would.

use super::calculator::WebCalculator;
use super::dom::{DomElement, DomEvent, MockDom};
use super::keypad::element_id;
use crate::core::{Key, Phase};
use crate::driver::{KeypadDriver, TapeItem};

/// Drives the web front end against the mock document.
#[derive(Debug)]
pub struct WasmDriver {
    calculator: WebCalculator,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with a fresh calculator page.
    #[must_use]
    pub fn new() -> Self {
        let calculator = WebCalculator::new();
        let mut dom = MockDom::calculator_page();
        for elem in calculator.keypad().dom_elements() {
            dom.register(elem);
        }
        Self { calculator, dom }
    }

    /// The calculator behind the page.
    #[must_use]
    pub fn calculator(&self) -> &WebCalculator {
        &self.calculator
    }

    /// The mock document.
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Clicks a keypad button by element id.
    pub fn click(&mut self, element_id: &str) {
        self.dom.dispatch(DomEvent::click(element_id));
        self.calculator.handle_button(element_id);
        self.sync();
    }

    /// Sends a browser keyboard key.
    pub fn send_key(&mut self, key: &str) {
        self.dom.dispatch(DomEvent::key_press(key));
        self.calculator.handle_key(key);
        self.sync();
    }

    /// The display element's text.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        self.dom.text("calc-display")
    }

    /// The status element's text.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.dom.text("calc-status")
    }

    /// The tape list items, newest first.
    #[must_use]
    pub fn tape_items(&self) -> Vec<String> {
        self.dom
            .get("calc-tape")
            .map(|tape| {
                tape.children
                    .iter()
                    .map(|li| li.text_content.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn sync(&mut self) {
        self.dom.set_text("calc-display", self.calculator.display());
        self.dom.set_text("calc-status", &self.calculator.status());

        self.dom.clear_children("calc-tape");
        for (i, line) in self.calculator.tape_lines().iter().enumerate() {
            self.dom.append_child(
                "calc-tape",
                DomElement::new("li")
                    .with_id(&format!("tape-{i}"))
                    .with_text(line),
            );
        }
    }
}

impl KeypadDriver for WasmDriver {
    fn press(&mut self, key: Key) {
        self.click(&element_id(key));
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn phase(&self) -> Phase {
        self.calculator.phase()
    }

    fn tape(&self) -> Vec<TapeItem> {
        self.calculator
            .tape()
            .iter_rev()
            .map(|entry| TapeItem {
                expression: entry.expression.clone(),
                result: entry.result.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ERROR_DISPLAY;
    use crate::driver::run_full_suite;

    #[test]
    fn test_new_driver_registers_buttons() {
        let driver = WasmDriver::new();
        assert!(driver.dom().get("key-7").is_some());
        assert!(driver.dom().get("key-equals").is_some());
        assert_eq!(driver.display_text(), Some("0"));
    }

    #[test]
    fn test_clicks_sync_display() {
        let mut driver = WasmDriver::new();
        for id in ["key-6", "key-plus", "key-4", "key-equals"] {
            driver.click(id);
        }
        assert_eq!(driver.display_text(), Some("10"));
        assert_eq!(driver.tape_items(), vec!["6 + 4 = 10"]);
    }

    #[test]
    fn test_keyboard_sync() {
        let mut driver = WasmDriver::new();
        driver.send_key("9");
        driver.send_key("-");
        driver.send_key("4");
        driver.send_key("Enter");
        assert_eq!(driver.display_text(), Some("5"));
    }

    #[test]
    fn test_error_reaches_status() {
        let mut driver = WasmDriver::new();
        for id in ["key-5", "key-divide", "key-0", "key-equals"] {
            driver.click(id);
        }
        assert_eq!(driver.display_text(), Some(ERROR_DISPLAY));
        assert!(driver.status_text().unwrap().contains("division by zero"));
    }

    #[test]
    fn test_event_history_records_interactions() {
        let mut driver = WasmDriver::new();
        driver.click("key-1");
        driver.send_key("Enter");
        let events = driver.dom().event_history();
        assert!(events.iter().any(|e| matches!(e, DomEvent::Click { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, DomEvent::KeyPress { key } if key == "Enter")));
    }

    #[test]
    fn test_tape_newest_first_in_dom() {
        let mut driver = WasmDriver::new();
        for id in ["key-1", "key-plus", "key-1", "key-equals"] {
            driver.click(id);
        }
        for id in ["key-2", "key-plus", "key-2", "key-equals"] {
            driver.click(id);
        }
        let items = driver.tape_items();
        assert_eq!(items[0], "2 + 2 = 4");
        assert_eq!(items[1], "1 + 1 = 2");
    }

    #[test]
    fn test_full_suite_on_web_front_end() {
        let mut driver = WasmDriver::new();
        run_full_suite(&mut driver);
    }
}
