//! Mock DOM.
//!
//! An observable stand-in for the browser document, so the web front end is
//! fully testable without `web-sys` or a browser. The real bindings in
//! `browser.rs` drive the same calculator type against the live DOM.

use std::collections::HashMap;

/// A DOM element for testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id.
    pub id: String,
    /// Tag name.
    pub tag: String,
    /// Text content.
    pub text_content: String,
    /// Attributes.
    pub attributes: HashMap<String, String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Child elements.
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child.
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// True when the element carries the class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// An attribute value, if set.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Events the calculator page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// A button was clicked.
    Click {
        /// Id of the clicked element.
        element_id: String,
    },
    /// A keyboard key was pressed.
    KeyPress {
        /// The key string, as the browser reports it.
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event.
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event.
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// In-memory document with id lookup and an event log.
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page skeleton: display, tape list, status line.
    #[must_use]
    pub fn calculator_page() -> Self {
        let mut dom = Self::new();
        dom.register(
            DomElement::new("div")
                .with_id("calc-display")
                .with_class("display")
                .with_text("0"),
        );
        dom.register(
            DomElement::new("ul")
                .with_id("calc-tape")
                .with_class("tape"),
        );
        dom.register(
            DomElement::new("div")
                .with_id("calc-status")
                .with_class("status"),
        );
        dom
    }

    /// Registers an element for id lookup.
    pub fn register(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Looks up an element by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Records an event in the log.
    pub fn dispatch(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// The event log, oldest first.
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Replaces an element's text by id.
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Reads an element's text by id.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Appends a child to a parent and registers it.
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        let child_id = child.id.clone();
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        if !child_id.is_empty() {
            self.elements.insert(child_id, child);
        }
    }

    /// Removes every child of an element, deregistering them.
    pub fn clear_children(&mut self, id: &str) {
        let child_ids: Vec<String> = self
            .elements
            .get(id)
            .map(|elem| {
                elem.children
                    .iter()
                    .filter(|c| !c.id.is_empty())
                    .map(|c| c.id.clone())
                    .collect()
            })
            .unwrap_or_default();
        for child_id in child_ids {
            self.elements.remove(&child_id);
        }
        if let Some(elem) = self.elements.get_mut(id) {
            elem.children.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let elem = DomElement::new("button")
            .with_id("key-5")
            .with_text("5")
            .with_class("keypad-key")
            .with_attr("data-key", "digit");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "key-5");
        assert_eq!(elem.text_content, "5");
        assert!(elem.has_class("keypad-key"));
        assert_eq!(elem.get_attr("data-key"), Some("digit"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_element_children() {
        let child = DomElement::new("li").with_text("entry");
        let parent = DomElement::new("ul").with_child(child);
        assert_eq!(parent.children.len(), 1);
    }

    #[test]
    fn test_calculator_page_skeleton() {
        let dom = MockDom::calculator_page();
        assert_eq!(dom.text("calc-display"), Some("0"));
        assert!(dom.get("calc-tape").is_some());
        assert!(dom.get("calc-status").is_some());
    }

    #[test]
    fn test_set_and_read_text() {
        let mut dom = MockDom::calculator_page();
        dom.set_text("calc-display", "42");
        assert_eq!(dom.text("calc-display"), Some("42"));
    }

    #[test]
    fn test_set_text_unknown_id_is_noop() {
        let mut dom = MockDom::new();
        dom.set_text("nope", "x");
        assert_eq!(dom.text("nope"), None);
    }

    #[test]
    fn test_event_log() {
        let mut dom = MockDom::new();
        dom.dispatch(DomEvent::click("key-5"));
        dom.dispatch(DomEvent::key_press("Enter"));
        assert_eq!(dom.event_history().len(), 2);
        assert_eq!(dom.event_history()[0], DomEvent::click("key-5"));
    }

    #[test]
    fn test_append_and_clear_children() {
        let mut dom = MockDom::calculator_page();
        dom.append_child("calc-tape", DomElement::new("li").with_id("tape-0"));
        dom.append_child("calc-tape", DomElement::new("li").with_id("tape-1"));
        assert_eq!(dom.get("calc-tape").unwrap().children.len(), 2);
        assert!(dom.get("tape-0").is_some());

        dom.clear_children("calc-tape");
        assert!(dom.get("calc-tape").unwrap().children.is_empty());
        assert!(dom.get("tape-0").is_none());
    }
}
