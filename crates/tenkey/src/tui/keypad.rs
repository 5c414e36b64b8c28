//! On-screen keypad.
//!
//! The button grid mirrors the classic desktop layout, with the decimal key
//! on its own bottom row:
//!
//! ```text
//! [ C ] [ / ] [ * ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [ + ]
//! [ 4 ] [ 5 ] [ 6 ] [ = ]
//! [ 1 ] [ 2 ] [ 3 ] [ 0 ]
//! [ . ]
//! ```
//!
//! Buttons carry explicit grid positions, so rows may be ragged. Mouse clicks
//! are resolved through [`Keypad::hit_test`]; keyboard presses highlight the
//! matching button for visual feedback.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Widget},
};

use super::theme::Skin;
use crate::core::{Key, Operator};

/// One keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyButton {
    /// The key this button emits.
    pub key: Key,
    /// Grid row (0-indexed).
    pub row: usize,
    /// Grid column (0-indexed).
    pub col: usize,
    /// Whether the button is currently highlighted.
    pub pressed: bool,
}

impl KeyButton {
    /// Creates a button at a grid position.
    #[must_use]
    pub const fn new(key: Key, row: usize, col: usize) -> Self {
        Self {
            key,
            row,
            col,
            pressed: false,
        }
    }
}

/// The button grid.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeyButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad layout.
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeyButton::new(Key::Clear, 0, 0),
            KeyButton::new(Key::Operator(Operator::Divide), 0, 1),
            KeyButton::new(Key::Operator(Operator::Multiply), 0, 2),
            KeyButton::new(Key::Operator(Operator::Subtract), 0, 3),
            KeyButton::new(Key::Digit(7), 1, 0),
            KeyButton::new(Key::Digit(8), 1, 1),
            KeyButton::new(Key::Digit(9), 1, 2),
            KeyButton::new(Key::Operator(Operator::Add), 1, 3),
            KeyButton::new(Key::Digit(4), 2, 0),
            KeyButton::new(Key::Digit(5), 2, 1),
            KeyButton::new(Key::Digit(6), 2, 2),
            KeyButton::new(Key::Equals, 2, 3),
            KeyButton::new(Key::Digit(1), 3, 0),
            KeyButton::new(Key::Digit(2), 3, 1),
            KeyButton::new(Key::Digit(3), 3, 2),
            KeyButton::new(Key::Digit(0), 3, 3),
            KeyButton::new(Key::Decimal, 4, 0),
        ];
        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons on the keypad.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Iterates over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeyButton> {
        self.buttons.iter()
    }

    /// The button at a grid position, if the position is occupied.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeyButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// The button emitting a given key.
    #[must_use]
    pub fn button_for(&self, key: Key) -> Option<&KeyButton> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Highlights the button for a key, releasing every other one.
    pub fn highlight(&mut self, key: Key) {
        for button in &mut self.buttons {
            button.pressed = button.key == key;
        }
    }

    /// Releases every button.
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// Resolves a click inside `area` (the keypad pane, border included) to
    /// the key of the button under it.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Key> {
        if x <= area.x || y <= area.y {
            return None;
        }
        let inner_x = x - area.x - 1;
        let inner_y = y - area.y - 1;
        let inner_w = area.width.saturating_sub(2);
        let inner_h = area.height.saturating_sub(2);
        if inner_x >= inner_w || inner_y >= inner_h {
            return None;
        }

        let btn_w = inner_w / self.cols as u16;
        let btn_h = inner_h / self.rows as u16;
        if btn_w == 0 || btn_h == 0 {
            return None;
        }

        let col = (inner_x / btn_w) as usize;
        let row = (inner_y / btn_h) as usize;
        self.button_at(row, col).map(|b| b.key)
    }
}

/// Renders a keypad with a skin's colors and glyphs.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    skin: Skin,
}

impl<'a> KeypadWidget<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(keypad: &'a Keypad, skin: Skin) -> Self {
        Self { keypad, skin }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(self.skin.border_style())
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_w = inner.width / cols as u16;
        let btn_h = inner.height / rows as u16;

        for button in self.keypad.buttons() {
            let x = inner.x + button.col as u16 * btn_w;
            let y = inner.y + button.row as u16 * btn_h;

            let style = if button.pressed {
                self.skin.pressed_style()
            } else {
                self.skin.button_style(button.key)
            };

            if btn_w >= 3 {
                let label = format!("[{}]", self.skin.key_label(button.key));
                let label_x = x + btn_w.saturating_sub(label.chars().count() as u16) / 2;
                let label_y = y + btn_h / 2;
                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_w);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_has_seventeen_buttons() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 17);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_every_digit_present() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(
                keypad.button_for(Key::Digit(d)).is_some(),
                "missing digit {d}"
            );
        }
    }

    #[test]
    fn test_every_operator_present() {
        let keypad = Keypad::new();
        for op in Operator::ALL {
            assert!(keypad.button_for(Key::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_special_keys_present() {
        let keypad = Keypad::new();
        assert!(keypad.button_for(Key::Equals).is_some());
        assert!(keypad.button_for(Key::Clear).is_some());
        assert!(keypad.button_for(Key::Decimal).is_some());
    }

    #[test]
    fn test_layout_first_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().key, Key::Clear);
        assert_eq!(
            keypad.button_at(0, 1).unwrap().key,
            Key::Operator(Operator::Divide)
        );
        assert_eq!(
            keypad.button_at(0, 3).unwrap().key,
            Key::Operator(Operator::Subtract)
        );
    }

    #[test]
    fn test_layout_ragged_bottom_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(4, 0).unwrap().key, Key::Decimal);
        assert!(keypad.button_at(4, 1).is_none());
    }

    #[test]
    fn test_positions_are_unique() {
        let keypad = Keypad::new();
        let mut seen = std::collections::HashSet::new();
        for button in keypad.buttons() {
            assert!(seen.insert((button.row, button.col)));
        }
    }

    #[test]
    fn test_highlight_is_exclusive() {
        let mut keypad = Keypad::new();
        keypad.highlight(Key::Digit(5));
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].key, Key::Digit(5));

        keypad.highlight(Key::Equals);
        assert!(!keypad.button_for(Key::Digit(5)).unwrap().pressed);
        assert!(keypad.button_for(Key::Equals).unwrap().pressed);
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.highlight(Key::Clear);
        keypad.release_all();
        assert!(keypad.buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_hit_test_inside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        // First cell, just inside the border.
        assert_eq!(keypad.hit_test(area, 2, 1), Some(Key::Clear));
    }

    #[test]
    fn test_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(5, 5, 22, 12);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 5, 5), None);
        assert_eq!(keypad.hit_test(area, 100, 100), None);
    }

    #[test]
    fn test_hit_test_empty_cell() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        let btn_w = 20 / 4;
        let btn_h = 10 / 5;
        // Row 4, column 2 is unoccupied.
        let x = 1 + 2 * btn_w + 1;
        let y = 1 + 4 * btn_h;
        assert_eq!(keypad.hit_test(area, x, y), None);
    }

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad, Skin::Plain);
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("[7]"));
        assert!(content.contains("[C]"));
        assert!(content.contains("[=]"));
    }

    #[test]
    fn test_widget_renders_midnight_glyphs() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad, Skin::Midnight);
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains('÷'));
        assert!(content.contains('×'));
    }

    #[test]
    fn test_widget_survives_tiny_area() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad, Skin::Plain);
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }
}
