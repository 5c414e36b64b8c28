//! Visual skins.
//!
//! A skin is a pure lookup table: colors per button role plus the glyph shown
//! for each operator. The engine never sees any of this; the Midnight skin's
//! Unicode operator glyphs exist only on the way to the screen, and inbound
//! glyph translation lives in the input mapping.

use ratatui::style::{Color, Modifier, Style};

use crate::core::{Key, Operator};

/// The available visual skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    /// Terminal-default colors, ASCII operator symbols.
    #[default]
    Plain,
    /// Dark skin with orange operators and Unicode glyphs, after the
    /// familiar phone calculator look.
    Midnight,
}

impl Skin {
    /// The other skin.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Plain => Self::Midnight,
            Self::Midnight => Self::Plain,
        }
    }

    /// Human-readable name for the title bar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::Midnight => "Midnight",
        }
    }

    /// The glyph this skin renders for an operator.
    #[must_use]
    pub const fn operator_glyph(self, op: Operator) -> char {
        match self {
            Self::Plain => op.symbol(),
            Self::Midnight => match op {
                Operator::Add => '+',
                Operator::Subtract => '−',
                Operator::Multiply => '×',
                Operator::Divide => '÷',
            },
        }
    }

    /// The label shown on a keypad button.
    #[must_use]
    pub fn key_label(self, key: Key) -> String {
        match key {
            Key::Digit(d) => d.to_string(),
            Key::Decimal => ".".to_string(),
            Key::Operator(op) => self.operator_glyph(op).to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "C".to_string(),
        }
    }

    /// Style for the main display text.
    #[must_use]
    pub fn display_style(self) -> Style {
        match self {
            Self::Plain => Style::default().add_modifier(Modifier::BOLD),
            Self::Midnight => Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Style for the display when the error marker is showing.
    #[must_use]
    pub fn error_style(self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    /// Style for a keypad button, by the key it carries.
    #[must_use]
    pub fn button_style(self, key: Key) -> Style {
        match self {
            Self::Plain => match key {
                Key::Digit(_) | Key::Decimal => Style::default(),
                Key::Operator(_) => Style::default().fg(Color::Yellow),
                Key::Equals => Style::default().fg(Color::Green),
                Key::Clear => Style::default().fg(Color::Red),
            },
            Self::Midnight => match key {
                Key::Digit(_) | Key::Decimal => Style::default().fg(Color::White).bg(Color::DarkGray),
                Key::Operator(_) => Style::default().fg(Color::Black).bg(Color::LightYellow),
                Key::Equals => Style::default().fg(Color::Black).bg(Color::LightGreen),
                Key::Clear => Style::default().fg(Color::White).bg(Color::LightRed),
            },
        }
    }

    /// Style for a button while its key is highlighted.
    #[must_use]
    pub fn pressed_style(self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for panes.
    #[must_use]
    pub fn border_style(self) -> Style {
        match self {
            Self::Plain => Style::default().fg(Color::Cyan),
            Self::Midnight => Style::default().fg(Color::DarkGray),
        }
    }

    /// Style for tape entries.
    #[must_use]
    pub fn tape_style(self) -> Style {
        match self {
            Self::Plain => Style::default().fg(Color::Gray),
            Self::Midnight => Style::default().fg(Color::LightBlue),
        }
    }
}
