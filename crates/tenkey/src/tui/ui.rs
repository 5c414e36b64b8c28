//! Screen composition.
//!
//! All colors and glyphs come from the active [`Skin`]; this module only
//! decides where the panes go.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
#[cfg(test)]
use super::theme::Skin;
use crate::core::ERROR_DISPLAY;

/// Footer hint line.
pub const HELP_LINE: &str = "Tab skin   Ctrl+L clear tape   Ctrl+Q quit";

/// How many tape entries the side pane shows.
const TAPE_ROWS: usize = 12;

/// Renders the whole calculator to a frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Splits the frame into (display, keypad, status, tape) panes.
///
/// Public so the event loop can hit-test mouse clicks against the same
/// keypad rectangle the renderer used.
#[must_use]
pub fn pane_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Min(26), Constraint::Length(32)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
        ])
        .split(columns[0]);

    (left[0], left[1], left[2], columns[1])
}

/// The full-screen calculator widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates the widget.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let skin = self.app.skin();
        let text = self.app.display();
        let style = if text == ERROR_DISPLAY {
            skin.error_style()
        } else {
            skin.display_style()
        };

        Paragraph::new(Span::styled(text.to_string(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(skin.border_style()),
            )
            .render(area, buf);
    }

    fn render_tape(&self, area: Rect, buf: &mut Buffer) {
        let skin = self.app.skin();
        let items: Vec<ListItem> = self
            .app
            .tape()
            .iter_rev()
            .take(TAPE_ROWS)
            .map(|entry| ListItem::new(Span::styled(entry.display(), skin.tape_style())))
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Tape (newest first) ")
                    .borders(Borders::ALL)
                    .border_style(skin.border_style()),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let skin = self.app.skin();
        Paragraph::new(Line::from(vec![
            Span::raw(self.app.status()),
            Span::raw("   "),
            Span::styled(HELP_LINE, skin.tape_style()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(skin.border_style()),
        )
        .render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let skin = self.app.skin();
        let title = format!(" tenkey ({} skin) ", skin.name());
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(skin.border_style())
            .render(area, buf);

        let (display, keypad, status, tape) = pane_layout(area);
        self.render_display(display, buf);
        KeypadWidget::new(self.app.keypad(), skin).render(keypad, buf);
        self.render_status(status, buf);
        self.render_tape(tape, buf);
    }
}
