//! Terminal front end.
//!
//! One of the skins over the shared engine; the other front end lives in
//! [`crate::wasm`].

mod app;
mod input;
mod keypad;
mod theme;
mod ui;

pub use app::CalculatorApp;
pub use input::{char_to_key, InputHandler, KeyAction};
pub use keypad::{KeyButton, Keypad, KeypadWidget};
pub use theme::Skin;
pub use ui::{pane_layout, render, HELP_LINE};
