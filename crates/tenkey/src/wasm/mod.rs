//! Web front end.
//!
//! The mock DOM model is always compiled so the whole front end is testable
//! off-browser; the real `wasm-bindgen` surface lives behind the `wasm`
//! feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::WebCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{element_id, label, WebKey, WebKeypad};
