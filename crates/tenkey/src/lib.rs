//! tenkey - a button-driven calculator with one shared input engine.
//!
//! The engine is a single-accumulator state machine: front ends feed it
//! discrete [`Key`](crate::core::Key) tokens (digits, decimal point,
//! operator, equals, clear) and render the display text it returns. Two
//! front ends ship with the crate - a terminal UI with swappable skins and a
//! web build - and both consume the same [`Session`](crate::core::Session),
//! so their behavior cannot drift apart.
//!
//! # Example
//!
//! ```rust
//! use tenkey::prelude::*;
//!
//! let mut session = Session::new();
//! for key in [
//!     Key::Digit(6),
//!     Key::Operator(Operator::Add),
//!     Key::Digit(4),
//!     Key::Equals,
//! ] {
//!     session.press(key);
//! }
//! assert_eq!(session.display(), "10");
//! assert_eq!(session.tape().last().unwrap().display(), "6 + 4 = 10");
//!
//! // Division by zero surfaces the error marker, recoverable with Clear.
//! let mut session = Session::new();
//! for key in [
//!     Key::Digit(5),
//!     Key::Operator(Operator::Divide),
//!     Key::Digit(0),
//!     Key::Equals,
//! ] {
//!     session.press(key);
//! }
//! assert_eq!(session.display(), ERROR_DISPLAY);
//! session.press(Key::Clear);
//! assert_eq!(session.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Web front end - always available; the mock DOM keeps it testable without
/// browser bindings.
pub mod wasm;

/// Convenient imports.
pub mod prelude {
    pub use crate::core::{
        Engine, EngineError, EngineResult, Key, Operator, Phase, Session, Tape, TapeEntry,
        ERROR_DISPLAY,
    };
    pub use crate::driver::{run_full_suite, KeypadDriver, TapeItem};
    pub use crate::wasm::{MockDom, WasmDriver, WebCalculator, WebKeypad};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, Skin};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_engine_smoke() {
        let mut engine = Engine::new();
        engine.press(Key::Digit(2));
        engine.press(Key::Operator(Operator::Multiply));
        engine.press(Key::Digit(3));
        assert_eq!(engine.press(Key::Equals), "6");
    }

    #[test]
    fn test_prelude_session_smoke() {
        let mut session = Session::new();
        session.press(Key::Digit(1));
        session.press(Key::Decimal);
        session.press(Key::Digit(5));
        assert_eq!(session.display(), "1.5");
    }

    #[test]
    fn test_web_front_end_smoke() {
        let mut driver = WasmDriver::new();
        run_full_suite(&mut driver);
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_front_end_smoke() {
        let mut driver = TuiDriver::new();
        run_full_suite(&mut driver);
    }
}
