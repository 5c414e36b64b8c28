//! Unified front-end driver.
//!
//! Write the verification once, run it against every skin. The trait is the
//! whole contract a front end has with the outside world: keys go in, display
//! text and tape items come out. Each `verify_*` function below checks one
//! observable property of the input state machine through that contract, so a
//! front end passing [`run_full_suite`] is known to render the shared engine
//! faithfully.

use crate::core::{Key, Operator, Phase, ERROR_DISPLAY};

/// Abstract keypad interface implemented by every front end.
pub trait KeypadDriver {
    /// Feeds one key to the front end.
    fn press(&mut self, key: Key);

    /// The display text the user currently sees.
    fn display(&self) -> String;

    /// The engine phase behind the display.
    fn phase(&self) -> Phase;

    /// Presses Clear.
    fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Tape items, newest first.
    fn tape(&self) -> Vec<TapeItem>;
}

/// A tape entry as seen through the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapeItem {
    /// The recorded expression.
    pub expression: String,
    /// The recorded result text.
    pub result: String,
}

/// Feeds a key sequence to a driver.
pub fn press_sequence<D: KeypadDriver>(driver: &mut D, keys: &[Key]) {
    for &key in keys {
        driver.press(key);
    }
}

const ADD: Key = Key::Operator(Operator::Add);
const MUL: Key = Key::Operator(Operator::Multiply);
const DIV: Key = Key::Operator(Operator::Divide);

/// Leading zeros collapse: 0 0 5 shows "5".
pub fn verify_leading_zero_collapse<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    press_sequence(driver, &[Key::Digit(0), Key::Digit(0), Key::Digit(5)]);
    assert_eq!(driver.display(), "5");
    driver.clear();
}

/// A second decimal point in a row changes nothing.
pub fn verify_decimal_idempotence<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    driver.press(Key::Decimal);
    assert_eq!(driver.display(), "0.");
    driver.press(Key::Decimal);
    assert_eq!(driver.display(), "0.");
    driver.clear();
}

/// Clear returns to "0" from any state.
pub fn verify_clear_round_trip<D: KeypadDriver>(driver: &mut D) {
    press_sequence(driver, &[Key::Digit(9), ADD, Key::Digit(1), Key::Decimal]);
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.phase(), Phase::Idle);
}

/// Whole-number results render without a decimal point: 6 + 4 = 10.
pub fn verify_integral_formatting<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    press_sequence(driver, &[Key::Digit(6), ADD, Key::Digit(4), Key::Equals]);
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.phase(), Phase::ResultShown);
    driver.clear();
}

/// Division by zero surfaces the error marker, recoverable only by starting
/// fresh.
pub fn verify_division_by_zero<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    press_sequence(driver, &[Key::Digit(5), DIV, Key::Digit(0), Key::Equals]);
    assert_eq!(driver.display(), ERROR_DISPLAY);
    assert_eq!(driver.phase(), Phase::ErrorShown);
    driver.press(Key::Digit(8));
    assert_eq!(driver.display(), "8");
    driver.clear();
}

/// A chaining operator collapses the pending computation first:
/// 2 + 3 * 4 = 20, not 14.
pub fn verify_chain_collapse<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    press_sequence(
        driver,
        &[Key::Digit(2), ADD, Key::Digit(3), MUL, Key::Digit(4), Key::Equals],
    );
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Non-terminating decimals keep their format class: a decimal point, and a
/// text that parses back to the computed quotient.
pub fn verify_fractional_format<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    press_sequence(driver, &[Key::Digit(1), DIV, Key::Digit(3), Key::Equals]);
    let display = driver.display();
    assert!(display.contains('.'), "expected a fraction, got {display:?}");
    let parsed: f64 = display.parse().expect("display must stay numeric");
    assert!((parsed - 1.0 / 3.0).abs() < 1e-12);
    driver.clear();
}

/// Completed calculations land on the tape, newest first.
pub fn verify_tape_recording<D: KeypadDriver>(driver: &mut D) {
    driver.clear();
    press_sequence(driver, &[Key::Digit(1), ADD, Key::Digit(1), Key::Equals]);
    press_sequence(driver, &[Key::Digit(2), ADD, Key::Digit(2), Key::Equals]);
    let tape = driver.tape();
    assert!(tape.len() >= 2);
    assert_eq!(tape[0].expression, "2 + 2");
    assert_eq!(tape[0].result, "4");
}

/// Runs every verification against one driver.
pub fn run_full_suite<D: KeypadDriver>(driver: &mut D) {
    verify_leading_zero_collapse(driver);
    verify_decimal_idempotence(driver);
    verify_clear_round_trip(driver);
    verify_integral_formatting(driver);
    verify_division_by_zero(driver);
    verify_chain_collapse(driver);
    verify_fractional_format(driver);
    verify_tape_recording(driver);
}

/// TUI driver implementation.
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{KeypadDriver, TapeItem};
    use crate::core::{Key, Phase};
    use crate::tui::CalculatorApp;

    /// Drives the TUI front end through its app state.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app.
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// The underlying app.
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Mutable access to the underlying app.
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl KeypadDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.press(key);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn phase(&self) -> Phase {
            self.app.phase()
        }

        fn tape(&self) -> Vec<TapeItem> {
            self.app
                .tape()
                .iter_rev()
                .map(|entry| TapeItem {
                    expression: entry.expression.clone(),
                    result: entry.result.clone(),
                })
                .collect()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
