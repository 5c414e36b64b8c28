//! The input state machine.
//!
//! One engine instance owns the display buffer and the single pending
//! operation. Front ends translate button presses and keystrokes into [`Key`]
//! tokens and render whatever [`Engine::press`] hands back; nothing else
//! crosses the boundary.

use crate::core::{EngineError, Operator, ERROR_DISPLAY};

/// One discrete, normalized user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit 0-9.
    Digit(u8),
    /// The decimal point.
    Decimal,
    /// One of the four binary operators.
    Operator(Operator),
    /// Compute the pending operation.
    Equals,
    /// Reset to the initial state.
    Clear,
}

/// Coarse summary of where the engine is in its input cycle.
///
/// Derived from the stored fields rather than tracked separately, so it can
/// never drift out of sync with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh state, display shows "0".
    Idle,
    /// An operand is being typed.
    OperandEntered,
    /// An operator was accepted and the next digit starts the right-hand side.
    OperatorPending,
    /// A result is on screen; the next digit starts a new entry.
    ResultShown,
    /// The error marker is on screen; only exited by starting fresh.
    ErrorShown,
}

/// Single-accumulator calculator state machine.
///
/// Invariants on `display`: never empty, at most one decimal point, and
/// always either a numeral (`-? digit+ ('.' digit*)?`) or the literal
/// [`ERROR_DISPLAY`] marker.
#[derive(Debug, Clone)]
pub struct Engine {
    /// The text currently shown to the user.
    display: String,
    /// Left-hand operand, captured when an operator was last accepted.
    lhs: f64,
    /// The operation in progress, if any.
    pending: Option<Operator>,
    /// True when the next digit replaces the display instead of appending.
    awaiting_operand: bool,
    /// The failure behind the error marker, when it is showing.
    error: Option<EngineError>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            lhs: 0.0,
            pending: None,
            awaiting_operand: false,
            error: None,
        }
    }

    /// Handles one key and returns the updated display text.
    pub fn press(&mut self, key: Key) -> &str {
        // Error recovery policy: any key other than Clear starts fresh first,
        // then applies normally. The marker text is never appended to or
        // parsed.
        if self.error.is_some() && key != Key::Clear {
            self.reset();
        }

        match key {
            Key::Digit(d) => self.digit(d),
            Key::Decimal => self.decimal(),
            Key::Operator(op) => self.operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.reset(),
        }

        &self.display
    }

    /// The current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator awaiting its right-hand operand, if any.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// True when the next digit starts a fresh operand.
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// The failure behind the error marker, when it is showing.
    #[must_use]
    pub fn last_error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }

    /// Derives the current phase from the stored fields.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::ErrorShown
        } else if self.pending.is_some() {
            if self.awaiting_operand {
                Phase::OperatorPending
            } else {
                Phase::OperandEntered
            }
        } else if self.awaiting_operand {
            Phase::ResultShown
        } else if self.display == "0" {
            Phase::Idle
        } else {
            Phase::OperandEntered
        }
    }

    /// Resets all state to the initial values.
    pub fn reset(&mut self) {
        self.display.clear();
        self.display.push('0');
        self.lhs = 0.0;
        self.pending = None;
        self.awaiting_operand = false;
        self.error = None;
    }

    fn digit(&mut self, d: u8) {
        let ch = char::from_digit(u32::from(d.min(9)), 10).unwrap_or('0');
        if self.awaiting_operand {
            self.display.clear();
            self.display.push(ch);
            self.awaiting_operand = false;
        } else if self.display == "0" {
            // Leading-zero suppression.
            self.display.clear();
            self.display.push(ch);
        } else {
            self.display.push(ch);
        }
    }

    fn decimal(&mut self) {
        if self.awaiting_operand {
            self.display.clear();
            self.display.push_str("0.");
            self.awaiting_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        // A second decimal on an already-fractional display is swallowed.
    }

    fn operator(&mut self, op: Operator) {
        if self.awaiting_operand {
            // Operator pressed twice in a row, or right after Equals: the key
            // is swallowed and the earlier state stands.
            return;
        }
        if self.pending.is_some() {
            // Collapse the operation in progress so chains evaluate
            // left-to-right: 2 + 3 * ... computes 5 before * is recorded.
            self.equals();
            if self.error.is_some() {
                return;
            }
        }
        match self.display.parse::<f64>() {
            Ok(value) => {
                self.lhs = value;
                self.pending = Some(op);
                self.awaiting_operand = true;
            }
            Err(_) => self.fail(EngineError::InvalidNumeral(self.display.clone())),
        }
    }

    fn equals(&mut self) {
        let Some(op) = self.pending else {
            return;
        };
        if self.awaiting_operand {
            // No right-hand operand was entered.
            return;
        }
        let rhs = match self.display.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.fail(EngineError::InvalidNumeral(self.display.clone()));
                return;
            }
        };
        match op.apply(self.lhs, rhs) {
            Ok(result) => {
                self.display = format_value(result);
                self.pending = None;
                self.awaiting_operand = true;
            }
            Err(err) => self.fail(err),
        }
    }

    /// Surfaces the error marker. The stored operand is left untouched and
    /// the pending operator is dropped so nothing keeps computing against a
    /// non-numeric display.
    fn fail(&mut self, err: EngineError) {
        self.display.clear();
        self.display.push_str(ERROR_DISPLAY);
        self.pending = None;
        self.awaiting_operand = true;
        self.error = Some(err);
    }
}

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Formats a computed value for the display.
///
/// Whole numbers render without a decimal point; everything else uses the
/// default shortest round-trip text, so the display always parses back to the
/// exact computed value.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
