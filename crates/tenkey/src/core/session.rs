//! Shared front-end state.
//!
//! Every skin owns exactly one [`Session`]: the engine plus the tape and the
//! bookkeeping needed to turn a key stream into `"6 + 4 = 10"` tape entries.
//! Keeping this here, rather than in each front end, is what guarantees the
//! skins cannot drift apart.

use tracing::{debug, warn};

use crate::core::{Engine, EngineError, Key, Operator, Phase, Tape};

/// An engine, its tape, and the expression currently being assembled.
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    tape: Tape,
    /// Display text and operator captured when the left-hand side was closed.
    lhs_entry: Option<(String, Operator)>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with the default tape capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            tape: Tape::new(),
            lhs_entry: None,
        }
    }

    /// Creates a session whose tape holds at most `limit` entries.
    #[must_use]
    pub fn with_tape_limit(limit: usize) -> Self {
        Self {
            engine: Engine::new(),
            tape: Tape::with_capacity(limit),
            lhs_entry: None,
        }
    }

    /// Handles one key and returns the updated display text.
    ///
    /// Whenever the press completes a computation (Equals, or an operator
    /// press that collapses a pending one), the finished expression is
    /// recorded on the tape. Failed computations are never recorded.
    pub fn press(&mut self, key: Key) -> &str {
        let rhs_text = self.engine.display().to_string();
        let entering_rhs =
            self.engine.pending_operator().is_some() && !self.engine.awaiting_operand();

        self.engine.press(key);
        debug!(?key, display = self.engine.display(), "key handled");

        match key {
            Key::Operator(_) => {
                if entering_rhs {
                    self.record_completed(&rhs_text);
                }
                if let Some(op) = self.engine.pending_operator() {
                    self.lhs_entry = Some((self.engine.display().to_string(), op));
                }
            }
            Key::Equals => {
                if entering_rhs {
                    self.record_completed(&rhs_text);
                }
            }
            Key::Clear => {
                self.lhs_entry = None;
            }
            Key::Digit(_) | Key::Decimal => {}
        }

        self.engine.display()
    }

    fn record_completed(&mut self, rhs_text: &str) {
        let Some((lhs, op)) = self.lhs_entry.take() else {
            return;
        };
        if let Some(err) = self.engine.last_error() {
            warn!(%err, "computation failed, not recorded");
            return;
        }
        let expression = format!("{lhs} {} {rhs_text}", op.symbol());
        self.tape.record(&expression, self.engine.display());
    }

    /// The current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// The engine's current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    /// The failure behind the error marker, when it is showing.
    #[must_use]
    pub fn last_error(&self) -> Option<&EngineError> {
        self.engine.last_error()
    }

    /// The calculation tape.
    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Resets the engine; the tape survives.
    pub fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Resets the engine and empties the tape.
    pub fn clear_all(&mut self) {
        self.clear();
        self.tape.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TapeEntry, ERROR_DISPLAY};

    const ADD: Key = Key::Operator(Operator::Add);
    const MUL: Key = Key::Operator(Operator::Multiply);
    const DIV: Key = Key::Operator(Operator::Divide);

    fn press_all(session: &mut Session, keys: &[Key]) {
        for &key in keys {
            session.press(key);
        }
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.display(), "0");
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.tape().is_empty());
    }

    #[test]
    fn test_equals_records_tape_entry() {
        let mut session = Session::new();
        press_all(&mut session, &[Key::Digit(6), ADD, Key::Digit(4), Key::Equals]);
        assert_eq!(session.display(), "10");
        assert_eq!(session.tape().len(), 1);
        assert_eq!(session.tape().last().unwrap().display(), "6 + 4 = 10");
    }

    #[test]
    fn test_chain_records_intermediate_result() {
        let mut session = Session::new();
        press_all(
            &mut session,
            &[Key::Digit(2), ADD, Key::Digit(3), MUL, Key::Digit(4), Key::Equals],
        );
        assert_eq!(session.display(), "20");
        let entries: Vec<_> = session.tape().iter().map(TapeEntry::display).collect();
        assert_eq!(entries, vec!["2 + 3 = 5", "5 * 4 = 20"]);
    }

    #[test]
    fn test_error_is_not_recorded() {
        let mut session = Session::new();
        press_all(&mut session, &[Key::Digit(5), DIV, Key::Digit(0), Key::Equals]);
        assert_eq!(session.display(), ERROR_DISPLAY);
        assert!(session.tape().is_empty());
    }

    #[test]
    fn test_equals_without_rhs_records_nothing() {
        let mut session = Session::new();
        press_all(&mut session, &[Key::Digit(7), ADD, Key::Equals]);
        assert!(session.tape().is_empty());
        // The expression is still open; finishing it records once.
        press_all(&mut session, &[Key::Digit(3), Key::Equals]);
        assert_eq!(session.tape().len(), 1);
        assert_eq!(session.tape().last().unwrap().display(), "7 + 3 = 10");
    }

    #[test]
    fn test_clear_keeps_tape() {
        let mut session = Session::new();
        press_all(&mut session, &[Key::Digit(1), ADD, Key::Digit(1), Key::Equals]);
        session.clear();
        assert_eq!(session.display(), "0");
        assert_eq!(session.tape().len(), 1);
    }

    #[test]
    fn test_clear_all_empties_tape() {
        let mut session = Session::new();
        press_all(&mut session, &[Key::Digit(1), ADD, Key::Digit(1), Key::Equals]);
        session.clear_all();
        assert!(session.tape().is_empty());
    }

    #[test]
    fn test_clear_abandons_open_expression() {
        let mut session = Session::new();
        press_all(&mut session, &[Key::Digit(9), ADD, Key::Clear]);
        press_all(&mut session, &[Key::Digit(2), ADD, Key::Digit(2), Key::Equals]);
        assert_eq!(session.tape().last().unwrap().display(), "2 + 2 = 4");
        assert_eq!(session.tape().len(), 1);
    }

    #[test]
    fn test_decimal_operands_in_tape() {
        let mut session = Session::new();
        press_all(
            &mut session,
            &[
                Key::Digit(1),
                Key::Decimal,
                Key::Digit(5),
                ADD,
                Key::Digit(2),
                Key::Equals,
            ],
        );
        assert_eq!(session.tape().last().unwrap().display(), "1.5 + 2 = 3.5");
    }

    #[test]
    fn test_tape_limit_respected() {
        let mut session = Session::with_tape_limit(1);
        press_all(&mut session, &[Key::Digit(1), ADD, Key::Digit(1), Key::Equals]);
        press_all(&mut session, &[Key::Digit(2), ADD, Key::Digit(2), Key::Equals]);
        assert_eq!(session.tape().len(), 1);
        assert_eq!(session.tape().last().unwrap().display(), "2 + 2 = 4");
    }
}
