//! Core calculator state machine.
//!
//! Everything in here is presentation-agnostic: front ends feed [`Key`]
//! tokens in and render the display text that comes back out.

pub mod engine;
pub mod history;
mod operations;
pub mod session;

pub use engine::{Engine, Key, Phase};
pub use history::{Tape, TapeEntry};
pub use operations::Operator;
pub use session::Session;

use thiserror::Error;

/// The literal text shown when a computation fails.
pub const ERROR_DISPLAY: &str = "Error";

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Why a computation could not produce a displayable number.
///
/// Every variant surfaces to the user as the same [`ERROR_DISPLAY`] marker;
/// the typed error exists so front ends can show a status line and tests can
/// distinguish the cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The right-hand operand of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The arithmetic result was NaN or infinite.
    #[error("result is not a finite number")]
    NonFinite,
    /// The display buffer did not hold a parseable numeral.
    ///
    /// The token guards keep this unreachable in normal operation; it is the
    /// defensive counterpart of the happy-path parse.
    #[error("display does not hold a numeral: {0:?}")]
    InvalidNumeral(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_division_by_zero() {
        assert_eq!(EngineError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_display_non_finite() {
        assert_eq!(
            EngineError::NonFinite.to_string(),
            "result is not a finite number"
        );
    }

    #[test]
    fn test_error_display_invalid_numeral() {
        let err = EngineError::InvalidNumeral("abc".into());
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(EngineError::DivisionByZero);
        assert!(err.to_string().contains("zero"));
    }
}
