//! Binary operators and checked arithmetic.

use crate::core::{EngineError, EngineResult};

/// The four binary operators the keypad offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the canonical ASCII symbol.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parses the canonical ASCII symbol back into an operator.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Division by a zero right-hand operand is its own checked case, and any
    /// non-finite result (overflow to infinity, NaN) is rejected so the
    /// display never has to render one.
    pub fn apply(self, lhs: f64, rhs: f64) -> EngineResult<f64> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(EngineError::DivisionByZero);
                }
                lhs / rhs
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EngineError::NonFinite)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('^'), None);
    }

    #[test]
    fn test_add() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Add.apply(-2.0, 5.0), Ok(3.0));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Operator::Multiply.apply(6.0, 7.0), Ok(42.0));
        assert_eq!(Operator::Multiply.apply(5.0, 0.0), Ok(0.0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operator::Divide.apply(20.0, 4.0), Ok(5.0));
        assert_eq!(Operator::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(10.0, 0.0),
            Err(EngineError::DivisionByZero)
        );
        // Negative zero compares equal to zero and must hit the same guard.
        assert_eq!(
            Operator::Divide.apply(10.0, -0.0),
            Err(EngineError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(EngineError::NonFinite)
        );
        assert_eq!(
            Operator::Add.apply(f64::MAX, f64::MAX),
            Err(EngineError::NonFinite)
        );
    }

    #[test]
    fn test_nan_operand_is_rejected() {
        assert_eq!(
            Operator::Add.apply(f64::NAN, 1.0),
            Err(EngineError::NonFinite)
        );
    }

    #[test]
    fn test_fractional_division() {
        let value = Operator::Divide.apply(7.0, 2.0).unwrap();
        assert_eq!(value, 3.5);
    }
}
