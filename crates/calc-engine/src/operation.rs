//! Binary Operations
//!
//! The four arithmetic operators as a closed enum.

use crate::error::EngineError;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A pending binary operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `×` (also entered as `*`)
    Multiply,
    /// `÷` (also entered as `/`)
    Divide,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Subtract,
        Operation::Add,
    ];

    /// Parse an operator symbol, accepting the ASCII aliases `*` and `/`.
    pub fn from_symbol(symbol: char) -> Result<Self, EngineError> {
        match symbol {
            '+' => Ok(Operation::Add),
            '-' | '−' => Ok(Operation::Subtract),
            '×' | '*' => Ok(Operation::Multiply),
            '÷' | '/' => Ok(Operation::Divide),
            other => Err(EngineError::UnknownOperation(other)),
        }
    }

    /// Display symbol shown on the keypad and in the history line.
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide => '÷',
        }
    }

    /// Apply the operation. Returns `None` for division by zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operation::Add => Some(lhs + rhs),
            Operation::Subtract => Some(lhs - rhs),
            Operation::Multiply => Some(lhs * rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operation {
    type Error = EngineError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Operation::from_symbol(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_and_aliases() {
        assert_eq!(Operation::from_symbol('*').unwrap(), Operation::Multiply);
        assert_eq!(Operation::from_symbol('×').unwrap(), Operation::Multiply);
        assert_eq!(Operation::from_symbol('/').unwrap(), Operation::Divide);
        assert_eq!(Operation::from_symbol('÷').unwrap(), Operation::Divide);

        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()).unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            Operation::from_symbol('^'),
            Err(EngineError::UnknownOperation('^'))
        );
    }

    #[test]
    fn test_divide_by_zero_is_none() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), None);
        assert_eq!(Operation::Divide.apply(15.0, 3.0), Some(5.0));
        assert_eq!(Operation::Multiply.apply(6.0, 7.0), Some(42.0));
    }
}
