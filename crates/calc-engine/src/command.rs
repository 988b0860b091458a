//! Engine Commands
//!
//! Type-safe representation of every action the engine accepts.

use crate::operand::Digit;
use crate::operation::Operation;
use core::fmt;

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Enter a digit
    Digit(Digit),

    /// Enter the decimal point
    DecimalPoint,

    /// Choose a binary operation
    Operation(Operation),

    /// Compute the pending operation (`=`)
    Equals,

    /// Reset everything (`AC`)
    Clear,

    /// Drop the last character (`DEL`)
    Delete,

    /// Divide the current operand by 100
    Percent,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Digit(d) => write!(f, "{}", d),
            Command::DecimalPoint => f.write_str("."),
            Command::Operation(op) => write!(f, "{}", op),
            Command::Equals => f.write_str("="),
            Command::Clear => f.write_str("AC"),
            Command::Delete => f.write_str("DEL"),
            Command::Percent => f.write_str("%"),
        }
    }
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Command::Digit(digit)
    }
}

impl From<Operation> for Command {
    fn from(op: Operation) -> Self {
        Command::Operation(op)
    }
}
