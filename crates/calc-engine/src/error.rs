//! Error Types for the Calculator Engine
//!
//! Input validation errors are returned to callers. Computation errors are
//! never returned; the engine recovers from them and keeps the last one as a
//! display overlay.

/// Errors raised when constructing engine inputs from raw characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Character is not an ASCII decimal digit.
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),

    /// Character is not one of the four operator symbols or their aliases.
    #[error("unknown operation: {0:?}")]
    UnknownOperation(char),
}

/// Failures the engine recovers from while computing.
///
/// After any of these the current operand is `"0"` and no operation is
/// pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComputeError {
    /// Right-hand operand of a division was zero.
    #[error("division by zero")]
    DivideByZero,

    /// An operand could not be parsed as a number.
    #[error("invalid operand")]
    InvalidOperand,

    /// The result was not a finite number.
    #[error("result out of range")]
    Overflow,
}
