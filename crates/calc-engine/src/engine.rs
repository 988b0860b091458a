//! Calculator Engine
//!
//! The input/state machine. Four registers (current operand, previous
//! operand, pending operation, reset flag) plus a transient error overlay.
//! Every command resolves synchronously and leaves the engine renderable.

use crate::command::Command;
use crate::error::ComputeError;
use crate::number;
use crate::operand::{Digit, Operand};
use crate::operation::Operation;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Left-hand operand together with the operator waiting for its right side.
///
/// Keeping both in one value makes "previous operand present iff an
/// operation is pending" hold by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingOperation {
    lhs: Operand,
    operation: Operation,
}

/// Plain snapshot of the engine registers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Value being edited or displayed
    pub current: String,

    /// Left-hand operand, empty when nothing is pending
    pub previous: String,

    /// Operator awaiting its right-hand operand
    pub operation: Option<Operation>,

    /// Whether the next digit starts a fresh operand
    pub reset_on_next_digit: bool,
}

impl EngineState {
    /// State of a freshly constructed or cleared engine.
    pub fn initial() -> Self {
        Self {
            current: String::from("0"),
            previous: String::new(),
            operation: None,
            reset_on_next_digit: false,
        }
    }
}

/// Four-function calculator state machine.
///
/// Owned exclusively by whatever drives it; one instance per session.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    current: Operand,
    pending: Option<PendingOperation>,
    reset_on_next_digit: bool,
    error: Option<ComputeError>,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a command to its handler.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(digit) => self.append_digit(digit),
            Command::DecimalPoint => self.append_decimal_point(),
            Command::Operation(op) => self.choose_operation(op),
            Command::Equals => self.compute(),
            Command::Clear => self.clear(),
            Command::Delete => self.delete(),
            Command::Percent => self.percent(),
        }
    }

    pub fn append_digit(&mut self, digit: Digit) {
        self.error = None;
        self.begin_entry();
        self.current.push_digit(digit);
    }

    /// Enter a decimal point. A reset pending from the last operation is
    /// honored first, so the operand becomes `"0."`.
    pub fn append_decimal_point(&mut self) {
        self.error = None;
        self.begin_entry();
        self.current.push_decimal_point();
    }

    /// Choose the next operation, collapsing any pending one first
    /// (left to right, no precedence).
    pub fn choose_operation(&mut self, operation: Operation) {
        self.error = None;

        if self.pending.is_some() {
            self.compute_pending();
        }

        self.pending = Some(PendingOperation {
            lhs: self.current.clone(),
            operation,
        });
        self.reset_on_next_digit = true;
    }

    /// Apply the pending operation. No-op when nothing is pending.
    pub fn compute(&mut self) {
        self.error = None;
        self.compute_pending();
    }

    pub fn percent(&mut self) {
        self.error = None;
        if let Some(percent) = self
            .current
            .value()
            .and_then(|value| Operand::from_value(value / 100.0))
        {
            self.current = percent;
        }
    }

    pub fn delete(&mut self) {
        self.error = None;
        self.current.pop();
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Raw current operand, unformatted.
    pub fn display_value(&self) -> &str {
        self.current.as_str()
    }

    pub fn current_operand(&self) -> &Operand {
        &self.current
    }

    /// Left-hand operand of the pending operation.
    pub fn previous_operand(&self) -> Option<&Operand> {
        self.pending.as_ref().map(|p| &p.lhs)
    }

    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Error recovered from by the last command, if any. Cleared by the
    /// next command.
    pub fn error(&self) -> Option<ComputeError> {
        self.error
    }

    pub fn state(&self) -> EngineState {
        EngineState {
            current: String::from(self.current.as_str()),
            previous: self
                .previous_operand()
                .map(|lhs| String::from(lhs.as_str()))
                .unwrap_or_default(),
            operation: self.pending_operation(),
            reset_on_next_digit: self.reset_on_next_digit,
        }
    }

    fn begin_entry(&mut self) {
        if self.reset_on_next_digit {
            self.current = Operand::zero();
            self.reset_on_next_digit = false;
        }
    }

    fn compute_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        match evaluate(&pending.lhs, pending.operation, &self.current) {
            Ok(result) => {
                self.current = result;
                self.reset_on_next_digit = true;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    lhs = %pending.lhs,
                    op = %pending.operation,
                    rhs = %self.current,
                    "computation failed, operand reset"
                );
                self.current = Operand::zero();
                self.error = Some(e);
            }
        }
    }
}

fn evaluate(lhs: &Operand, operation: Operation, rhs: &Operand) -> Result<Operand, ComputeError> {
    let lhs = lhs.value().ok_or(ComputeError::InvalidOperand)?;
    let rhs = rhs.value().ok_or(ComputeError::InvalidOperand)?;
    let result = operation
        .apply(lhs, rhs)
        .ok_or(ComputeError::DivideByZero)?;
    Operand::from_value(number::round_result(result)).ok_or(ComputeError::Overflow)
}
