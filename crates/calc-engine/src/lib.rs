//! Calculator Engine
//!
//! The input/state engine of a four-function calculator:
//!
//! - **CalculatorEngine**: owned state machine driven by discrete commands
//! - **Command**: every action the engine accepts
//! - **Operand**: validated decimal numeral in progress
//! - **Operation**: closed set of the four binary operators
//!
//! The engine has no I/O and no rendering. A presentation layer sends it
//! commands and reads [`CalculatorEngine::display_value`] after each one.
//!
//! # Example
//!
//! ```
//! use calc_engine::{CalculatorEngine, Command, Digit, Operation};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.apply(Command::Digit(Digit::new(6).unwrap()));
//! engine.apply(Command::Operation(Operation::Multiply));
//! engine.apply(Command::Digit(Digit::new(7).unwrap()));
//! engine.apply(Command::Equals);
//!
//! assert_eq!(engine.display_value(), "42");
//! ```

extern crate alloc;

pub mod command;
pub mod engine;
pub mod error;
pub mod number;
pub mod operand;
pub mod operation;

pub use command::Command;
pub use engine::{CalculatorEngine, EngineState};
pub use error::{ComputeError, EngineError};
pub use operand::{Digit, Operand};
pub use operation::Operation;
