//! Operand Registers
//!
//! `Operand` is a decimal numeral in progress. Every mutation keeps it a
//! valid numeral: non-empty, at most one decimal point, an optional leading
//! minus sign and no redundant leading zero.

use crate::error::EngineError;
use crate::number;
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create from a numeric value. Returns `None` above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Numeric value of the digit.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character of the digit.
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = EngineError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(EngineError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A validated numeral string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Operand(String);

impl Operand {
    /// The initial operand, `"0"`.
    pub fn zero() -> Self {
        Operand(String::from("0"))
    }

    /// Validate a numeral such as `"12"`, `"-0.5"` or the partial `"3."`.
    pub fn parse(text: &str) -> Option<Self> {
        if is_numeral(text) {
            Some(Operand(String::from(text)))
        } else {
            None
        }
    }

    /// Render a computed value. Non-finite values have no numeral form.
    pub fn from_value(value: f64) -> Option<Self> {
        if value.is_finite() {
            Some(Operand(number::render(value)))
        } else {
            None
        }
    }

    /// Bypass validation, for exercising recovery paths in tests.
    #[cfg(test)]
    pub(crate) fn unchecked(text: &str) -> Self {
        Operand(String::from(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the text parses.
    pub fn value(&self) -> Option<f64> {
        self.0.parse::<f64>().ok()
    }

    pub fn is_zero_literal(&self) -> bool {
        self.0 == "0"
    }

    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Append a digit, replacing a lone zero (`"0"` or `"-0"`).
    pub fn push_digit(&mut self, digit: Digit) {
        match self.0.as_str() {
            "0" => {
                self.0.clear();
            }
            "-0" => {
                self.0.truncate(1);
            }
            _ => {}
        }
        self.0.push(digit.as_char());
    }

    /// Append a decimal point. Returns `false` if one is already present.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.has_decimal_point() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Drop the last character, falling back to `"0"` when what remains is
    /// not a numeral.
    pub fn pop(&mut self) {
        if self.is_zero_literal() {
            return;
        }
        self.0.pop();
        if !is_numeral(&self.0) {
            *self = Operand::zero();
        }
    }
}

impl Default for Operand {
    fn default() -> Self {
        Operand::zero()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Operand {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        if is_numeral(&text) {
            Ok(Operand(text))
        } else {
            Err(alloc::format!("not a numeral: {:?}", text))
        }
    }
}

impl From<Operand> for String {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

/// `-?digits(.digits*)?` with no redundant leading zero.
fn is_numeral(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if int_part.len() > 1 && int_part.starts_with('0') {
        return false;
    }
    match frac_part {
        Some(frac) => frac.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}
