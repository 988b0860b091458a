//! Display Formatting
//!
//! Turns raw operand text into display text. Never touches engine state.

use crate::config::CalculatorConfig;
use alloc::string::String;
use calc_engine::Operation;

/// Group the integer digits of a numeral with `separator`.
///
/// The sign and the fractional part (including a trailing `.` still being
/// typed) are kept verbatim. Text that is not a plain numeral is returned
/// unchanged.
pub fn group_thousands(numeral: &str, separator: char) -> String {
    let (sign, unsigned) = match numeral.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeral),
    };
    let (int_part, rest) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return String::from(numeral);
    }

    let mut out = String::with_capacity(numeral.len() + int_part.len() / 3);
    out.push_str(sign);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out.push_str(rest);
    out
}

/// Hard-truncate to at most `max_chars` characters. Never rounds.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Formats engine registers for display using the configured rules.
#[derive(Clone, Debug)]
pub struct DisplayFormatter {
    max_len: usize,
    separator: char,
}

impl DisplayFormatter {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            max_len: config.max_display_len,
            separator: config.group_separator,
        }
    }

    /// Main display line: grouped, then truncated.
    pub fn main_line(&self, operand: &str) -> String {
        truncate(&group_thousands(operand, self.separator), self.max_len)
    }

    /// Secondary line for a pending operation, e.g. `"1,200 ×"`.
    pub fn history_line(&self, previous: &str, operation: Operation) -> String {
        alloc::format!(
            "{} {}",
            group_thousands(previous, self.separator),
            operation.symbol()
        )
    }
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}
