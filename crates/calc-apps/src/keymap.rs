//! Input Mapping
//!
//! Translates keypad buttons and keyboard keys into engine commands.

use crate::app_protocol::{InputEvent, Key};
use calc_engine::{Command, Digit, Operation};

/// Keypad layout, row by row. `0` and `=` each span two columns.
pub const KEYPAD: [&[&str]; 5] = [
    &["AC", "DEL", "%", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

/// Command for a keypad button label.
pub fn command_for_button(label: &str) -> Option<Command> {
    match label {
        "AC" => Some(Command::Clear),
        "DEL" => Some(Command::Delete),
        "%" => Some(Command::Percent),
        "=" => Some(Command::Equals),
        "." => Some(Command::DecimalPoint),
        "÷" | "×" | "-" | "+" => single_char(label)
            .and_then(|c| Operation::try_from(c).ok())
            .map(Command::from),
        _ => single_char(label)
            .and_then(|c| Digit::try_from(c).ok())
            .map(Command::from),
    }
}

/// Command for a keyboard key.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Enter => Some(Command::Equals),
        Key::Backspace => Some(Command::Delete),
        Key::Escape => Some(Command::Clear),
        Key::Char('.') => Some(Command::DecimalPoint),
        Key::Char('%') => Some(Command::Percent),
        Key::Char('=') => Some(Command::Equals),
        Key::Char(c) if c.is_ascii_digit() => Digit::try_from(c).ok().map(Command::from),
        Key::Char(c) => Operation::try_from(c).ok().map(Command::from),
    }
}

/// Command for any input event. `None` means the event is ignored.
pub fn command_for_event(event: &InputEvent) -> Option<Command> {
    match event {
        InputEvent::ButtonPress { label } => command_for_button(label),
        InputEvent::KeyPress { key } => command_for_key(*key),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
