//! Input Event Protocol
//!
//! Serialization for user input events (UI → App).

use super::type_tags::{TYPE_BUTTON_PRESS, TYPE_KEY_PRESS};
use super::wire::{decode_envelope, Decoder, Encoder};
use crate::error::ProtocolError;
use alloc::string::String;
use alloc::vec::Vec;

/// A key the calculator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character (digits, `.`, operator symbols, `%`, `=`)
    Char(char),
    Enter,
    Backspace,
    Escape,
}

impl Key {
    /// Map a raw terminal character, recognizing control codes for the
    /// named keys.
    pub fn from_char(c: char) -> Self {
        match c {
            '\r' | '\n' => Key::Enter,
            '\u{8}' | '\u{7f}' => Key::Backspace,
            '\u{1b}' => Key::Escape,
            other => Key::Char(other),
        }
    }

    fn kind(self) -> u8 {
        match self {
            Key::Char(_) => key_kinds::CHAR,
            Key::Enter => key_kinds::ENTER,
            Key::Backspace => key_kinds::BACKSPACE,
            Key::Escape => key_kinds::ESCAPE,
        }
    }
}

/// Wire discriminants for [`Key`]
mod key_kinds {
    pub const CHAR: u8 = 0;
    pub const ENTER: u8 = 1;
    pub const BACKSPACE: u8 = 2;
    pub const ESCAPE: u8 = 3;
}

/// Abstract input event (UI converts platform events to these)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A labeled keypad button was pressed
    ButtonPress {
        /// Button label (e.g., "7", "÷", "AC", "DEL")
        label: String,
    },

    /// A keyboard key was pressed
    KeyPress { key: Key },
}

impl InputEvent {
    /// Create a button press event
    pub fn button(label: impl Into<String>) -> Self {
        InputEvent::ButtonPress {
            label: label.into(),
        }
    }

    /// Create a key press event
    pub fn key(key: Key) -> Self {
        InputEvent::KeyPress { key }
    }

    /// Serialize to bytes (for sending to the app)
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut enc = Encoder::new();
        match self {
            InputEvent::ButtonPress { label } => {
                enc.u8(TYPE_BUTTON_PRESS).string(label)?;
                enc.finish(TYPE_BUTTON_PRESS)
            }
            InputEvent::KeyPress { key } => {
                enc.u8(TYPE_KEY_PRESS).u8(key.kind());
                if let Key::Char(c) = key {
                    enc.u32(*c as u32);
                }
                enc.finish(TYPE_KEY_PRESS)
            }
        }
    }

    /// Deserialize from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, ProtocolError> {
        let envelope = decode_envelope(data)?;
        if envelope.payload.is_empty() {
            return Err(ProtocolError::EmptyPayload);
        }

        let mut dec = Decoder::new(&envelope.payload);
        // First payload byte repeats the envelope type tag
        let type_tag = dec.u8()?;
        if type_tag != envelope.type_tag {
            return Err(ProtocolError::UnexpectedType {
                expected: envelope.type_tag,
                got: type_tag,
            });
        }

        match type_tag {
            TYPE_BUTTON_PRESS => Ok(InputEvent::ButtonPress {
                label: dec.string()?,
            }),
            TYPE_KEY_PRESS => {
                let key = match dec.u8()? {
                    key_kinds::CHAR => Key::Char(dec.char()?),
                    key_kinds::ENTER => Key::Enter,
                    key_kinds::BACKSPACE => Key::Backspace,
                    key_kinds::ESCAPE => Key::Escape,
                    value => {
                        return Err(ProtocolError::InvalidEnumValue { field: "key", value })
                    }
                };
                Ok(InputEvent::KeyPress { key })
            }
            _ => Err(ProtocolError::UnknownMessageType(type_tag)),
        }
    }

    /// Get the button label if this is a button press
    pub fn button_label(&self) -> Option<&str> {
        match self {
            InputEvent::ButtonPress { label } => Some(label),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_protocol::wire::{encode_envelope, Envelope};
    use alloc::vec;

    #[test]
    fn test_button_press_roundtrip() {
        let event = InputEvent::button("÷");
        let decoded = InputEvent::from_bytes(&event.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.button_label(), Some("÷"));
    }

    #[test]
    fn test_named_keys_roundtrip() {
        for key in [Key::Enter, Key::Backspace, Key::Escape, Key::Char('7'), Key::Char('×')] {
            let event = InputEvent::key(key);
            let decoded = InputEvent::from_bytes(&event.to_bytes().unwrap()).unwrap();
            assert_eq!(decoded, event);
        }
    }

    #[test]
    fn test_key_from_control_chars() {
        assert_eq!(Key::from_char('\r'), Key::Enter);
        assert_eq!(Key::from_char('\u{7f}'), Key::Backspace);
        assert_eq!(Key::from_char('\u{1b}'), Key::Escape);
        assert_eq!(Key::from_char('5'), Key::Char('5'));
    }

    #[test]
    fn test_unknown_type_tag() {
        let bytes = encode_envelope(&Envelope::new(0x7e, vec![0x7e])).unwrap();
        assert_eq!(
            InputEvent::from_bytes(&bytes),
            Err(ProtocolError::UnknownMessageType(0x7e))
        );
    }

    #[test]
    fn test_mismatched_payload_tag() {
        let bytes = encode_envelope(&Envelope::new(TYPE_KEY_PRESS, vec![TYPE_BUTTON_PRESS])).unwrap();
        assert!(matches!(
            InputEvent::from_bytes(&bytes),
            Err(ProtocolError::UnexpectedType { .. })
        ));
    }

    #[test]
    fn test_empty_payload() {
        let bytes = encode_envelope(&Envelope::new(TYPE_KEY_PRESS, vec![])).unwrap();
        assert_eq!(InputEvent::from_bytes(&bytes), Err(ProtocolError::EmptyPayload));
    }

    #[test]
    fn test_invalid_key_kind() {
        let bytes = encode_envelope(&Envelope::new(TYPE_KEY_PRESS, vec![TYPE_KEY_PRESS, 9])).unwrap();
        assert_eq!(
            InputEvent::from_bytes(&bytes),
            Err(ProtocolError::InvalidEnumValue { field: "key", value: 9 })
        );
    }
}
