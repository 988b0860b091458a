//! Calculator State Protocol
//!
//! The rendered calculator view sent to UI surfaces after every input.

use super::type_tags::TYPE_CALCULATOR_STATE;
use super::wire::{decode_envelope, Decoder, Encoder};
use crate::error::ProtocolError;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Calculator view state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Main display line, already grouped and truncated (or the error text)
    pub display: String,

    /// Secondary line, e.g. "1,200 ×"; empty when nothing is pending
    pub history: String,

    /// Pending operation symbol ('+', '-', '×', '÷')
    pub pending_op: Option<char>,

    /// Whether the main line shows an error instead of a number
    pub has_error: bool,
}

impl CalculatorState {
    /// Initial view showing "0"
    pub fn initial() -> Self {
        Self {
            display: String::from("0"),
            ..Self::default()
        }
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        let mut enc = Encoder::new();
        enc.u8(TYPE_CALCULATOR_STATE)
            .string(&self.display)?
            .string(&self.history)?
            .optional_char(self.pending_op)
            .bool(self.has_error);
        enc.finish(TYPE_CALCULATOR_STATE)
    }

    /// Deserialize from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self, ProtocolError> {
        let envelope = decode_envelope(data)?;

        if envelope.type_tag != TYPE_CALCULATOR_STATE {
            return Err(ProtocolError::UnexpectedType {
                expected: TYPE_CALCULATOR_STATE,
                got: envelope.type_tag,
            });
        }
        if envelope.payload.is_empty() {
            return Err(ProtocolError::EmptyPayload);
        }

        let mut dec = Decoder::new(&envelope.payload);
        // Skip the repeated type tag
        dec.u8()?;

        Ok(CalculatorState {
            display: dec.string()?,
            history: dec.string()?,
            pending_op: dec.optional_char()?,
            has_error: dec.bool("has_error")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_protocol::type_tags::TYPE_BUTTON_PRESS;
    use crate::app_protocol::wire::{encode_envelope, Envelope};

    #[test]
    fn test_calculator_state_roundtrip() {
        let state = CalculatorState {
            display: String::from("1,234.5"),
            history: String::from("12 ×"),
            pending_op: Some('×'),
            has_error: false,
        };

        let decoded = CalculatorState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_calculator_state_error() {
        let state = CalculatorState {
            display: String::from("Error: Div by 0"),
            has_error: true,
            ..CalculatorState::default()
        };

        let decoded = CalculatorState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        assert!(decoded.has_error);
        assert_eq!(decoded.pending_op, None);
        assert_eq!(decoded.display, "Error: Div by 0");
    }

    #[test]
    fn test_wrong_type_tag() {
        let bytes = encode_envelope(&Envelope::new(TYPE_BUTTON_PRESS, alloc::vec![TYPE_BUTTON_PRESS]))
            .unwrap();
        assert_eq!(
            CalculatorState::from_bytes(&bytes),
            Err(ProtocolError::UnexpectedType {
                expected: TYPE_CALCULATOR_STATE,
                got: TYPE_BUTTON_PRESS,
            })
        );
    }

    #[test]
    fn test_truncated_state() {
        let bytes = CalculatorState::initial().to_bytes().unwrap();
        let mut short = bytes[..bytes.len() - 1].to_vec();
        // Fix up the declared length so only the field decoder notices
        short[2] -= 1;
        assert_eq!(CalculatorState::from_bytes(&short), Err(ProtocolError::TooShort));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&CalculatorState::initial()).unwrap();
        assert_eq!(
            json,
            r#"{"display":"0","history":"","pending_op":null,"has_error":false}"#
        );
    }
}
