//! Error Types for the Calculator App
//!
//! Defines errors that can occur at the app boundary.

use alloc::string::String;

/// Errors that can occur in app execution.
#[derive(Clone, Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be read or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Protocol parsing or encoding failed.
    #[error("protocol error: {0}")]
    ProtocolError(#[from] ProtocolError),
}

/// Errors that can occur during protocol parsing.
///
/// These errors indicate malformed or invalid wire-format messages
/// exchanged between a UI surface and the app.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// Message is too short to contain required header or fields.
    #[error("message too short")]
    TooShort,

    /// Protocol version byte is not recognized.
    #[error("unknown protocol version: {0}")]
    UnknownVersion(u8),

    /// Payload length in header exceeds available data.
    #[error("payload overflow: declared {declared} bytes, only {available} available")]
    PayloadOverflow { declared: usize, available: usize },

    /// Payload or string does not fit a u16 length prefix.
    #[error("payload too large: {0} bytes")]
    PayloadTooLarge(usize),

    /// String length prefix exceeds available data.
    #[error("string overflow: declared {declared} bytes, only {available} available")]
    StringOverflow { declared: usize, available: usize },

    /// String data is not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,

    /// Code point is not a valid char.
    #[error("invalid char: U+{0:04X}")]
    InvalidChar(u32),

    /// Payload is empty when data was expected.
    #[error("empty payload")]
    EmptyPayload,

    /// Type tag in envelope does not match expected type.
    #[error("unexpected type: expected 0x{expected:02x}, got 0x{got:02x}")]
    UnexpectedType { expected: u8, got: u8 },

    /// Message type tag is not recognized.
    #[error("unknown message type: 0x{0:02x}")]
    UnknownMessageType(u8),

    /// Enum discriminant is not a valid variant.
    #[error("invalid enum value for {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: u8 },
}
