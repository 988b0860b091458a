//! App Protocol
//!
//! Versioned, platform-agnostic protocol between the calculator app and
//! its UI surfaces.
//!
//! # Wire Format
//!
//! All messages use this envelope:
//!
//! ```text
//! ┌─────────┬──────────┬─────────────┬─────────────────────┐
//! │ version │ type_tag │ payload_len │       payload       │
//! │  (u8)   │   (u8)   │    (u16)    │      (bytes)        │
//! └─────────┴──────────┴─────────────┴─────────────────────┘
//!    1 byte    1 byte     2 bytes      0-65535 bytes
//! ```
//!
//! The first payload byte repeats the type tag.

mod calculator;
mod input;
pub mod wire;

pub use calculator::CalculatorState;
pub use input::{InputEvent, Key};
pub use wire::{decode_envelope, encode_envelope, Envelope, PROTOCOL_VERSION};

/// Type tags for payload identification
pub mod type_tags {
    // State type tags
    pub const TYPE_CALCULATOR_STATE: u8 = 0x02;

    // Input type tags
    pub const TYPE_BUTTON_PRESS: u8 = 0x10;
    pub const TYPE_KEY_PRESS: u8 = 0x12;
}
