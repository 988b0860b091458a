//! Wire Format
//!
//! Envelope framing plus a small cursor-based encoder/decoder for payload
//! fields. All integers are little-endian.

use crate::error::ProtocolError;
use alloc::string::String;
use alloc::vec::Vec;

/// Protocol version byte
pub const PROTOCOL_VERSION: u8 = 0x01;

/// version + type_tag + payload_len
const HEADER_LEN: usize = 4;

/// Message envelope (header + payload)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    pub version: u8,
    /// Type tag identifying the payload type
    pub type_tag: u8,
    pub payload: Vec<u8>,
}

impl Envelope {
    pub fn new(type_tag: u8, payload: Vec<u8>) -> Self {
        Self {
            version: PROTOCOL_VERSION,
            type_tag,
            payload,
        }
    }
}

/// Encode an envelope to bytes.
pub fn encode_envelope(envelope: &Envelope) -> Result<Vec<u8>, ProtocolError> {
    let payload_len = u16::try_from(envelope.payload.len())
        .map_err(|_| ProtocolError::PayloadTooLarge(envelope.payload.len()))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + envelope.payload.len());
    bytes.push(envelope.version);
    bytes.push(envelope.type_tag);
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&envelope.payload);
    Ok(bytes)
}

/// Decode an envelope, checking the version and declared payload length.
pub fn decode_envelope(data: &[u8]) -> Result<Envelope, ProtocolError> {
    if data.len() < HEADER_LEN {
        return Err(ProtocolError::TooShort);
    }

    let version = data[0];
    if version != PROTOCOL_VERSION {
        return Err(ProtocolError::UnknownVersion(version));
    }

    let type_tag = data[1];
    let payload_len = u16::from_le_bytes([data[2], data[3]]) as usize;
    let available = data.len() - HEADER_LEN;
    if available < payload_len {
        return Err(ProtocolError::PayloadOverflow {
            declared: payload_len,
            available,
        });
    }

    Ok(Envelope {
        version,
        type_tag,
        payload: data[HEADER_LEN..HEADER_LEN + payload_len].to_vec(),
    })
}

/// Appends payload fields to a buffer.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn u32(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bool(&mut self, value: bool) -> &mut Self {
        self.u8(u8::from(value))
    }

    /// Length-prefixed UTF-8 (u16 length).
    pub fn string(&mut self, s: &str) -> Result<&mut Self, ProtocolError> {
        let len = u16::try_from(s.len()).map_err(|_| ProtocolError::PayloadTooLarge(s.len()))?;
        self.buf.extend_from_slice(&len.to_le_bytes());
        self.buf.extend_from_slice(s.as_bytes());
        Ok(self)
    }

    /// `0x00` for `None`, `0x01` followed by the u32 code point otherwise.
    pub fn optional_char(&mut self, c: Option<char>) -> &mut Self {
        match c {
            None => self.u8(0x00),
            Some(ch) => self.u8(0x01).u32(ch as u32),
        }
    }

    /// Wrap the encoded fields in an envelope.
    pub fn finish(self, type_tag: u8) -> Result<Vec<u8>, ProtocolError> {
        encode_envelope(&Envelope::new(type_tag, self.buf))
    }
}

/// Reads payload fields in order.
#[derive(Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ProtocolError> {
        let data = self.data;
        let end = self.cursor.checked_add(len).ok_or(ProtocolError::TooShort)?;
        let bytes = data.get(self.cursor..end).ok_or(ProtocolError::TooShort)?;
        self.cursor = end;
        Ok(bytes)
    }

    pub fn u8(&mut self) -> Result<u8, ProtocolError> {
        Ok(self.take(1)?[0])
    }

    pub fn u32(&mut self) -> Result<u32, ProtocolError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn bool(&mut self, field: &'static str) -> Result<bool, ProtocolError> {
        match self.u8()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(ProtocolError::InvalidEnumValue { field, value }),
        }
    }

    pub fn string(&mut self) -> Result<String, ProtocolError> {
        let len = {
            let b = self.take(2)?;
            u16::from_le_bytes([b[0], b[1]]) as usize
        };
        let available = self.data.len() - self.cursor;
        if available < len {
            return Err(ProtocolError::StringOverflow {
                declared: len,
                available,
            });
        }
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ProtocolError::InvalidUtf8)
    }

    pub fn char(&mut self) -> Result<char, ProtocolError> {
        let code = self.u32()?;
        char::from_u32(code).ok_or(ProtocolError::InvalidChar(code))
    }

    pub fn optional_char(&mut self) -> Result<Option<char>, ProtocolError> {
        match self.u8()? {
            0 => Ok(None),
            1 => self.char().map(Some),
            value => Err(ProtocolError::InvalidEnumValue {
                field: "optional_char",
                value,
            }),
        }
    }
}
