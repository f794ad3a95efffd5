//! Self-contained wire values.
//!
//! Every field of a MySQL payload is one of six encodings. [`WireValue`] holds
//! one encoded field and knows its exact size; [`WireShape`] names the encoding
//! to expect when reading a field back.

use std::io::{ErrorKind, Read, Write};

use crate::error::{Error, Result};
use crate::protocol::primitive::*;

/// Fixed-length little-endian integer of 1 to 8 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedInt {
    width: usize,
    value: u64,
}

impl FixedInt {
    /// `value` is truncated to the low `8 * width` bits when encoded.
    pub fn new(width: usize, value: u64) -> Result<Self> {
        if !(1..=8).contains(&width) {
            return Err(Error::InvalidWidth(width));
        }
        Ok(Self { width, value })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The value as it appears on the wire (truncated to `width`)
    pub fn value(&self) -> u64 {
        if self.width == 8 {
            self.value
        } else {
            self.value & ((1u64 << (self.width * 8)) - 1)
        }
    }
}

/// Byte string whose length is declared by the surrounding format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedString(Vec<u8>);

impl FixedString {
    pub fn new(width: usize, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() != width {
            return Err(Error::FixedWidthMismatch {
                expected: width,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Text terminated by a single 0x00
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NulTerminated(String);

impl NulTerminated {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.as_bytes().contains(&0) {
            return Err(Error::InteriorNul);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One encoded protocol field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireValue {
    FixedInt(FixedInt),
    FixedString(FixedString),
    LengthPrefixedInt(u64),
    LengthPrefixedString(Vec<u8>),
    NulTerminatedString(NulTerminated),
    /// Runs to the end of the enclosing packet
    TailString(Vec<u8>),
}

/// The encoding of a field to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    FixedInt(usize),
    FixedString(usize),
    LengthPrefixedInt,
    LengthPrefixedString,
    NulTerminatedString,
    TailString,
}

impl WireValue {
    pub fn fixed_int(width: usize, value: u64) -> Result<Self> {
        Ok(Self::FixedInt(FixedInt::new(width, value)?))
    }

    pub fn fixed_string(width: usize, bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self::FixedString(FixedString::new(width, bytes)?))
    }

    pub fn lenenc_int(value: u64) -> Self {
        Self::LengthPrefixedInt(value)
    }

    pub fn lenenc_string(bytes: impl Into<Vec<u8>>) -> Self {
        Self::LengthPrefixedString(bytes.into())
    }

    pub fn nul_terminated(text: impl Into<String>) -> Result<Self> {
        Ok(Self::NulTerminatedString(NulTerminated::new(text)?))
    }

    pub fn tail(bytes: impl Into<Vec<u8>>) -> Self {
        Self::TailString(bytes.into())
    }

    pub fn shape(&self) -> WireShape {
        match self {
            Self::FixedInt(v) => WireShape::FixedInt(v.width()),
            Self::FixedString(v) => WireShape::FixedString(v.width()),
            Self::LengthPrefixedInt(_) => WireShape::LengthPrefixedInt,
            Self::LengthPrefixedString(_) => WireShape::LengthPrefixedString,
            Self::NulTerminatedString(_) => WireShape::NulTerminatedString,
            Self::TailString(_) => WireShape::TailString,
        }
    }

    /// Number of bytes `write_to` appends
    pub fn encoded_len(&self) -> usize {
        match self {
            Self::FixedInt(v) => v.width(),
            Self::FixedString(v) => v.width(),
            Self::LengthPrefixedInt(v) => lenenc_int_len(*v),
            Self::LengthPrefixedString(v) => lenenc_int_len(v.len() as u64) + v.len(),
            Self::NulTerminatedString(v) => v.as_str().len() + 1,
            Self::TailString(v) => v.len(),
        }
    }

    /// Integer payload of the integer variants
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::FixedInt(v) => Some(v.value()),
            Self::LengthPrefixedInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Byte payload of the string variants
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::FixedString(v) => Some(v.as_bytes()),
            Self::LengthPrefixedString(v) | Self::TailString(v) => Some(v),
            Self::NulTerminatedString(v) => Some(v.as_str().as_bytes()),
            Self::FixedInt(_) | Self::LengthPrefixedInt(_) => None,
        }
    }

    /// Append the encoding to a payload buffer
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Self::FixedInt(v) => write_int_fix(out, v.width(), v.value),
            Self::FixedString(v) => write_bytes_fix(out, v.as_bytes()),
            Self::LengthPrefixedInt(v) => write_int_lenenc(out, *v),
            Self::LengthPrefixedString(v) => write_bytes_lenenc(out, v),
            Self::NulTerminatedString(v) => write_string_null(out, v.as_str()),
            Self::TailString(v) => write_bytes_fix(out, v),
        }
    }

    /// Write the encoding to a sink, returning the number of bytes written
    pub fn encode<W: Write>(&self, sink: &mut W) -> Result<usize> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut buf);
        sink.write_all(&buf)?;
        Ok(buf.len())
    }

    /// Parse one field from the front of `data`
    pub fn parse(shape: WireShape, data: &[u8]) -> Result<(Self, &[u8])> {
        match shape {
            WireShape::FixedInt(width) => {
                let (value, rest) = read_int_fix(data, width)?;
                Ok((Self::FixedInt(FixedInt { width, value }), rest))
            }
            WireShape::FixedString(width) => {
                let (bytes, rest) = read_string_fix(data, width)?;
                Ok((Self::FixedString(FixedString(bytes.to_vec())), rest))
            }
            WireShape::LengthPrefixedInt => {
                let (value, rest) = read_int_lenenc(data)?;
                Ok((Self::LengthPrefixedInt(value), rest))
            }
            WireShape::LengthPrefixedString => {
                let (bytes, rest) = read_string_lenenc(data)?;
                Ok((Self::LengthPrefixedString(bytes.to_vec()), rest))
            }
            WireShape::NulTerminatedString => {
                let (bytes, rest) = read_string_null(data)?;
                let text = simdutf8::basic::from_utf8(bytes)?;
                Ok((Self::NulTerminatedString(NulTerminated(text.to_owned())), rest))
            }
            WireShape::TailString => {
                let bytes = read_string_eof(data);
                Ok((Self::TailString(bytes.to_vec()), &data[data.len()..]))
            }
        }
    }

    /// Read one field from a source
    ///
    /// `TailString` consumes the source to its end; hand it a reader bounded by
    /// the current packet.
    pub fn decode<R: Read>(shape: WireShape, src: &mut R) -> Result<Self> {
        match shape {
            WireShape::FixedInt(width) => {
                if !(1..=8).contains(&width) {
                    return Err(Error::InvalidWidth(width));
                }
                let mut bytes = [0u8; 8];
                read_exact(src, &mut bytes[..width])?;
                Ok(Self::FixedInt(FixedInt {
                    width,
                    value: u64::from_le_bytes(bytes),
                }))
            }
            WireShape::FixedString(width) => {
                let bytes = read_counted(src, width as u64)?;
                Ok(Self::FixedString(FixedString(bytes)))
            }
            WireShape::LengthPrefixedInt => Ok(Self::LengthPrefixedInt(decode_lenenc(src)?)),
            WireShape::LengthPrefixedString => {
                let len = decode_lenenc(src)?;
                Ok(Self::LengthPrefixedString(read_counted(src, len)?))
            }
            WireShape::NulTerminatedString => {
                let mut bytes = Vec::new();
                let mut byte = [0u8; 1];
                loop {
                    read_exact(src, &mut byte)?;
                    if byte[0] == 0 {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                let text = simdutf8::basic::from_utf8(&bytes)?;
                Ok(Self::NulTerminatedString(NulTerminated(text.to_owned())))
            }
            WireShape::TailString => {
                let mut bytes = Vec::new();
                src.read_to_end(&mut bytes)?;
                Ok(Self::TailString(bytes))
            }
        }
    }
}

fn read_exact<R: Read>(src: &mut R, buf: &mut [u8]) -> Result<()> {
    src.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => Error::UnexpectedEof,
        _ => Error::IoError(e),
    })
}

/// Read exactly `len` bytes without trusting `len` for the allocation size
fn read_counted<R: Read>(src: &mut R, len: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let read = src.take(len).read_to_end(&mut bytes)?;
    if (read as u64) < len {
        return Err(Error::UnexpectedEof);
    }
    Ok(bytes)
}

fn decode_lenenc<R: Read>(src: &mut R) -> Result<u64> {
    let mut prefix = [0u8; 1];
    read_exact(src, &mut prefix)?;
    let width = match prefix[0] {
        0xFC => 2,
        // 3 bytes, padded to 4 below
        0xFD => 3,
        0xFE => 8,
        p @ (0xFB | 0xFF) => return Err(Error::ReservedLengthPrefix(p)),
        v => return Ok(v as u64),
    };
    let mut bytes = [0u8; 8];
    read_exact(src, &mut bytes[..width])?;
    Ok(u64::from_le_bytes(bytes))
}
