use thiserror::Error;

use crate::constant::ColumnType;

pub use color_eyre::eyre::eyre;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Fixed-width value expects {expected} bytes, got {actual}")]
    FixedWidthMismatch { expected: usize, actual: usize },

    #[error("Invalid fixed integer width: {0} (expected 1..=8)")]
    InvalidWidth(usize),

    #[error("Null-terminated string contains an interior NUL byte")]
    InteriorNul,

    #[error("Row value count ({actual}) != column count ({expected})")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Attempt to add column after row population")]
    ColumnsFrozen,

    #[error("Cannot encode a {value} value as {column_type:?}")]
    ValueTypeMismatch {
        column_type: ColumnType,
        value: &'static str,
    },

    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Invalid packet")]
    InvalidPacket,

    #[error("Reserved length-encoded integer prefix: 0x{0:02X}")]
    ReservedLengthPrefix(u8),

    #[error("Invalid UTF-8 in string value")]
    InvalidUtf8,

    #[error("Payload of {0} bytes does not fit in a single packet")]
    PayloadTooLarge(usize),

    #[error("Library bug: {0}")]
    LibraryBug(color_eyre::Report),
}

impl From<simdutf8::basic::Utf8Error> for Error {
    fn from(_: simdutf8::basic::Utf8Error) -> Self {
        Error::InvalidUtf8
    }
}

pub type Result<T> = std::result::Result<T, Error>;
