use std::io;

use thiserror::Error;

/// Errors raised while reading or writing binary records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("out of bounds: {requested} bytes requested at position {position} of {len}")]
    OutOfBounds {
        position: usize,
        requested: usize,
        len: usize,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unsupported tx format: {0}")]
    UnsupportedFormat(u8),

    #[error("trailing bytes after record")]
    TrailingBytes,

    #[error("segment length does not fit the length prefix")]
    LengthOverflow,

    #[error("i/o error: {0}")]
    Io(io::ErrorKind),
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => CodecError::UnexpectedEof,
            kind => CodecError::Io(kind),
        }
    }
}

/// Validation failures of the user-friendly address format.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressError {
    #[error("invalid address: should start with \"NQ\"")]
    InvalidCountryCode,

    #[error("invalid address: length without spaces not 36")]
    InvalidLength,

    #[error("invalid address: invalid checksum")]
    Checksum,

    #[error("invalid address: unexpected character")]
    InvalidCharacter,
}
