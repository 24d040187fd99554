//! Codec errors and the raw numeric contract they mirror.

use thiserror::Error;

/// Errors produced by the core codec.
///
/// Mirrors the `-1/-2/-3` integer contract some callers (the CLI,
/// FFI consumers, fuzz harnesses) want directly; see [`CodecError::code`]
/// and [`strerror`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("destination buffer too small")]
    DestinationTooSmall,
    #[error("invalid code stream")]
    InvalidCodeStream,
    #[error("string table full")]
    StringTableFull,
}

impl CodecError {
    /// The raw negative integer this error corresponds to.
    pub const fn code(self) -> i32 {
        match self {
            CodecError::DestinationTooSmall => -1,
            CodecError::InvalidCodeStream => -2,
            CodecError::StringTableFull => -3,
        }
    }
}

/// Map a raw result code (`>= 0` byte count, or one of `-1/-2/-3`) to
/// a human-readable string, matching the C-style `strerror` contract.
pub fn strerror(code: i32) -> &'static str {
    match code {
        c if c >= 0 => "no error",
        -1 => "destination buffer too small",
        -2 => "invalid code stream",
        -3 => "string table full",
        _ => "unknown error",
    }
}

/// Errors surfaced only by the CLI / file-handling layer.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("not a recognized .Z-style header")]
    BadHeader,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_documented_contract() {
        assert_eq!(CodecError::DestinationTooSmall.code(), -1);
        assert_eq!(CodecError::InvalidCodeStream.code(), -2);
        assert_eq!(CodecError::StringTableFull.code(), -3);
    }

    #[test]
    fn strerror_covers_every_code() {
        assert_eq!(strerror(0), "no error");
        assert_eq!(strerror(-1), "destination buffer too small");
        assert_eq!(strerror(-2), "invalid code stream");
        assert_eq!(strerror(-3), "string table full");
        assert_eq!(strerror(-99), "unknown error");
    }
}
