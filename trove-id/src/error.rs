//! Error types for parsing identifiers from text.

use core::fmt;

/// Text could not be parsed as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input is neither 32 (simple) nor 36 (hyphenated) bytes long.
    InvalidLength {
        /// Length of the input in bytes.
        len: usize,
    },
    /// A character that is not a hex digit where one was expected.
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Byte offset into the input.
        index: usize,
    },
    /// A hyphenated input is missing a `-` at a group boundary.
    InvalidGroup {
        /// Byte offset where the `-` was expected.
        index: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => {
                write!(f, "invalid length {len}: expected 32 or 36 characters")
            }
            Self::InvalidChar { ch, index } => {
                write!(f, "invalid character {ch:?} at offset {index}")
            }
            Self::InvalidGroup { index } => {
                write!(f, "expected '-' at offset {index}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
