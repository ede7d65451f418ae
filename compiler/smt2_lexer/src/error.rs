//! Scanner error types.
//!
//! Lexical errors carry the line and column where the offending token
//! started. I/O failures of the underlying reader are kept apart from
//! lexical errors and carry the read position at the time of the failure.

use std::fmt;
use std::io;

use thiserror::Error;

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    /// End of input inside `|...|` or `"..."`. `delimiter` is `|` or `"`.
    UnterminatedQuote { delimiter: u8 },
    /// A byte that cannot start a token.
    InvalidCharacter { byte: u8 },
    /// `#` not followed by `b` or `x` (`radix` is `None`), or a radix
    /// prefix with no digits of that radix after it.
    MalformedBitVectorLiteral { radix: Option<u32> },
    /// A `.` in a numeral with no digit after it.
    MalformedNumeral,
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanErrorKind::UnterminatedQuote { delimiter: b'"' } => {
                write!(f, "unexpected end of string")
            }
            ScanErrorKind::UnterminatedQuote { delimiter } => write!(
                f,
                "unexpected end of quoted symbol, missing closing '{}'",
                char::from(*delimiter)
            ),
            ScanErrorKind::InvalidCharacter { byte } if byte.is_ascii_graphic() => {
                write!(f, "unexpected character '{}'", char::from(*byte))
            }
            ScanErrorKind::InvalidCharacter { byte } => {
                write!(f, "unexpected character 0x{byte:02X}")
            }
            ScanErrorKind::MalformedBitVectorLiteral { radix: None } => {
                write!(f, "invalid bit-vector literal, expecting 'x' or 'b'")
            }
            ScanErrorKind::MalformedBitVectorLiteral { radix: Some(2) } => {
                write!(f, "invalid empty bit-vector literal, expecting binary digits")
            }
            ScanErrorKind::MalformedBitVectorLiteral { radix: Some(_) } => {
                write!(f, "invalid empty bit-vector literal, expecting hexadecimal digits")
            }
            ScanErrorKind::MalformedNumeral => {
                write!(f, "invalid decimal literal, expecting digits after '.'")
            }
        }
    }
}

/// Error raised by [`Scanner::scan`](crate::Scanner::scan).
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input does not form a valid token.
    #[error("line {line} column {column}: {kind}")]
    Lexical {
        kind: ScanErrorKind,
        line: u32,
        column: u32,
    },
    /// The underlying reader failed.
    #[error("line {line} column {column}: failed to read input: {source}")]
    Io {
        #[source]
        source: io::Error,
        line: u32,
        column: u32,
    },
}

impl ScanError {
    /// Lexical error kind, or `None` for I/O failures.
    pub fn kind(&self) -> Option<ScanErrorKind> {
        match self {
            ScanError::Lexical { kind, .. } => Some(*kind),
            ScanError::Io { .. } => None,
        }
    }

    /// Line of the error (1-based).
    pub fn line(&self) -> u32 {
        match self {
            ScanError::Lexical { line, .. } | ScanError::Io { line, .. } => *line,
        }
    }

    /// Column of the error (1-based, in bytes).
    pub fn column(&self) -> u32 {
        match self {
            ScanError::Lexical { column, .. } | ScanError::Io { column, .. } => *column,
        }
    }

    /// Did the underlying reader fail?
    pub fn is_io(&self) -> bool {
        matches!(self, ScanError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_display_includes_position() {
        let err = ScanError::Lexical {
            kind: ScanErrorKind::InvalidCharacter { byte: b'[' },
            line: 3,
            column: 7,
        };
        assert_eq!(err.to_string(), "line 3 column 7: unexpected character '['");
        assert_eq!(err.line(), 3);
        assert_eq!(err.column(), 7);
        assert!(!err.is_io());
    }

    #[test]
    fn non_printable_bytes_are_shown_in_hex() {
        let kind = ScanErrorKind::InvalidCharacter { byte: 0xC3 };
        assert_eq!(kind.to_string(), "unexpected character 0xC3");
    }

    #[test]
    fn quote_messages_name_the_delimiter() {
        let string = ScanErrorKind::UnterminatedQuote { delimiter: b'"' };
        let symbol = ScanErrorKind::UnterminatedQuote { delimiter: b'|' };
        assert_eq!(string.to_string(), "unexpected end of string");
        assert!(symbol.to_string().contains("'|'"));
    }

    #[test]
    fn io_error_keeps_source() {
        let err = ScanError::Io {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "gone"),
            line: 1,
            column: 1,
        };
        assert!(err.is_io());
        assert_eq!(err.kind(), None);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("gone"));
    }
}
