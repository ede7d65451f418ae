//! Token kinds and the borrowed view of the last scanned token.

use num_rational::BigRational;

/// Kind of a scanned token.
///
/// Payload-free; the payload of the last token is read from the scanner
/// (see [`Token`]). `None` is never returned by `scan()`: it is the kind
/// reported before the first token and after an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    None = 0,
    LeftParen = 1,
    RightParen,
    Keyword,
    Symbol,
    String,
    Int,
    BitVector,
    Float,
    EndOfInput,
}

impl TokenKind {
    /// Human-readable name, used in diagnostics and token dumps.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::None => "none",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Keyword => "keyword",
            TokenKind::Symbol => "symbol",
            TokenKind::String => "string",
            TokenKind::Int => "integer",
            TokenKind::BitVector => "bit-vector",
            TokenKind::Float => "decimal",
            TokenKind::EndOfInput => "end of input",
        }
    }

    /// Does this kind carry a numeric value?
    pub fn is_numeric(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::BitVector)
    }
}

/// The last scanned token with its payload.
///
/// Borrowed from the scanner, so it cannot be held across the next call to
/// `scan()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    LeftParen,
    RightParen,
    /// Keyword text, including the leading `:`.
    Keyword(&'a str),
    /// Symbol text. For `|quoted|` symbols, the text between the bars.
    Symbol(&'a str),
    /// String contents with `""` already collapsed to `"`.
    String(&'a [u8]),
    Int(&'a BigRational),
    /// Exact value of a decimal such as `0.5`.
    Float(&'a BigRational),
    /// Value and width in bits of `#b...` or `#x...`.
    BitVector { value: &'a BigRational, width: u32 },
    EndOfInput,
}

impl Token<'_> {
    /// Kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Symbol(_) => TokenKind::Symbol,
            Token::String(_) => TokenKind::String,
            Token::Int(_) => TokenKind::Int,
            Token::Float(_) => TokenKind::Float,
            Token::BitVector { .. } => TokenKind::BitVector,
            Token::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_start_at_none() {
        assert_eq!(TokenKind::None as u8, 0);
        assert_eq!(TokenKind::LeftParen as u8, 1);
        assert_eq!(TokenKind::RightParen as u8, 2);
        assert_eq!(TokenKind::Float as u8, 8);
        assert_eq!(TokenKind::EndOfInput as u8, 9);
    }

    #[test]
    fn kind_is_one_byte() {
        assert_eq!(std::mem::size_of::<TokenKind>(), 1);
    }

    #[test]
    fn numeric_kinds() {
        assert!(TokenKind::Int.is_numeric());
        assert!(TokenKind::Float.is_numeric());
        assert!(TokenKind::BitVector.is_numeric());
        assert!(!TokenKind::String.is_numeric());
        assert!(!TokenKind::Symbol.is_numeric());
    }

    #[test]
    fn token_reports_its_kind() {
        let one = BigRational::from_integer(1.into());
        assert_eq!(Token::Keyword(":named").kind(), TokenKind::Keyword);
        assert_eq!(Token::String(b"hi").kind(), TokenKind::String);
        assert_eq!(
            Token::BitVector {
                value: &one,
                width: 1
            }
            .kind(),
            TokenKind::BitVector
        );
    }
}
