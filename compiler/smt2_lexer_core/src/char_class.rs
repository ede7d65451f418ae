//! Byte classification table for SMT-LIB2 scanning.
//!
//! Every byte value maps to exactly one [`CharClass`]. The table is built at
//! compile time and shared read-only by every scanner, so dispatch on the hot
//! path is a single indexed load followed by one `match`.
//!
//! # Symbol Characters
//!
//! A simple symbol is a non-empty run of letters, digits and the punctuation
//! `~ ! @ $ % ^ & * _ - + = < > . ? /` that does not start with a digit.
//! Letters of both cases are accepted and preserved. `-` gets its own class
//! because it may also introduce a negative numeral.

/// Category of a single input byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// Space, `\t`, `\r`.
    Whitespace,
    /// `\n`. Kept apart from whitespace so line counting has one source.
    Newline,
    /// `0`-`9`.
    Digit,
    /// Letters and the symbol punctuation set, excluding `-`.
    SymbolChar,
    /// `-`: symbol character or sign of a numeral.
    Minus,
    /// `:`: introduces a keyword.
    Colon,
    /// `"`: string delimiter.
    DoubleQuote,
    /// `|`: quoted symbol delimiter.
    Pipe,
    /// `;`: line comment.
    Semicolon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `#`: bit-vector literal prefix.
    Hash,
    /// Anything that cannot start or continue a token: control bytes,
    /// non-ASCII bytes, and ASCII punctuation outside the symbol set.
    Other,
}

/// Punctuation allowed in simple symbols (besides `-`, which has its own class).
const SYMBOL_PUNCTUATION: &[u8] = b"~!@$%^&*_+=<>.?/";

/// Byte-to-class lookup table, indexed by the raw byte value.
pub static CLASS_TABLE: [CharClass; 256] = build_table();

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::Other; 256];

    table[b' ' as usize] = CharClass::Whitespace;
    table[b'\t' as usize] = CharClass::Whitespace;
    table[b'\r' as usize] = CharClass::Whitespace;
    table[b'\n' as usize] = CharClass::Newline;

    let mut b = b'0';
    while b <= b'9' {
        table[b as usize] = CharClass::Digit;
        b += 1;
    }
    b = b'a';
    while b <= b'z' {
        table[b as usize] = CharClass::SymbolChar;
        table[(b - b'a' + b'A') as usize] = CharClass::SymbolChar;
        b += 1;
    }

    let mut i = 0;
    while i < SYMBOL_PUNCTUATION.len() {
        table[SYMBOL_PUNCTUATION[i] as usize] = CharClass::SymbolChar;
        i += 1;
    }

    table[b'-' as usize] = CharClass::Minus;
    table[b':' as usize] = CharClass::Colon;
    table[b'"' as usize] = CharClass::DoubleQuote;
    table[b'|' as usize] = CharClass::Pipe;
    table[b';' as usize] = CharClass::Semicolon;
    table[b'(' as usize] = CharClass::LeftParen;
    table[b')' as usize] = CharClass::RightParen;
    table[b'#' as usize] = CharClass::Hash;
    table
}

impl CharClass {
    /// Classify a byte.
    #[inline]
    pub fn of(byte: u8) -> Self {
        CLASS_TABLE[byte as usize]
    }

    /// Can this class begin a simple symbol?
    ///
    /// Digits cannot, and `-` is decided by the scanner (it may be a sign).
    #[inline]
    pub fn is_symbol_start(self) -> bool {
        matches!(self, CharClass::SymbolChar)
    }

    /// Can this class appear after the first byte of a simple symbol or keyword?
    #[inline]
    pub fn is_symbol_continue(self) -> bool {
        matches!(
            self,
            CharClass::SymbolChar | CharClass::Digit | CharClass::Minus
        )
    }

    /// Whitespace or newline.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, CharClass::Whitespace | CharClass::Newline)
    }
}
