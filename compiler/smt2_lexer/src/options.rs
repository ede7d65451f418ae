//! Scanner configuration.

/// Options fixed when a scanner is created.
///
/// `interactive` may later be changed by `Scanner::reset_input`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Treat the input as a live stream: read one byte at a time and wait
    /// through transient empty reads instead of failing.
    pub interactive: bool,
    /// Scan `-` followed by a digit as a negative numeral. When off, `-5` is
    /// the symbol `-5`, as in strict SMT-LIB2.
    pub signed_numerals: bool,
}

impl ScanOptions {
    /// Batch input, negative numerals accepted.
    pub const fn new() -> Self {
        Self {
            interactive: false,
            signed_numerals: true,
        }
    }

    /// Strict SMT-LIB2 lexing: `-` always starts a symbol.
    pub const fn smtlib2_compliant() -> Self {
        Self::new().with_signed_numerals(false)
    }

    #[must_use]
    pub const fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub const fn with_signed_numerals(mut self, signed_numerals: bool) -> Self {
        self.signed_numerals = signed_numerals;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}
