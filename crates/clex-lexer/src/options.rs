//! Scanner configuration.

/// How reserved words are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMatch {
    /// A keyword must span the whole identifier run: `intVal` is one identifier.
    #[default]
    WholeWord,
    /// The longest keyword that prefixes the remaining input wins, with no
    /// boundary check: `intVal` is `int` followed by `Val`.
    Prefix,
}

/// Digits accepted after a `0x` / `0X` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HexDigits {
    /// `[0-9a-fA-F]`.
    #[default]
    Full,
    /// `[0-7]`, as the legacy scanner accepted.
    Octal,
}

impl HexDigits {
    pub fn accepts(self, byte: u8) -> bool {
        match self {
            HexDigits::Full => byte.is_ascii_hexdigit(),
            HexDigits::Octal => matches!(byte, b'0'..=b'7'),
        }
    }
}

/// Scanner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub keyword_match: KeywordMatch,
    pub hex_digits: HexDigits,
}

impl ScanOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that reproduce the legacy scanner's keyword and hex rules.
    pub fn compat() -> Self {
        Self {
            keyword_match: KeywordMatch::Prefix,
            hex_digits: HexDigits::Octal,
        }
    }

    /// Set the keyword matching rule.
    pub fn keyword_match(mut self, keyword_match: KeywordMatch) -> Self {
        self.keyword_match = keyword_match;
        self
    }

    /// Set the digits accepted in hex literals.
    pub fn hex_digits(mut self, hex_digits: HexDigits) -> Self {
        self.hex_digits = hex_digits;
        self
    }
}
