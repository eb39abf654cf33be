//! Token definitions.

use clex_common::{Location, Span};
use serde::Serialize;
use std::fmt;

/// Reserved words, recognized only in keyword position.
pub const KEYWORDS: [&str; 32] = [
    "if", "do", "int", "for", "auto", "else", "long", "char", "enum", "void", "case", "goto",
    "short", "float", "union", "const", "while", "break", "double", "switch", "struct", "signed",
    "extern", "static", "sizeof", "return", "typedef", "default", "unsigned", "register",
    "volatile", "continue",
];

/// Operators and punctuation, grouped by length. Longer groups are tried first.
pub(crate) const OPERATORS_3: [&str; 2] = [">>=", "<<="];

pub(crate) const OPERATORS_2: [&str; 19] = [
    "==", "!=", ">=", "<=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "++", "--", "->",
    "&&", "||", ">>", "<<",
];

pub(crate) const OPERATORS_1: [u8; 24] = [
    b'+', b'-', b'*', b'/', b'%', b'>', b'<', b'!', b'&', b'|', b'~', b'^', b'=', b',', b'.',
    b';', b':', b'?', b'(', b')', b'[', b']', b'{', b'}',
];

/// Returns true if `word` is a reserved word.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns true if `byte` can start an operator or punctuation token.
pub fn is_operator_start(byte: u8) -> bool {
    OPERATORS_1.contains(&byte)
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Keyword,
    Operator,
    StringLiteral,
    Identifier,
    Number,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified, positioned slice of the source buffer.
///
/// The lexeme borrows from the buffer that was scanned, so it is never empty
/// and `span.len() == lexeme.len()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based byte column of the first character.
    pub column: u32,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, location: Location, span: Span) -> Self {
        debug_assert!(!lexeme.is_empty(), "empty lexeme");
        debug_assert_eq!(span.len(), lexeme.len());
        Self {
            kind,
            lexeme,
            line: location.line,
            column: location.column,
            span,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.kind == TokenKind::Operator && self.lexeme == op
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.location(), self.kind, self.lexeme)
    }
}
