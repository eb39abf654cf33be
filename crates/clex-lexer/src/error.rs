//! Lexer errors.

use clex_common::Span;
use clex_diagnostic::{Diagnostic, ErrorCode, Label};
use thiserror::Error;

/// A fatal scanning failure. The run stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("line {line}: unexpected character {ch:?}")]
    UnclassifiableCharacter { ch: char, line: u32, span: Span },

    #[error("line {line}: unterminated string literal")]
    UnterminatedStringLiteral { line: u32, span: Span },

    #[error("line {line}: unterminated block comment")]
    UnterminatedBlockComment { line: u32, span: Span },

    #[error("line {line}: malformed numeric literal")]
    MalformedNumericLiteral { line: u32, span: Span },

    #[error("line {line}: malformed identifier")]
    MalformedIdentifier { line: u32, span: Span },

    /// Raised before any scanning; offsets past `BytePos::MAX_OFFSET` would wrap.
    #[error("source is {len} bytes, more than a span can address")]
    SourceTooLarge { len: usize },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnclassifiableCharacter { span, .. }
            | LexError::UnterminatedStringLiteral { span, .. }
            | LexError::UnterminatedBlockComment { span, .. }
            | LexError::MalformedNumericLiteral { span, .. }
            | LexError::MalformedIdentifier { span, .. } => *span,
            LexError::SourceTooLarge { .. } => Span::default(),
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            LexError::UnclassifiableCharacter { line, .. }
            | LexError::UnterminatedStringLiteral { line, .. }
            | LexError::UnterminatedBlockComment { line, .. }
            | LexError::MalformedNumericLiteral { line, .. }
            | LexError::MalformedIdentifier { line, .. } => *line,
            LexError::SourceTooLarge { .. } => 1,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnclassifiableCharacter { .. } => ErrorCode::UnexpectedCharacter,
            LexError::UnterminatedStringLiteral { .. } => ErrorCode::UnterminatedString,
            LexError::UnterminatedBlockComment { .. } => ErrorCode::UnterminatedComment,
            LexError::MalformedNumericLiteral { .. } => ErrorCode::InvalidNumber,
            LexError::MalformedIdentifier { .. } => ErrorCode::InvalidIdentifier,
            LexError::SourceTooLarge { .. } => ErrorCode::SourceTooLarge,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span();
        let (message, label) = match self {
            LexError::UnclassifiableCharacter { ch, .. } => (
                format!("unexpected character {ch:?}"),
                "no token can start here",
            ),
            LexError::UnterminatedStringLiteral { .. } => (
                "unterminated string literal".to_string(),
                "string starts here",
            ),
            LexError::UnterminatedBlockComment { .. } => (
                "unterminated block comment".to_string(),
                "comment starts here",
            ),
            LexError::MalformedNumericLiteral { .. } => (
                "malformed numeric literal".to_string(),
                "no numeric form matches",
            ),
            LexError::MalformedIdentifier { .. } => (
                "malformed identifier".to_string(),
                "no identifier form matches",
            ),
            LexError::SourceTooLarge { len } => (
                format!("source is {len} bytes, more than a span can address"),
                "scanning stops before the first byte",
            ),
        };

        let label_span = match self {
            // Point at the opening delimiter rather than the whole rest of the file.
            LexError::UnterminatedStringLiteral { .. } => {
                Span::from_usize(span.start.to_usize(), span.start.to_usize() + 1)
            }
            LexError::UnterminatedBlockComment { .. } => {
                Span::from_usize(span.start.to_usize(), span.start.to_usize() + 2)
            }
            _ => span,
        };

        let diagnostic = Diagnostic::error(span, message)
            .with_code(self.code())
            .with_label(Label::new(label_span, label));

        match self {
            LexError::UnterminatedStringLiteral { line, .. } => diagnostic.with_note(format!(
                "the string opened on line {line} runs to the end of the input"
            )),
            LexError::UnterminatedBlockComment { line, .. } => diagnostic.with_note(format!(
                "the comment opened on line {line} runs to the end of the input"
            )),
            _ => diagnostic,
        }
    }
}
