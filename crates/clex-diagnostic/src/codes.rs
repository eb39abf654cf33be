//! Error codes for clex diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,
    InvalidNumber,
    InvalidIdentifier,
    SourceTooLarge,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::UnterminatedComment => "E0003",
            ErrorCode::InvalidNumber => "E0004",
            ErrorCode::InvalidIdentifier => "E0005",
            ErrorCode::SourceTooLarge => "E0006",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "character cannot start any token",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::UnterminatedComment => "block comment is not terminated",
            ErrorCode::InvalidNumber => "digit sequence matched no numeric literal form",
            ErrorCode::InvalidIdentifier => "letter sequence matched no identifier form",
            ErrorCode::SourceTooLarge => "source buffer is too large to address",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnexpectedCharacter => {
                Some("remove the character or place it inside a string literal")
            }
            ErrorCode::UnterminatedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::UnterminatedComment => Some("add `*/` to close the comment"),
            ErrorCode::SourceTooLarge => Some("split the input into smaller files"),
            // Both of these point at a gap in the scanner, not at the input.
            ErrorCode::InvalidNumber | ErrorCode::InvalidIdentifier => None,
        }
    }
}
