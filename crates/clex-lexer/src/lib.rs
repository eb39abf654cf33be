//! Lexical analysis for a C-like language.
//! 类 C 语言的词法分析模块。
//!
//! The [`Scanner`] walks a source buffer and produces an ordered sequence of
//! [`Token`]s: keywords, operators and punctuation, string literals,
//! identifiers, and numbers. Whitespace, `//` line comments and `/* */` block
//! comments are skipped. The first position that cannot be classified stops
//! the run with a [`LexError`].
//! 扫描器将源码缓冲区转换为有序的 token 序列，遇到第一个无法分类的位置即停止。
//!
//! ```
//! use clex_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x <<= 2; // shift").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Number, TokenKind::Operator]
//! );
//! assert_eq!(tokens[1].lexeme, "<<=");
//! ```

mod cursor;
mod error;
mod options;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use error::LexError;
pub use options::{HexDigits, KeywordMatch, ScanOptions};
pub use scanner::{tokenize, tokenize_with, Scanner};
pub use token::{is_keyword, is_operator_start, Token, TokenKind, KEYWORDS};
