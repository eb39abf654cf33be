//! The scanner: turns a source buffer into an ordered token sequence.
//! 扫描器：将源码缓冲区转换为有序的 token 序列。

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::options::{KeywordMatch, ScanOptions};
use crate::token::{is_keyword, is_operator_start, Token, TokenKind, KEYWORDS, OPERATORS_2, OPERATORS_3};
use clex_common::{BytePos, Span};
use tracing::{debug, trace};

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Reject buffers whose offsets would not fit in a `BytePos`.
fn check_source_len(len: usize) -> Result<(), LexError> {
    if len > BytePos::MAX_OFFSET {
        return Err(LexError::SourceTooLarge { len });
    }
    Ok(())
}

/// Tokenize `source` with default options.
/// 使用默认选项对 `source` 进行词法分析。
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::new(source).tokenize()
}

/// Tokenize `source` with the given options.
pub fn tokenize_with(source: &str, options: ScanOptions) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::with_options(source, options).tokenize()
}

/// The tokenization engine.
/// 词法分析引擎。
///
/// A scanner owns its cursor, so independent scanners may run on different
/// buffers at the same time. Scanning stops at the first error: as an
/// iterator it yields that error once and then ends.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    options: ScanOptions,
    failed: bool,
}

impl<'src> Scanner<'src> {
    /// Create a scanner over `source` with default options.
    /// 使用默认选项为 `source` 创建扫描器。
    pub fn new(source: &'src str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'src str, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            failed: false,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Rewind to the start of the buffer so it can be scanned again.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.failed = false;
    }

    /// Scan the whole buffer.
    pub fn tokenize(mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        debug!(
            tokens = tokens.len(),
            bytes = self.cursor.source().len(),
            lines = self.cursor.line(),
            "tokenized buffer"
        );
        Ok(tokens)
    }

    /// Scan one token, skipping any trivia before it.
    ///
    /// Returns `Ok(None)` once only trivia remains.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        check_source_len(self.cursor.source().len())?;
        self.skip_trivia()?;
        if self.cursor.is_eof() {
            return Ok(None);
        }

        let location = self.cursor.location();
        let (kind, len) = self.classify()?;
        let (lexeme, span) = self.cursor.slice(len);
        self.cursor.advance(len);

        trace!(kind = %kind, lexeme, line = location.line, "token");
        Ok(Some(Token::new(kind, lexeme, location, span)))
    }

    /// Skip whitespace, line comments and block comments.
    /// 跳过空白、行注释和块注释。
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match (self.cursor.first(), self.cursor.second()) {
                (Some(b), _) if is_whitespace(b) => {
                    let len = self.cursor.count_while(0, is_whitespace);
                    self.cursor.advance(len);
                }
                (Some(b'/'), Some(b'/')) => {
                    // Through the newline, or to the end of the buffer.
                    let rest = self.cursor.rest();
                    let len = rest
                        .iter()
                        .position(|&b| b == b'\n')
                        .map_or(rest.len(), |nl| nl + 1);
                    self.cursor.advance(len);
                }
                (Some(b'/'), Some(b'*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let rest = self.cursor.rest();
        match rest[2..].windows(2).position(|w| w == b"*/") {
            Some(close) => {
                self.cursor.advance(2 + close + 2);
                Ok(())
            }
            None => Err(LexError::UnterminatedBlockComment {
                line: self.cursor.line(),
                span: self.span_to_end(),
            }),
        }
    }

    /// Pick the token category at the cursor and measure the lexeme.
    ///
    /// Letters win over digits, digits over operators, operators over quotes.
    fn classify(&self) -> Result<(TokenKind, usize), LexError> {
        let Some(first) = self.cursor.first() else {
            return Err(self.unclassifiable());
        };

        match first {
            b if is_ident_start(b) => self.keyword_or_identifier(),
            b if is_digit(b) => self.number(),
            b'.' if self.cursor.second().is_some_and(is_digit) => self.number(),
            b if is_operator_start(b) => Ok((TokenKind::Operator, self.operator())),
            b'"' => self.string_literal(),
            _ => Err(self.unclassifiable()),
        }
    }

    fn keyword_or_identifier(&self) -> Result<(TokenKind, usize), LexError> {
        let run = self.cursor.count_while(0, is_ident_continue);
        if run == 0 {
            return Err(LexError::MalformedIdentifier {
                line: self.cursor.line(),
                span: self.span_of(1),
            });
        }
        let (word, _) = self.cursor.slice(run);

        let token = match self.options.keyword_match {
            KeywordMatch::WholeWord if is_keyword(word) => (TokenKind::Keyword, run),
            KeywordMatch::WholeWord => (TokenKind::Identifier, run),
            KeywordMatch::Prefix => KEYWORDS
                .iter()
                .filter(|kw| word.starts_with(*kw))
                .map(|kw| kw.len())
                .max()
                .map_or((TokenKind::Identifier, run), |len| (TokenKind::Keyword, len)),
        };
        Ok(token)
    }

    /// Longest numeric form at the cursor; ties go to the earlier form.
    fn number(&self) -> Result<(TokenKind, usize), LexError> {
        let candidates = [
            self.decimal_len(),
            self.radix_len(b'x', |b| self.options.hex_digits.accepts(b)),
            self.radix_len(b'b', |b| matches!(b, b'0' | b'1')),
            self.cursor.count_while(0, is_digit),
        ];

        let mut best = 0;
        for len in candidates {
            if len > best {
                best = len;
            }
        }

        if best == 0 {
            return Err(LexError::MalformedNumericLiteral {
                line: self.cursor.line(),
                span: self.span_of(1),
            });
        }
        Ok((TokenKind::Number, best))
    }

    /// `[0-9]+\.?[0-9]*` or `\.[0-9]+`, then an optional `[eE][+-]?[0-9]+`.
    fn decimal_len(&self) -> usize {
        let cursor = &self.cursor;
        let int = cursor.count_while(0, is_digit);
        let mut len = int;

        if cursor.peek(len) == Some(b'.') {
            let frac = cursor.count_while(len + 1, is_digit);
            if int > 0 || frac > 0 {
                len += 1 + frac;
            }
        }
        if len == 0 {
            return 0;
        }

        if matches!(cursor.peek(len), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(cursor.peek(len + 1), Some(b'+' | b'-')));
            let exp = cursor.count_while(len + 1 + sign, is_digit);
            if exp > 0 {
                len += 1 + sign + exp;
            }
        }
        len
    }

    /// `0` + `marker` (either case) + one or more digits accepted by `digit`.
    fn radix_len(&self, marker: u8, digit: impl Fn(u8) -> bool) -> usize {
        let prefixed = self.cursor.first() == Some(b'0')
            && self
                .cursor
                .second()
                .is_some_and(|b| b.to_ascii_lowercase() == marker);
        if !prefixed {
            return 0;
        }
        match self.cursor.count_while(2, digit) {
            0 => 0,
            digits => 2 + digits,
        }
    }

    fn operator(&self) -> usize {
        let rest = self.cursor.rest();
        OPERATORS_3
            .iter()
            .chain(OPERATORS_2.iter())
            .find(|op| rest.starts_with(op.as_bytes()))
            .map_or(1, |op| op.len())
    }

    /// Up to the first unescaped closing quote. A backslash escapes the next byte.
    fn string_literal(&self) -> Result<(TokenKind, usize), LexError> {
        let rest = self.cursor.rest();
        let mut i = 1;
        while i < rest.len() {
            match rest[i] {
                b'\\' => i += 2,
                b'"' => return Ok((TokenKind::StringLiteral, i + 1)),
                _ => i += 1,
            }
        }
        Err(LexError::UnterminatedStringLiteral {
            line: self.cursor.line(),
            span: self.span_to_end(),
        })
    }

    fn unclassifiable(&self) -> LexError {
        let ch = self.cursor.current_char().unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::UnclassifiableCharacter {
            ch,
            line: self.cursor.line(),
            span: self.span_of(ch.len_utf8()),
        }
    }

    fn span_of(&self, len: usize) -> Span {
        self.cursor.slice(len).1
    }

    fn span_to_end(&self) -> Span {
        Span::from_usize(self.cursor.pos(), self.cursor.source().len())
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
