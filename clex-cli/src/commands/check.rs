//! The `clex check` command.

use super::report_lex_error;
use crate::error::CliError;
use crate::output;
use crate::source;
use clex_lexer::{ScanOptions, Scanner, TokenKind};

/// Tokenize a file and report only whether it succeeded.
/// 对文件进行词法分析，只报告是否成功。
pub fn run(file: &str, options: ScanOptions, verbose: bool) -> Result<(), CliError> {
    let text = source::load(file)?;

    let tokens = Scanner::with_options(&text, options)
        .tokenize()
        .map_err(|err| report_lex_error(&text, file, &err))?;

    if verbose {
        let count = |kind: TokenKind| tokens.iter().filter(|t| t.kind == kind).count();
        for kind in [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::StringLiteral,
            TokenKind::Operator,
        ] {
            output::info(&format!("{kind}: {}", count(kind)));
        }
    }

    output::success(&format!("OK - {} token(s)", tokens.len()));
    Ok(())
}
