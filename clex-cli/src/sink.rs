//! Writing token streams.

use crate::error::CliError;
use clap::ValueEnum;
use clex_lexer::Token;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `line:column<TAB>kind<TAB>lexeme`, one token per line.
    #[default]
    Text,
    /// A pretty-printed JSON array.
    Json,
}

/// Write `tokens` to `out` in source order.
pub fn write_tokens(
    out: &mut impl Write,
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}\t{}\t{}", token.location(), token.kind, token.lexeme)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
