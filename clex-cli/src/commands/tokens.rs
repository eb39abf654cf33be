//! The `clex tokens` command.

use super::report_lex_error;
use crate::error::CliError;
use crate::output;
use crate::sink::{self, OutputFormat};
use crate::source;
use clex_lexer::{ScanOptions, Scanner};
use std::io::{self, Write};

/// Print the tokens of a file.
///
/// Tokens scanned before a failure are still printed, then the error is
/// reported.
pub fn run(
    file: &str,
    format: OutputFormat,
    options: ScanOptions,
    verbose: bool,
) -> Result<(), CliError> {
    let text = source::load(file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = write_scanned(&mut out, &text, file, format, options)?;

    if verbose {
        output::info(&format!(
            "{count} token(s) from {}",
            source::display_name(file)
        ));
    }
    Ok(())
}

/// Scan `text` and write every token before the first failure to `out`.
///
/// Returns the number of tokens written.
fn write_scanned(
    out: &mut impl Write,
    text: &str,
    file: &str,
    format: OutputFormat,
    options: ScanOptions,
) -> Result<usize, CliError> {
    let mut tokens = Vec::new();
    let mut failure = None;
    for item in Scanner::with_options(text, options) {
        match item {
            Ok(token) => tokens.push(token),
            Err(err) => failure = Some(err),
        }
    }

    sink::write_tokens(out, &tokens, format)?;
    out.flush()?;

    match failure {
        Some(err) => Err(report_lex_error(text, file, &err)),
        None => Ok(tokens.len()),
    }
}
