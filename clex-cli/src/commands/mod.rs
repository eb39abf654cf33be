//! CLI command implementations.

pub mod check;
pub mod tokens;

use crate::error::CliError;
use crate::source;
use clex_diagnostic::emit;
use clex_lexer::LexError;

/// Render `err` against its source and turn it into the command's failure.
fn report_lex_error(text: &str, path: &str, err: &LexError) -> CliError {
    let name = source::display_name(path);
    if let Err(render_err) = emit(text, name, &err.to_diagnostic()) {
        tracing::warn!(error = %render_err, "failed to render diagnostic");
        eprintln!("{name}: {err}");
    }
    CliError::Lex {
        path: name.to_string(),
        line: err.line(),
    }
}
