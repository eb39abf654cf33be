//! CLI errors.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' failed to tokenize at line {line}")]
    Lex { path: String, line: u32 },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    #[error("cannot encode tokens: {0}")]
    Json(#[from] serde_json::Error),
}
