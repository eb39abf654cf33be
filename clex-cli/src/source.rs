//! Loading source buffers.

use crate::error::CliError;
use std::{fs, io};

/// Path that selects standard input.
pub const STDIN: &str = "-";

/// Read the whole of `path` (or stdin for `-`) into memory.
pub fn load(path: &str) -> Result<String, CliError> {
    let result = if path == STDIN {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Name used for `path` in diagnostics.
pub fn display_name(path: &str) -> &str {
    if path == STDIN { "<stdin>" } else { path }
}
