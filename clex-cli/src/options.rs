//! Scanner flags shared by every command.

use clap::{Args, ValueEnum};
use clex_lexer::{HexDigits, KeywordMatch, ScanOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KeywordsArg {
    /// A keyword must be the whole identifier.
    WholeWord,
    /// Any keyword prefix is split off.
    Prefix,
}

impl From<KeywordsArg> for KeywordMatch {
    fn from(arg: KeywordsArg) -> Self {
        match arg {
            KeywordsArg::WholeWord => KeywordMatch::WholeWord,
            KeywordsArg::Prefix => KeywordMatch::Prefix,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HexDigitsArg {
    /// 0-9, a-f, A-F.
    Full,
    /// 0-7 only.
    Octal,
}

impl From<HexDigitsArg> for HexDigits {
    fn from(arg: HexDigitsArg) -> Self {
        match arg {
            HexDigitsArg::Full => HexDigits::Full,
            HexDigitsArg::Octal => HexDigits::Octal,
        }
    }
}

/// Flags that shape [`ScanOptions`].
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Keyword matching rule.
    #[arg(long, value_enum)]
    keywords: Option<KeywordsArg>,

    /// Digits accepted after `0x`.
    #[arg(long, value_enum)]
    hex_digits: Option<HexDigitsArg>,

    /// Start from the legacy scanner's rules; explicit flags still override.
    #[arg(long)]
    compat: bool,
}

impl ScanArgs {
    pub fn options(&self) -> ScanOptions {
        let mut options = if self.compat {
            ScanOptions::compat()
        } else {
            ScanOptions::default()
        };
        if let Some(keywords) = self.keywords {
            options = options.keyword_match(keywords.into());
        }
        if let Some(hex_digits) = self.hex_digits {
            options = options.hex_digits(hex_digits.into());
        }
        options
    }
}
