//! Tracing setup.
//!
//! The subscriber is only installed when `CLEX_LOG` or `RUST_LOG` is set, e.g.
//!
//! ```bash
//! CLEX_LOG=clex_lexer=trace clex tokens main.c
//! ```
//!
//! Output goes to stderr so it never mixes with the token stream on stdout.

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CLEX_LOG";

/// `CLEX_LOG` takes precedence over `RUST_LOG`. Returns `None` when neither is set.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        Some(EnvFilter::builder().parse_lossy(val))
    } else if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        Some(EnvFilter::from_default_env())
    } else {
        None
    }
}

/// Initialise the global tracing subscriber.
pub fn init() {
    let Some(filter) = build_filter() else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
