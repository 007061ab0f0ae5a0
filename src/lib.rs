#![allow(clippy::module_inception)]

use std::{fmt::Display, io::Write, sync::Once};

use crate::{
    color::{Fg, Red, Yellow},
    errors::errors::{Error, ErrorTip},
};

pub mod args;
pub mod color;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

pub use lexer::lexer::{tokenize, tokenize_recovering};
pub use source::Source;

/// A 1-based line and column in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g. `RUST_LOG=iblang=trace`.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Writes a lexical error the way the command line shows it:
///
/// ```text
/// ./example.ib:3:9 print(1 # 2)
///                          ^ Unhandled rune!
/// help: ...
/// ```
pub fn display_error<W: Write>(out: &mut W, error: &Error) -> std::io::Result<()> {
    for line in error.to_string().lines() {
        writeln!(out, "{}", Fg(Red, line))?;
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        writeln!(out, "{}: {}", Fg(Yellow, "help"), tip)?;
    }

    Ok(())
}
