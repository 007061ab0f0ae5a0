//! Lexical analysis module.
//!
//! This module converts source text into a flat stream of tokens for the
//! parser. It handles:
//!
//! - Reading the source one character at a time with a single lookahead
//! - Recognition of keywords, identifiers, literals, operators and brackets
//! - Line breaks as EOL tokens, comments and other whitespace as nothing
//! - Token position tracking for error reporting
//! - Dumping the token stream for `--tokens`

pub mod dump;
pub mod lexer;
pub mod reader;
pub mod tokens;
