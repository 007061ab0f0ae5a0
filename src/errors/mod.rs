//! Error types for lexical analysis.
//!
//! Lexical errors are values, not process exits. Each one carries:
//!
//! - The kind of error and the offending character or delimiter
//! - The file name and 1-based position of the error
//! - The offending line's text, used to render a caret diagnostic

pub mod errors;

#[cfg(test)]
mod tests;
