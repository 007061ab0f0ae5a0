//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_CHAR_TOKEN!` - Consumes one character and wraps it in a token

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenValue::Identifier("x".to_string()), "x".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($value:expr, $lexeme:expr, $position:expr) => {
        Token {
            value: $value,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Consumes the reader's next character and creates a single-character token
/// of the given `TokenValue` variant.
///
/// # Example
///
/// ```ignore
/// MK_CHAR_TOKEN!(reader, TokenValue::Bracket, position)
/// ```
#[macro_export]
macro_rules! MK_CHAR_TOKEN {
    ($reader:expr, $variant:path, $position:expr) => {{
        let c = $reader.advance();
        MK_TOKEN!($variant(c), c.to_string(), $position)
    }};
}
