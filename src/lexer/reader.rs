use std::{iter::Peekable, str::Chars};

use crate::Position;

/// Character returned by [`SourceReader::peek`] and [`SourceReader::advance`]
/// once the input is exhausted.
pub const SENTINEL: char = ' ';

/// Single-pass reader with one character of lookahead.
///
/// Tracks the position of the next character to be consumed and the text of
/// the line being scanned, which diagnostics quote back to the user.
#[derive(Debug, Clone)]
pub struct SourceReader<'a> {
    chars: Peekable<Chars<'a>>,
    file: &'a str,
    line: u32,
    column: u32,
    current_line: String,
    exhausted: bool,
}

impl<'a> SourceReader<'a> {
    pub fn new(source: &'a str, file: &'a str) -> SourceReader<'a> {
        SourceReader {
            chars: source.chars().peekable(),
            file,
            line: 1,
            column: 1,
            current_line: String::new(),
            exhausted: false,
        }
    }

    pub fn file(&self) -> &'a str {
        self.file
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn current_line(&self) -> &str {
        &self.current_line
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Returns the next character without consuming it, or [`SENTINEL`] once
    /// the input is exhausted.
    pub fn peek(&mut self) -> char {
        match self.chars.peek() {
            Some(&c) => c,
            None => {
                self.exhausted = true;
                SENTINEL
            }
        }
    }

    pub fn advance(&mut self) -> char {
        let Some(c) = self.chars.next() else {
            self.exhausted = true;
            return SENTINEL;
        };

        self.current_line.push(c);
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.current_line.clear();
        } else {
            self.column += 1;
        }

        c
    }

    /// Consumes everything up to, but not including, the next line break.
    pub fn skip_to_end_of_line(&mut self) -> String {
        let mut skipped = String::new();

        loop {
            let c = self.peek();
            if self.exhausted || c == '\n' || c == '\r' {
                return skipped;
            }
            skipped.push(self.advance());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{SourceReader, SENTINEL};
    use crate::Position;

    #[test]
    fn test_peek_does_not_consume() {
        let mut reader = SourceReader::new("ab", "test.ib");
        assert_eq!(reader.peek(), 'a');
        assert_eq!(reader.peek(), 'a');
        assert_eq!(reader.position(), Position::new(1, 1));
    }

    #[test]
    fn test_advance_tracks_columns_and_lines() {
        let mut reader = SourceReader::new("ab\ncd", "test.ib");
        assert_eq!(reader.advance(), 'a');
        assert_eq!(reader.advance(), 'b');
        assert_eq!(reader.position(), Position::new(1, 3));
        assert_eq!(reader.current_line(), "ab");

        assert_eq!(reader.advance(), '\n');
        assert_eq!(reader.position(), Position::new(2, 1));
        assert_eq!(reader.current_line(), "");

        assert_eq!(reader.advance(), 'c');
        assert_eq!(reader.current_line(), "c");
        assert_eq!(reader.position(), Position::new(2, 2));
    }

    #[test]
    fn test_multibyte_characters_count_as_one_column() {
        let mut reader = SourceReader::new("é✓x", "test.ib");
        reader.advance();
        reader.advance();
        assert_eq!(reader.position(), Position::new(1, 3));
        assert_eq!(reader.peek(), 'x');
    }

    #[test]
    fn test_exhaustion_is_not_an_error() {
        let mut reader = SourceReader::new("a", "test.ib");
        reader.advance();
        assert!(!reader.is_exhausted());

        assert_eq!(reader.peek(), SENTINEL);
        assert!(reader.is_exhausted());

        assert_eq!(reader.advance(), SENTINEL);
        assert_eq!(reader.advance(), SENTINEL);
        assert_eq!(reader.position(), Position::new(1, 2));
    }

    #[test]
    fn test_skip_to_end_of_line_stops_before_line_break() {
        let mut reader = SourceReader::new("// note\r\nnext", "test.ib");
        assert_eq!(reader.skip_to_end_of_line(), "// note");
        assert_eq!(reader.peek(), '\r');
        assert_eq!(reader.position(), Position::new(1, 8));
    }

    #[test]
    fn test_skip_to_end_of_line_stops_at_end_of_input() {
        let mut reader = SourceReader::new("// trailing", "test.ib");
        assert_eq!(reader.skip_to_end_of_line(), "// trailing");
        assert!(reader.is_exhausted());
    }
}
