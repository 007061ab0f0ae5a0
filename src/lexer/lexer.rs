use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_CHAR_TOKEN, MK_TOKEN,
};

use super::{
    reader::SourceReader,
    tokens::{KeywordKind, Literal, Token, TokenKind, TokenValue},
};

/// File name used when the caller does not provide one.
pub const DEFAULT_FILE: &str = "shell";

pub struct Lexer<'a> {
    reader: SourceReader<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(reader: SourceReader<'a>) -> Lexer<'a> {
        Lexer {
            reader,
            tokens: vec![],
        }
    }

    pub fn file(&self) -> &'a str {
        self.reader.file()
    }

    /// Appends a token, dropping an EOL that directly follows another EOL.
    pub fn push(&mut self, token: Token) {
        let repeated_eol = token.kind() == TokenKind::EOL
            && matches!(self.tokens.last(), Some(last) if last.kind() == TokenKind::EOL);

        if repeated_eol {
            return;
        }

        trace!(file = self.file(), position = %token.position, token = %token, "token");
        self.tokens.push(token);
    }

    /// Scans one token.
    ///
    /// Returns `Ok(None)` for a run of spaces or tabs that ends without a line
    /// break, and an EOF token once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        let start = self.reader.position();
        let peek = self.reader.peek();

        if self.reader.is_exhausted() {
            return Ok(Some(MK_TOKEN!(TokenValue::EOF, String::new(), start)));
        }

        if peek.is_whitespace() {
            return Ok(self.whitespace());
        }

        match peek {
            '/' => self.comment(),
            '"' | '\'' => self.quoted(peek, start).map(Some),
            c if c.is_ascii_digit() => Ok(Some(self.number(start))),
            c if is_identifier_start(c) => Ok(Some(self.word(start))),
            c if is_operator(c) => Ok(Some(MK_CHAR_TOKEN!(self.reader, TokenValue::Operator, start))),
            c if is_bracket(c) => Ok(Some(MK_CHAR_TOKEN!(self.reader, TokenValue::Bracket, start))),
            c => Err(self.error(ErrorImpl::UnhandledCharacter { character: c })),
        }
    }

    /// Discards the rest of the current line after an error.
    pub fn resync(&mut self) {
        let skipped = self.reader.skip_to_end_of_line();
        debug!(file = self.file(), position = %self.reader.position(), skipped = %skipped, "resynchronised after lexical error");
    }

    /// Terminates the stream with the EOF sentinel and hands it over.
    pub fn finish(mut self) -> Vec<Token> {
        let position = self.reader.position();
        self.tokens.push(MK_TOKEN!(TokenValue::EOF, String::new(), position));
        self.tokens
    }

    fn whitespace(&mut self) -> Option<Token> {
        loop {
            let c = self.reader.peek();
            if self.reader.is_exhausted() || !c.is_whitespace() {
                return None;
            }

            let position = self.reader.position();
            if self.reader.advance() == '\n' {
                return Some(MK_TOKEN!(TokenValue::EOL, String::from("\n"), position));
            }
        }
    }

    fn comment(&mut self) -> Result<Option<Token>, Error> {
        self.reader.advance();

        let next = self.reader.peek();
        if self.reader.is_exhausted() || next != '/' {
            return Err(self.error(ErrorImpl::MalformedComment));
        }

        let comment = self.reader.skip_to_end_of_line();
        trace!(file = self.file(), comment = %comment, "skipped comment");

        self.next_token()
    }

    fn quoted(&mut self, delimiter: char, start: Position) -> Result<Token, Error> {
        let mut text = String::from(self.reader.advance());

        loop {
            let c = self.reader.peek();
            if self.reader.is_exhausted() || c == '\n' || c == '\r' {
                return Err(Error::new(
                    ErrorImpl::UnterminatedLiteral { delimiter },
                    start,
                    self.file(),
                    String::from(self.reader.current_line()),
                ));
            }

            text.push(self.reader.advance());
            if c == delimiter {
                break;
            }
        }

        let literal = if delimiter == '"' {
            Literal::Str(text.clone())
        } else {
            Literal::Char(text.clone())
        };

        Ok(MK_TOKEN!(TokenValue::Literal(literal), text, start))
    }

    fn number(&mut self, start: Position) -> Token {
        let mut digits = String::new();
        while self.reader.peek().is_ascii_digit() {
            digits.push(self.reader.advance());
        }

        MK_TOKEN!(TokenValue::Literal(Literal::Integer(digits.clone())), digits, start)
    }

    fn word(&mut self, start: Position) -> Token {
        let mut word = String::new();
        while is_identifier_rest(self.reader.peek()) {
            word.push(self.reader.advance());
        }

        let value = if let Some(keyword) = KeywordKind::lookup(&word) {
            TokenValue::Keyword(keyword)
        } else if word.eq_ignore_ascii_case("true") {
            TokenValue::Literal(Literal::Bool(true))
        } else if word.eq_ignore_ascii_case("false") {
            TokenValue::Literal(Literal::Bool(false))
        } else {
            TokenValue::Identifier(word.clone())
        };

        MK_TOKEN!(value, word, start)
    }

    /// Builds an error at the reader's position, quoting the line up to and
    /// including the character under the caret.
    fn error(&mut self, error_impl: ErrorImpl) -> Error {
        let mut line_text = String::from(self.reader.current_line());

        let c = self.reader.peek();
        if !self.reader.is_exhausted() && c != '\n' && c != '\r' {
            line_text.push(c);
        }

        Error::new(error_impl, self.reader.position(), self.file(), line_text)
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_rest(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_operator(c: char) -> bool {
    matches!(c, '.' | ',' | '+' | '-' | '*' | '/' | '%' | '|' | '&' | '<' | '>' | '=')
}

fn is_bracket(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | '[' | ']')
}

/// Tokenizes `source`, stopping at the first lexical error.
pub fn tokenize(source: &str, file: Option<&str>) -> Result<Vec<Token>, Error> {
    let file = file.unwrap_or(DEFAULT_FILE);
    let mut lex = Lexer::new(SourceReader::new(source, file));

    loop {
        match lex.next_token()? {
            Some(token) if token.kind() == TokenKind::EOF => break,
            Some(token) => lex.push(token),
            None => {}
        }
    }

    let tokens = lex.finish();
    debug!(file, tokens = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Tokenizes `source`, collecting every lexical error.
///
/// After an error the rest of that line is skipped and scanning resumes on the
/// next one, so the returned stream still ends in a single EOF sentinel.
pub fn tokenize_recovering(source: &str, file: Option<&str>) -> (Vec<Token>, Vec<Error>) {
    let file = file.unwrap_or(DEFAULT_FILE);
    let mut lex = Lexer::new(SourceReader::new(source, file));
    let mut errors = vec![];

    loop {
        match lex.next_token() {
            Ok(Some(token)) if token.kind() == TokenKind::EOF => break,
            Ok(Some(token)) => lex.push(token),
            Ok(None) => {}
            Err(error) => {
                errors.push(error);
                lex.resync();
            }
        }
    }

    let tokens = lex.finish();
    debug!(file, tokens = tokens.len(), errors = errors.len(), "tokenized with recovery");
    (tokens, errors)
}
