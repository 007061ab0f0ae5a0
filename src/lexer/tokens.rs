use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Keyword spellings, keyed by their lowercase form.
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, KeywordKind> = {
        let mut map = HashMap::new();
        map.insert("print", KeywordKind::Print);
        map.insert("assert", KeywordKind::Assert);
        map.insert("if", KeywordKind::If);
        map.insert("for", KeywordKind::For);
        map.insert("while", KeywordKind::While);
        map.insert("return", KeywordKind::Return);
        map.insert("continue", KeywordKind::Continue);
        map.insert("break", KeywordKind::Break);
        map.insert("func", KeywordKind::Func);
        map.insert("namespace", KeywordKind::Namespace);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Bracket,
    EOL,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum KeywordKind {
    // Builtin "functions"
    Print,
    Assert,

    // Control flow
    If,
    For,
    While,

    // Exits
    Return,
    Continue,
    Break,

    // Declarations
    Func,
    Namespace,
}

impl KeywordKind {
    /// Case-insensitive keyword lookup.
    pub fn lookup(word: &str) -> Option<KeywordKind> {
        KEYWORD_LOOKUP.get(word.to_lowercase().as_str()).copied()
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Literal {
    /// String literal, delimiters included.
    Str(String),
    /// Character literal, delimiters included.
    Char(String),
    Integer(String),
    Bool(bool),
}

/// Token payload. The variant decides the token's kind.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    Keyword(KeywordKind),
    Identifier(String),
    Literal(Literal),
    Operator(char),
    Bracket(char),
    EOL,
    EOF,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: TokenValue,
    /// Exact source text of the token, `"\n"` for EOL and empty for EOF.
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self.value {
            TokenValue::Keyword(_) => TokenKind::Keyword,
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::Literal(_) => TokenKind::Literal,
            TokenValue::Operator(_) => TokenKind::Operator,
            TokenValue::Bracket(_) => TokenKind::Bracket,
            TokenValue::EOL => TokenKind::EOL,
            TokenValue::EOF => TokenKind::EOF,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind())
    }

    /// The payload column of the token dump.
    pub fn payload(&self) -> String {
        match &self.value {
            TokenValue::Keyword(keyword) => keyword.to_string(),
            TokenValue::Identifier(name) => name.clone(),
            TokenValue::Literal(Literal::Bool(value)) => value.to_string(),
            TokenValue::Literal(Literal::Str(text))
            | TokenValue::Literal(Literal::Char(text))
            | TokenValue::Literal(Literal::Integer(text)) => text.clone(),
            TokenValue::Operator(c) | TokenValue::Bracket(c) => c.to_string(),
            TokenValue::EOL => String::from("EOL"),
            TokenValue::EOF => String::from("EOF"),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind(), self.payload())
    }
}
