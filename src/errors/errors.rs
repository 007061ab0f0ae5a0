use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error together with everything needed to render its diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    file: String,
    line_text: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, file: &str, line_text: String) -> Self {
        Error {
            internal_error: error_impl,
            position,
            file: String::from(file),
            line_text,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    /// Text of the offending line up to and including the offending character.
    pub fn get_line_text(&self) -> &str {
        &self.line_text
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::MalformedComment => "MalformedComment",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::UnhandledCharacter { .. } => "UnhandledCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::MalformedComment => {
                ErrorTip::Suggestion(String::from("Line comments start with `//`"))
            }
            ErrorImpl::UnterminatedLiteral { delimiter } => ErrorTip::Suggestion(format!(
                "Add a closing `{}` before the end of the line",
                delimiter
            )),
            ErrorImpl::UnhandledCharacter { .. } => ErrorTip::None,
        }
    }

    fn location(&self) -> String {
        format!("./{}:{}:{} ", self.file, self.position.line, self.position.column)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        /*
            ./example.ib:1:7 print(#
                                   ^ Unhandled rune!
        */

        let location = self.location();
        writeln!(f, "{}{}", location, self.line_text)?;

        // Tabs are kept so the caret lines up with tab-indented source.
        let mut indicator = " ".repeat(location.chars().count());
        indicator.extend(
            self.line_text
                .chars()
                .take(self.position.column.saturating_sub(1) as usize)
                .map(|c| if c == '\t' { '\t' } else { ' ' }),
        );

        write!(f, "{}^ {}", indicator, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Malformed comment")]
    MalformedComment,
    #[error("Unterminated literal, missing closing {delimiter}")]
    UnterminatedLiteral { delimiter: char },
    #[error("Unhandled rune! ")]
    UnhandledCharacter { character: char },
}
