use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::{
    errors::errors::Error,
    lexer::{
        lexer::{tokenize, tokenize_recovering},
        reader::SourceReader,
        tokens::Token,
    },
};

/// One source file, loaded in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Name shown in diagnostics, may be fictional like `<stdin>`.
    pub name: String,
    pub contents: String,
}

impl Source {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Source {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Loads a file. Diagnostics name it by its file name component.
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self::from_reader(name, File::open(path)?)
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::with_capacity(512);
        reader.read_to_end(&mut bytes)?;

        let contents = String::from_utf8(bytes)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

        Ok(Source::new(name, contents))
    }

    pub fn reader(&self) -> SourceReader<'_> {
        SourceReader::new(&self.contents, &self.name)
    }

    pub fn tokenize(&self) -> Result<Vec<Token>, Error> {
        tokenize(&self.contents, Some(&self.name))
    }

    pub fn tokenize_recovering(&self) -> (Vec<Token>, Vec<Error>) {
        tokenize_recovering(&self.contents, Some(&self.name))
    }
}
