use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use clap::{clap_app, crate_authors, crate_description, crate_version};

/// Source file tokenized when none is given.
pub const DEFAULT_SOURCE: &str = "./example.ib";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    Help(Box<str>),
    Version(Box<str>),
    Run(Args),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
    pub file: PathBuf,
    /// Print the token stream.
    pub print_tokens: bool,
    /// Report every lexical error instead of stopping at the first.
    pub recover: bool,
}

pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
    A: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let app = clap_app!(
        iblang =>
            (version: crate_version!())
            (author: crate_authors!())
            (about: crate_description!())
            (@arg FILE: "Source file to tokenize (defaults to ./example.ib)")
            (@arg tokens: --tokens "Print the token stream")
            (@arg recover: --recover "Report every lexical error instead of stopping at the first")
    );

    match app.get_matches_from_safe(args) {
        Ok(matches) => Ok(Command::Run(Args {
            file: PathBuf::from(matches.value_of_os("FILE").unwrap_or(OsStr::new(DEFAULT_SOURCE))),
            print_tokens: matches.is_present("tokens"),
            recover: matches.is_present("recover"),
        })),

        Err(error) => match error.kind {
            clap::ErrorKind::HelpDisplayed => Ok(Command::Help(error.message.into_boxed_str())),
            clap::ErrorKind::VersionDisplayed => {
                Ok(Command::Version(error.message.into_boxed_str()))
            }
            _ => Err(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{parse, Args, Command, DEFAULT_SOURCE};

    #[test]
    fn test_defaults() {
        let command = parse(["iblang"]).unwrap();
        assert_eq!(
            command,
            Command::Run(Args {
                file: DEFAULT_SOURCE.into(),
                print_tokens: false,
                recover: false,
            })
        );
    }

    #[test]
    fn test_flags_and_file() {
        let command = parse(["iblang", "--tokens", "--recover", "main.ib"]).unwrap();
        assert_eq!(
            command,
            Command::Run(Args {
                file: "main.ib".into(),
                print_tokens: true,
                recover: true,
            })
        );
    }

    #[test]
    fn test_help() {
        assert_matches!(parse(["iblang", "--help"]), Ok(Command::Help(_)));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(parse(["iblang", "--frobnicate"]).is_err());
    }
}
