use std::{io, time::Instant};

use iblang::{
    args::{self, Args, Command},
    color::{Fg, Red},
    display_error, init_tracing,
    lexer::dump::write_tokens,
    Source,
};
use tracing::info;

fn main() -> ! {
    init_tracing();

    let command = match args::parse(std::env::args_os()) {
        Ok(command) => command,
        Err(error) => {
            eprint!("{}", error);
            std::process::exit(1)
        }
    };

    let exit_code = match command {
        Command::Run(args) => match run(args) {
            Ok(code) => code,
            Err(error) => {
                eprintln!("{}: {}", Fg(Red, "Error"), error);
                1
            }
        },
        Command::Help(msg) | Command::Version(msg) => {
            println!("{}", msg);
            0
        }
    };

    std::process::exit(exit_code)
}

fn run(args: Args) -> io::Result<i32> {
    let source = Source::from_path(&args.file).map_err(|error| {
        io::Error::new(error.kind(), format!("{}: {}", args.file.display(), error))
    })?;

    let start = Instant::now();
    let (tokens, errors) = if args.recover {
        source.tokenize_recovering()
    } else {
        match source.tokenize() {
            Ok(tokens) => (tokens, vec![]),
            Err(error) => (vec![], vec![error]),
        }
    };
    info!(file = %source.name, elapsed = ?start.elapsed(), "tokenized");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !errors.is_empty() {
        for error in &errors {
            display_error(&mut out, error)?;
        }
        return Ok(1);
    }

    if args.print_tokens {
        write_tokens(&mut out, &source.name, &tokens)?;
    }

    Ok(0)
}
