//! `smt2-tokens`: dump the token stream of an SMT-LIB2 script.
//!
//! Prints one `line:column KIND payload` line per token. Lexical errors go
//! to stderr and scanning continues after the offending input. With no file
//! argument, standard input is scanned in interactive mode.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use smt2_lexer::{ScanOptions, Scanner, Token};

const USAGE: &str = "\
Usage: smt2-tokens [options] [FILE]

Reads standard input interactively when FILE is missing or '-'.

Options:
  --strict      Scan '-5' as a symbol, as strict SMT-LIB2 requires
  -h, --help    Show this message

Set RUST_LOG (e.g. RUST_LOG=smt2_lexer=trace) for scanner tracing.";

/// Command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    path: Option<String>,
    strict: bool,
    help: bool,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Clean,
    LexicalErrors,
    IoFailure,
}

impl Outcome {
    fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::LexicalErrors => ExitCode::from(1),
            Outcome::IoFailure => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let options = ScanOptions::new().with_signed_numerals(!args.strict);
    let (reader, options): (Box<dyn Read>, ScanOptions) = match args.path.as_deref() {
        None | Some("-") => (Box::new(io::stdin().lock()), options.with_interactive(true)),
        Some(path) => match File::open(path) {
            Ok(file) => (Box::new(file), options),
            Err(e) => {
                eprintln!("error: cannot open '{path}': {e}");
                return ExitCode::from(2);
            }
        },
    };

    let stdout = io::stdout().lock();
    dump_tokens(Scanner::with_options(reader, options), stdout).exit_code()
}

/// Initialize tracing, only when `RUST_LOG` is set. Logs go to stderr so the
/// token dump on stdout stays clean.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--strict" => parsed.strict = true,
            flag if flag.len() > 1 && flag.starts_with('-') => {
                return Err(format!("unknown option '{flag}'"));
            }
            _ => set_path(&mut parsed, arg)?,
        }
    }
    Ok(parsed)
}

fn set_path(args: &mut Args, path: String) -> Result<(), String> {
    if let Some(first) = &args.path {
        return Err(format!("more than one input file ('{first}' and '{path}')"));
    }
    args.path = Some(path);
    Ok(())
}

/// Scan to end of input, writing one line per token to `out`.
///
/// Lexical errors are reported on stderr and do not stop the scan. An I/O
/// failure, of the input or of `out`, ends it.
fn dump_tokens<R: Read, W: Write>(mut scanner: Scanner<R>, mut out: W) -> Outcome {
    let interactive = scanner.is_interactive();
    let mut outcome = Outcome::Clean;
    loop {
        let line = match scanner.next_token() {
            Ok(Token::EndOfInput) => break,
            Ok(token) => describe(token),
            Err(e) if e.is_io() => {
                eprintln!("error: {e}");
                return Outcome::IoFailure;
            }
            Err(e) => {
                eprintln!("error: {e}");
                outcome = Outcome::LexicalErrors;
                continue;
            }
        };
        let written = writeln!(out, "{}:{} {line}", scanner.line(), scanner.column())
            .and_then(|()| if interactive { out.flush() } else { Ok(()) });
        if let Err(e) = written {
            eprintln!("error: cannot write output: {e}");
            return Outcome::IoFailure;
        }
    }
    if let Err(e) = out.flush() {
        eprintln!("error: cannot write output: {e}");
        return Outcome::IoFailure;
    }
    outcome
}

/// `KIND payload` text for a token.
fn describe(token: Token<'_>) -> String {
    let kind = token.kind().display_name();
    match token {
        Token::LeftParen | Token::RightParen | Token::EndOfInput => kind.to_owned(),
        Token::Keyword(text) | Token::Symbol(text) => format!("{kind} {text}"),
        Token::String(bytes) => format!("{kind} {:?}", String::from_utf8_lossy(bytes)),
        Token::Int(value) | Token::Float(value) => format!("{kind} {value}"),
        Token::BitVector { value, width } => format!("{kind} {value} width={width}"),
    }
}
