//! passcheck CLI
//!
//! Prompts for one password, prints its strength analysis and improvement
//! suggestions, then checks it against the public breach index.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use passcheck::{
    AppConfig, Denylist, check_breach_with, default_analyzer, evaluate, suggest_improvements,
};
use secrecy::SecretString;
use thiserror::Error;
use tracing::{error, info, warn};

mod interrupt;
mod render;

const PROMPT: &str = "👉 Enter your password: ";

#[derive(Error, Debug)]
enum InputError {
    #[error("input interrupted")]
    Interrupted,
    #[error("failed to read password: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    fn from_io(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => InputError::Interrupted,
            _ => InputError::Io(err),
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Reads one line, stripping the line terminator. EOF counts as an
/// interrupted read. Bytes that are not UTF-8 become U+FFFD.
fn read_line_from<R: BufRead>(reader: &mut R) -> Result<SecretString, InputError> {
    let mut bytes = Vec::new();
    let read = reader
        .read_until(b'\n', &mut bytes)
        .map_err(InputError::from_io)?;
    if read == 0 {
        return Err(InputError::Interrupted);
    }

    let mut line = String::from_utf8_lossy(&bytes).into_owned();
    bytes.fill(0);
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(SecretString::new(line.into()))
}

/// A read that raced with Ctrl+C is discarded.
fn settle_read(
    result: Result<SecretString, InputError>,
    interrupted: bool,
) -> Result<SecretString, InputError> {
    if interrupted {
        return Err(InputError::Interrupted);
    }
    result
}

fn read_password() -> Result<SecretString, InputError> {
    let result = if io::stdin().is_terminal() {
        rpassword::prompt_password(PROMPT)
            .map(|pwd| SecretString::new(pwd.into()))
            .map_err(InputError::from_io)
    } else {
        print!("{}", PROMPT);
        io::stdout().flush()?;
        read_line_from(&mut io::stdin().lock())
    };
    settle_read(result, interrupt::interrupted())
}

fn load_denylist(config: &AppConfig) -> Denylist {
    config.load_denylist().unwrap_or_else(|e| {
        warn!("Using built-in denylist: {}", e);
        Denylist::default()
    })
}

fn run(config: &AppConfig) -> Result<(), CliError> {
    let analyzer = default_analyzer();
    info!("strength analyzer: {}", analyzer.name());
    let denylist = load_denylist(config);

    println!("🔐  PASSWORD SECURITY CHECKER");
    println!();
    println!("Analyzes your password, suggests improvements, and checks known breaches.");
    println!();

    let password = read_password()?;

    let analysis = evaluate(&password, analyzer.as_ref());
    let tips = suggest_improvements(&password, &denylist);

    println!();
    println!("Checking breach databases...");
    let breach = check_breach_with(&config.breach, &password);

    let mut out = io::stdout().lock();
    render::render_report(&mut out, &analysis, &tips, &breach)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = interrupt::install() {
        warn!("Could not install Ctrl+C handler: {}", e);
    }

    let config = AppConfig::from_env();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Input(InputError::Interrupted)) => {
            println!();
            println!("{}", interrupt::EXIT_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let pwd = read_line_from(&mut Cursor::new("hunter2\r\n")).expect("line");
        assert_eq!(pwd.expose_secret(), "hunter2");

        let pwd = read_line_from(&mut Cursor::new("  spaced out  \n")).expect("line");
        assert_eq!(pwd.expose_secret(), "  spaced out  ");
    }

    #[test]
    fn test_read_line_without_newline() {
        let pwd = read_line_from(&mut Cursor::new("last-line")).expect("line");
        assert_eq!(pwd.expose_secret(), "last-line");
    }

    #[test]
    fn test_read_empty_line_is_empty_password() {
        let pwd = read_line_from(&mut Cursor::new("\n")).expect("line");
        assert_eq!(pwd.expose_secret(), "");
    }

    #[test]
    fn test_read_eof_is_interrupted() {
        let result = read_line_from(&mut Cursor::new(""));
        assert!(matches!(result, Err(InputError::Interrupted)));
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let pwd = read_line_from(&mut Cursor::new(b"pa\xffss\n".to_vec())).expect("line");
        assert_eq!(pwd.expose_secret(), "pa\u{FFFD}ss");
    }

    #[test]
    fn test_settle_read_discards_interrupted_input() {
        let line = read_line_from(&mut Cursor::new("hunter2\n"));
        assert!(matches!(settle_read(line, true), Err(InputError::Interrupted)));

        let line = read_line_from(&mut Cursor::new("hunter2\n"));
        let pwd = settle_read(line, false).expect("line");
        assert_eq!(pwd.expose_secret(), "hunter2");
    }

    #[test]
    fn test_io_error_kinds() {
        let interrupted = io::Error::from(io::ErrorKind::Interrupted);
        assert!(matches!(InputError::from_io(interrupted), InputError::Interrupted));

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(InputError::from_io(denied), InputError::Io(_)));
    }
}
