//! Command-line front end.
//!
//! ```text
//! solver [IN_FILE] [OUT_FILE] [--progress] [--no-debug] [--newline]
//! ```
//!
//! Input and output default to stdin and stdout. Logging goes to stderr and is controlled by
//! `RUST_LOG` (default `warn`).

use crate::config::Config;
use crate::error::Error;
use crate::runner::{dispatch, Solution, Solver};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub type Input = Box<dyn BufRead>;
pub type Output = Box<dyn Write>;

/// Solve a code jam.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The input file to use. Defaults to stdin.
    pub in_file: Option<PathBuf>,

    /// The file to write the solutions to. Defaults to stdout.
    pub out_file: Option<PathBuf>,

    /// Print a progress bar to stderr.
    #[arg(short, long)]
    pub progress: bool,

    /// Disable debug printing.
    #[arg(short = 'd', long)]
    pub no_debug: bool,

    /// Put each solution on its own line, after "Case #N:".
    #[arg(short, long)]
    pub newline: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new()
            .with_insert_newline(self.newline)
            .with_progress(self.progress)
            .with_debug(!self.no_debug)
    }
}

/// Parse the command line, set up logging, and solve the jam with the solver `make_solver` builds.
pub fn autosolve<'a, S, E, F>(make_solver: F) -> Result<(), E>
where
    S: Solution,
    E: From<Error>,
    F: FnOnce(&Config) -> Solver<'a, Input, S, E>,
{
    let args = Args::parse();
    init_logging();
    solve_with(&args, make_solver)
}

/// Like `autosolve`, with already-parsed arguments and no logging setup.
pub fn solve_with<'a, S, E, F>(args: &Args, make_solver: F) -> Result<(), E>
where
    S: Solution,
    E: From<Error>,
    F: FnOnce(&Config) -> Solver<'a, Input, S, E>,
{
    let config = args.config();
    debug!(?args, ?config, "starting");

    let input = open_input(args.in_file.as_deref()).map_err(Error::from)?;
    let output = open_output(args.out_file.as_deref()).map_err(Error::from)?;

    let solver = make_solver(&config);
    dispatch(solver, input, output, &config)
}

pub fn open_input(path: Option<&Path>) -> io::Result<Input> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

/// Output is buffered; the runner flushes it after every case.
pub fn open_output(path: Option<&Path>) -> io::Result<Output> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

/// Log to stderr, filtered by `RUST_LOG`. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let args =
            Args::try_parse_from(vec!["codejam", "in.txt", "-p", "--newline", "-d"]).unwrap();
        assert_eq!(Some(PathBuf::from("in.txt")), args.in_file);
        assert_eq!(None, args.out_file);
        assert_eq!(
            Config {
                insert_newline: true,
                emit_progress: true,
                debug_enabled: false,
            },
            args.config()
        );
    }

    #[test]
    fn default_flags() {
        let args = Args::try_parse_from(vec!["codejam"]).unwrap();
        assert_eq!(None, args.in_file);
        assert_eq!(Config::default(), args.config());
    }

    #[test]
    fn missing_input_file() {
        let args = Args::try_parse_from(vec!["codejam", "/nonexistent/codejam/input"]).unwrap();
        let result: Result<(), Error> =
            solve_with(&args, |_| Solver::per_case(|_: &mut crate::Tokens<Input>| Ok(0)));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
