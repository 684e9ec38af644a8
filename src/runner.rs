//! Driving a solver over the cases of a code jam and printing `Case #i: ...` lines.
//!
//! There are two ways to solve a jam:
//!
//! - **per case**: the first token is the number of cases `N`, and a closure is called `N` times,
//!   each call reading exactly its own case's tokens;
//! - **generating**: a closure takes ownership of the tokens once and returns an iterator of
//!   solutions. This is for problems with a shared preamble, e.g. a dictionary read once and
//!   reused by every case.
//!
//! Either way, each solution is printed and flushed before the next case is solved. If the
//! downstream reader goes away (broken pipe), the run stops quietly and successfully.

use crate::config::Config;
use crate::error::Error;
use crate::progress::Progress;
use crate::tokens::Tokens;
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::{debug, trace};

pub use printer::{CaseLine, CasePrinter, Separator};
pub use solution::{Rendered, Shown, Solution};

mod printer;
mod solution;

type PerCaseFn<'a, R, S, E> = dyn FnMut(&mut Tokens<R>) -> Result<S, E> + 'a;
type Solutions<'a, S, E> = Box<dyn Iterator<Item = Result<S, E>> + 'a>;
type GeneratingFn<'a, R, S, E> = dyn FnOnce(Tokens<R>) -> Result<Solutions<'a, S, E>, E> + 'a;

/// How a jam is solved; see the module docs.
pub enum Solver<'a, R, S, E> {
    PerCase(Box<PerCaseFn<'a, R, S, E>>),
    Generating(Box<GeneratingFn<'a, R, S, E>>),
}

impl<'a, R: 'a, S: 'a, E: 'a> Solver<'a, R, S, E> {
    pub fn per_case<F>(solve_one: F) -> Self
    where
        F: FnMut(&mut Tokens<R>) -> Result<S, E> + 'a,
    {
        Solver::PerCase(Box::new(solve_one))
    }

    pub fn generating<F, I>(solve_all: F) -> Self
    where
        F: FnOnce(Tokens<R>) -> Result<I, E> + 'a,
        I: IntoIterator<Item = Result<S, E>>,
        I::IntoIter: 'a,
    {
        Solver::Generating(Box::new(
            move |tokens: Tokens<R>| -> Result<Solutions<'a, S, E>, E> {
                let solutions = solve_all(tokens)?;
                Ok(Box::new(solutions.into_iter()))
            },
        ))
    }
}

impl<R, S, E> fmt::Debug for Solver<'_, R, S, E> {
    /// The closures themselves aren't printable.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Solver::PerCase(_) => write!(f, "Solver::PerCase"),
            Solver::Generating(_) => write!(f, "Solver::Generating"),
        }
    }
}

/// Solve a jam with whichever kind of solver was given.
pub fn dispatch<R, W, S, E>(
    solver: Solver<'_, R, S, E>,
    input: R,
    output: W,
    config: &Config,
) -> Result<(), E>
where
    R: BufRead,
    W: Write,
    S: Solution,
    E: From<Error>,
{
    debug!(solver = ?solver, "dispatching");
    match solver {
        Solver::PerCase(solve_one) => run_function_mode(solve_one, input, output, config),
        Solver::Generating(solve_all) => run_generator_mode(solve_all, input, output, config),
    }
}

/// Read the number of cases, then call `solve_one` once per case.
///
/// `solve_one` must consume exactly its own case's tokens; nothing checks this.
pub fn run_function_mode<R, W, S, E, F>(
    mut solve_one: F,
    input: R,
    output: W,
    config: &Config,
) -> Result<(), E>
where
    R: BufRead,
    W: Write,
    S: Solution,
    E: From<Error>,
    F: FnMut(&mut Tokens<R>) -> Result<S, E>,
{
    let mut tokens = Tokens::new(input);
    let num_cases: usize = tokens.next_token()?;
    debug!(num_cases, "read case count");

    let solutions = (0..num_cases).map(|_| solve_one(&mut tokens));
    print_cases(solutions, output, config, Some(num_cases))
}

/// Hand the tokens to `solve_all` and print whatever solutions it yields.
///
/// When the solutions report an exact length, as `cases` does, the progress bar knows the total.
pub fn run_generator_mode<R, W, S, E, F, I>(
    solve_all: F,
    input: R,
    output: W,
    config: &Config,
) -> Result<(), E>
where
    R: BufRead,
    W: Write,
    S: Solution,
    E: From<Error>,
    F: FnOnce(Tokens<R>) -> Result<I, E>,
    I: IntoIterator<Item = Result<S, E>>,
{
    let solutions = solve_all(Tokens::new(input))?.into_iter();
    let num_cases = exact_len(&solutions);
    debug!(?num_cases, "generating solutions");
    print_cases(solutions, output, config, num_cases)
}

fn exact_len<I: Iterator>(iter: &I) -> Option<usize> {
    match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(lower),
        _ => None,
    }
}

/// Print each solution as it is produced, numbering cases from 1.
///
/// The first failing solution aborts the run, after every earlier line has been flushed. A broken
/// pipe on `output` ends the run with `Ok(())`.
pub fn print_cases<I, S, E, W>(
    solutions: I,
    output: W,
    config: &Config,
    num_cases: Option<usize>,
) -> Result<(), E>
where
    I: IntoIterator<Item = Result<S, E>>,
    S: Solution,
    E: From<Error>,
    W: Write,
{
    let mut printer = CasePrinter::new(output, config.separator());
    let mut progress = Progress::stderr(config.emit_progress, num_cases);
    progress.start();

    for solution in solutions {
        let solution = solution?;
        match printer.print_case(&solution) {
            Ok(()) => {
                trace!(case = printer.printed(), "flushed solution");
                progress.advance();
            }
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                debug!(
                    printed = printer.printed(),
                    "output closed by its reader; stopping"
                );
                return Ok(());
            }
            Err(err) => return Err(Error::from(err).into()),
        }
    }

    progress.finish();
    debug!(printed = printer.printed(), "all cases solved");
    Ok(())
}

/// Call `solve_one` `n` times over `tokens`, yielding each result.
///
/// Meant for generating solvers: read the preamble, then hand the rest of the input to `cases`.
pub fn cases<R, S, E, F>(n: usize, tokens: Tokens<R>, solve_one: F) -> Cases<R, F>
where
    R: BufRead,
    F: FnMut(&mut Tokens<R>) -> Result<S, E>,
{
    Cases {
        tokens,
        remaining: n,
        solve_one,
    }
}

/// Iterator returned by `cases`.
pub struct Cases<R, F> {
    tokens: Tokens<R>,
    remaining: usize,
    solve_one: F,
}

impl<R, S, E, F> Iterator for Cases<R, F>
where
    R: BufRead,
    F: FnMut(&mut Tokens<R>) -> Result<S, E>,
{
    type Item = Result<S, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some((self.solve_one)(&mut self.tokens))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_per_case<F>(input: &str, config: &Config, solve_one: F) -> (Result<(), Error>, String)
    where
        F: FnMut(&mut Tokens<&[u8]>) -> Result<u64, Error>,
    {
        let mut out = Vec::new();
        let result = run_function_mode(solve_one, input.as_bytes(), &mut out, config);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn default_separator() {
        let mut case = 0;
        let (result, out) = run_per_case("3", &Config::new(), |_| {
            let solution = case * case;
            case += 1;
            Ok(solution)
        });
        result.unwrap();
        assert_eq!("Case #1: 0\nCase #2: 1\nCase #3: 4\n", out);
    }

    #[test]
    fn newline_separator() {
        let config = Config::new().with_insert_newline(true);
        let (result, out) = run_per_case("2 5 6", &config, |t| t.next_token());
        result.unwrap();
        assert_eq!("Case #1:\n5\nCase #2:\n6\n", out);
    }

    #[test]
    fn zero_cases() {
        let (result, out) = run_per_case("0", &Config::new(), |_| unreachable!());
        result.unwrap();
        assert_eq!("", out);
    }

    #[test]
    fn missing_case_count() {
        let (result, out) = run_per_case("  \n", &Config::new(), |_| Ok(1));
        assert!(result.unwrap_err().is_end_of_input());
        assert_eq!("", out);
    }

    #[test]
    fn malformed_case_count() {
        let (result, _) = run_per_case("three", &Config::new(), |_| Ok(1));
        assert!(matches!(result, Err(Error::MalformedToken { .. })));
    }

    #[test]
    fn exhaustion_after_flushed_cases() {
        // Each case reads a counted list and sums it; the third case is cut short.
        let (result, out) = run_per_case("3  2 1 2  1 10  4 1 1", &Config::new(), |t| {
            t.next_counted::<u64>()?.sum()
        });
        assert!(result.unwrap_err().is_end_of_input());
        assert_eq!("Case #1: 3\nCase #2: 10\n", out);
    }

    #[test]
    fn generating_solver_shares_state() {
        // A preamble of "words", then one query per case: how many words start with the query.
        let input = "3 2\napple apricot banana\nap\nb";
        let solver: Solver<'_, &[u8], usize, Error> = Solver::generating(|mut tokens| {
            let (num_words, num_cases): (usize, usize) = tokens.next_group()?;
            let words: Vec<String> = tokens.collect_many(num_words)?;
            Ok(cases(num_cases, tokens, move |t| {
                let prefix: String = t.next_token()?;
                Ok(words.iter().filter(|w| w.starts_with(&prefix)).count())
            }))
        });

        let mut out = Vec::new();
        dispatch(solver, input.as_bytes(), &mut out, &Config::new()).unwrap();
        assert_eq!("Case #1: 2\nCase #2: 1\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn dispatch_per_case() {
        let solver: Solver<'_, &[u8], Vec<u8>, Error> = Solver::per_case(|t| {
            let mut values: Vec<u8> = t.collect_counted()?;
            values.sort_unstable();
            Ok(values)
        });

        let mut out = Vec::new();
        dispatch(solver, "2 3 3 1 2 1 9".as_bytes(), &mut out, &Config::new()).unwrap();
        assert_eq!(
            "Case #1: 1 2 3\nCase #2: 9\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn solver_errors_propagate_unchanged() {
        #[derive(Debug, PartialEq)]
        enum MyError {
            Tokens,
            NoSolution(usize),
        }
        impl From<Error> for MyError {
            fn from(_: Error) -> Self {
                MyError::Tokens
            }
        }

        let mut out = Vec::new();
        let result = run_function_mode(
            |t| -> Result<u32, MyError> {
                let n: usize = t.next_token()?;
                if n == 0 {
                    Err(MyError::NoSolution(n))
                } else {
                    Ok(1)
                }
            },
            "2 1 0".as_bytes(),
            &mut out,
            &Config::new(),
        );
        assert_eq!(Err(MyError::NoSolution(0)), result);
        assert_eq!("Case #1: 1\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn other_write_errors_propagate() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result: Result<(), Error> = run_function_mode(
            |_| Ok(1),
            "1".as_bytes(),
            Full,
            &Config::new(),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn generated_cases_have_a_known_total() {
        let tokens = Tokens::new("1 2 3".as_bytes());
        let solutions: Solutions<'_, u8, Error> =
            Box::new(cases(3, tokens, |t| t.next_token::<u8>()));
        assert_eq!(Some(3), exact_len(&solutions));

        let filtered = vec![Ok::<u8, Error>(1)].into_iter().filter(|_| true);
        assert_eq!(None, exact_len(&filtered));
    }

    #[test]
    fn cases_adapter_counts_down() {
        let tokens = Tokens::new("4 5 6".as_bytes());
        let mut iter = cases(2, tokens, |t| t.next_token::<u8>());
        assert_eq!(2, iter.size_hint().0);
        assert_eq!(4, iter.next().unwrap().unwrap());
        assert_eq!(5, iter.next().unwrap().unwrap());
        assert!(iter.next().is_none());
    }
}
