//! Helpers for solving code jam style problems.
//!
//! Input is a stream of whitespace-separated tokens, read on demand through [`Tokens`]. Output is
//! one `Case #i: solution` line per case, written and flushed as soon as each case is solved.
//!
//! ```
//! use codejam::{run_function_mode, Config, Error};
//!
//! let input = "2\n3 1 2 3\n1 10\n";
//! let mut output = Vec::new();
//!
//! run_function_mode(
//!     |tokens| -> Result<i64, Error> { tokens.next_counted::<i64>()?.sum() },
//!     input.as_bytes(),
//!     &mut output,
//!     &Config::new(),
//! )
//! .unwrap();
//!
//! assert_eq!("Case #1: 6\nCase #2: 10\n", String::from_utf8(output).unwrap());
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod progress;
pub mod runner;
pub mod tokens;

pub use config::Config;
pub use error::{Error, Result};
pub use runner::{
    cases, dispatch, print_cases, run_function_mode, run_generator_mode, Shown, Solution, Solver,
};
pub use tokens::{Group, Tokens};
