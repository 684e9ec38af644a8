use std::io;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while reading tokens or writing solutions.
///
/// A broken pipe on the output side never shows up here: the runner ends the run with `Ok(())`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("ran out of input tokens")]
    EndOfInput,

    #[error("line {line}: can't parse token {token:?} as {type_name}: {reason}")]
    MalformedToken {
        token: String,
        type_name: &'static str,
        line: usize,
        reason: String,
    },

    #[error("line {line}: token is not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("no collected argument named {name:?} of the requested kind")]
    UnknownArgument { name: String },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True for the "ran out of tokens" condition.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Error::EndOfInput)
    }
}
