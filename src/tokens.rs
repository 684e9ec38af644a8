//! Reading whitespace-separated tokens from an input stream.
//!
//! A token is a maximal run of non-whitespace bytes. Line breaks carry no meaning beyond
//! separating tokens, so `"3\n4  5"` and `"3 4 5"` read identically.

use crate::error::{Error, Result};
use std::any;
use std::fmt;
use std::io::{self, prelude::*, BufReader, ErrorKind};
use std::iter::FromIterator;
use std::str::{self, FromStr};

pub use group::Group;
pub use many::{Many, Strings};

mod group;
mod many;

/// A destructive cursor over the tokens of a buffered reader.
///
/// Tokens are read on demand; only the current token is ever held in memory.
#[derive(Debug)]
pub struct Tokens<R> {
    reader: R,
    /// Bytes of the most recently read token.
    token: Vec<u8>,
    /// 1-based line the cursor is on.
    line: usize,
    /// Line on which the most recently read token started.
    token_line: usize,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            token: Vec::with_capacity(64),
            line: 1,
            token_line: 1,
        }
    }

    /// The line of the last token returned, for error messages.
    pub fn line(&self) -> usize {
        self.token_line
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read the next token without converting it.
    pub fn next_raw(&mut self) -> Result<&str> {
        if !self.skip_whitespace()? {
            return Err(Error::EndOfInput);
        }
        self.token_line = self.line;
        self.read_token_bytes()?;

        let line = self.token_line;
        str::from_utf8(&self.token).map_err(|_| Error::InvalidUtf8 { line })
    }

    /// Read one token and parse it as a `T`.
    pub fn next_token<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.next_token_with(|raw| raw.parse::<T>())
    }

    /// Read one token and convert it with `convert`.
    ///
    /// A conversion failure becomes `Error::MalformedToken`, carrying the raw text.
    pub fn next_token_with<T, X, F>(&mut self, convert: F) -> Result<T>
    where
        X: fmt::Display,
        F: FnOnce(&str) -> std::result::Result<T, X>,
    {
        let converted = {
            let raw = self.next_raw()?;
            convert(raw).map_err(|err| (raw.to_owned(), err.to_string()))
        };

        converted.map_err(|(token, reason)| Error::MalformedToken {
            token,
            type_name: any::type_name::<T>(),
            line: self.token_line,
            reason,
        })
    }

    /// Read a token or group of tokens, e.g. `(String, u32)` for a "name age" record.
    pub fn next_group<G: Group>(&mut self) -> Result<G> {
        G::read_from(self)
    }

    /// Lazily read exactly `n` groups.
    ///
    /// Nothing is consumed until the iterator is advanced; dropping it early leaves the remaining
    /// tokens in the stream.
    pub fn next_many<G: Group>(&mut self, n: usize) -> Many<'_, R, G> {
        Many::new(self, n)
    }

    /// Read a count `n`, then lazily read `n` groups.
    pub fn next_counted<G: Group>(&mut self) -> Result<Many<'_, R, G>> {
        let n = self.next_token::<usize>()?;
        Ok(self.next_many(n))
    }

    /// Eagerly read `n` groups into a collection, stopping at the first error.
    pub fn collect_many<G: Group, C: FromIterator<G>>(&mut self, n: usize) -> Result<C> {
        self.next_many(n).collect()
    }

    /// Eagerly read a count-prefixed collection.
    pub fn collect_counted<G: Group, C: FromIterator<G>>(&mut self) -> Result<C> {
        self.next_counted()?.collect()
    }

    /// Every remaining token as an owned string, until the stream runs dry.
    pub fn strings(&mut self) -> Strings<'_, R> {
        Strings::new(self)
    }

    /// Consume leading whitespace. Returns false if the stream ended first.
    fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if buf.is_empty() {
                return Ok(false);
            }

            let (amt, found) = match buf.iter().position(|&b| !is_space(b)) {
                Some(i) => (i, true),
                None => (buf.len(), false),
            };
            self.line += buf[..amt].iter().filter(|&&b| b == b'\n').count();
            self.reader.consume(amt);

            if found {
                return Ok(true);
            }
        }
    }

    /// Copy bytes up to (not including) the next whitespace byte into `self.token`.
    ///
    /// A token may straddle several `fill_buf` chunks.
    fn read_token_bytes(&mut self) -> Result<()> {
        self.token.clear();
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if buf.is_empty() {
                return Ok(());
            }

            match buf.iter().position(|&b| is_space(b)) {
                Some(i) => {
                    self.token.extend_from_slice(&buf[..i]);
                    self.reader.consume(i);
                    return Ok(());
                }
                None => {
                    let amt = buf.len();
                    self.token.extend_from_slice(buf);
                    self.reader.consume(amt);
                }
            }
        }
    }
}

/// ASCII whitespace, plus vertical tab and the four information separators (0x1c to 0x1f).
fn is_space(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0b || (0x1c..=0x1f).contains(&b)
}

impl<R: Read> Tokens<BufReader<R>> {
    pub fn from_read(reader: R) -> Self {
        Self::new(BufReader::new(reader))
    }
}

impl Tokens<BufReader<io::Stdin>> {
    pub fn stdin() -> Self {
        Self::from_read(io::stdin())
    }
}
