use crate::error::{Error, Result};
use crate::tokens::{Group, Tokens};
use std::io::BufRead;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Lazily reads a fixed number of groups; see `Tokens::next_many`.
#[derive(Debug)]
pub struct Many<'a, R, G> {
    tokens: &'a mut Tokens<R>,
    remaining: usize,
    group: PhantomData<fn() -> G>,
}

impl<'a, R: BufRead, G: Group> Many<'a, R, G> {
    pub(super) fn new(tokens: &'a mut Tokens<R>, n: usize) -> Self {
        Self {
            tokens,
            remaining: n,
            group: PhantomData,
        }
    }
}

impl<R: BufRead, G: Group> Iterator for Many<'_, R, G> {
    type Item = Result<G>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(G::read_from(self.tokens))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: BufRead, G: Group> ExactSizeIterator for Many<'_, R, G> {}
impl<R: BufRead, G: Group> FusedIterator for Many<'_, R, G> {}

/// Every remaining raw token, as owned strings. Ends cleanly at end of input.
#[derive(Debug)]
pub struct Strings<'a, R> {
    tokens: &'a mut Tokens<R>,
    done: bool,
}

impl<'a, R: BufRead> Strings<'a, R> {
    pub(super) fn new(tokens: &'a mut Tokens<R>) -> Self {
        Self {
            tokens,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Strings<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.tokens.next_raw() {
            Ok(raw) => Some(Ok(raw.to_owned())),
            Err(Error::EndOfInput) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Strings<'_, R> {}
