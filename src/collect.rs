//! Declaring a case's input layout up front instead of reading it token by token.
//!
//! An `ArgPlan` is an ordered list of named arguments. Collecting a plan reads each argument in
//! turn; a list's length can be fixed, read fresh from the input, or taken from an earlier integer
//! argument by name.
//!
//! ```
//! use codejam::collect::{ArgPlan, Length, TokenKind};
//! use codejam::Tokens;
//!
//! let plan = ArgPlan::new()
//!     .arg("n", TokenKind::Int)
//!     .arg("name", TokenKind::Text)
//!     .list("scores", Length::named("n"), TokenKind::Int);
//!
//! let mut tokens = Tokens::new("3 ada 10 20 30".as_bytes());
//! let args = plan.collect(&mut tokens).unwrap();
//! assert_eq!("ada", args.text("name").unwrap());
//! assert_eq!(vec![10, 20, 30], args.ints("scores").unwrap());
//! ```

use crate::error::{Error, Result};
use crate::runner::Solver;
use crate::tokens::Tokens;
use std::io::BufRead;

/// How a single token is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Int,
    Float,
    Text,
}

/// Where a list's length comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Length {
    Fixed(usize),
    /// Read a fresh count token right before the list.
    Counted,
    /// The value of an earlier `Int` argument.
    Named(String),
}

impl Length {
    pub fn named(name: impl Into<String>) -> Self {
        Length::Named(name.into())
    }
}

/// A collected argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Ints are accepted as floats too.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Step {
    One(TokenKind),
    Many(Length, TokenKind),
}

/// An ordered list of `(name, kind)` pairs to read for every case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgPlan {
    steps: Vec<(String, Step)>,
    pass_tokens: bool,
}

impl ArgPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, name: impl Into<String>, kind: TokenKind) -> Self {
        self.steps.push((name.into(), Step::One(kind)));
        self
    }

    pub fn list(mut self, name: impl Into<String>, length: Length, kind: TokenKind) -> Self {
        self.steps.push((name.into(), Step::Many(length, kind)));
        self
    }

    /// Also hand the solver the token stream itself, positioned after the collected arguments.
    pub fn with_tokens(mut self) -> Self {
        self.pass_tokens = true;
        self
    }

    pub fn passes_tokens(&self) -> bool {
        self.pass_tokens
    }

    /// Read every argument of the plan, in order.
    pub fn collect<'t, R: BufRead>(&self, tokens: &'t mut Tokens<R>) -> Result<Args<'t, R>> {
        let mut values: Vec<(String, Value)> = Vec::with_capacity(self.steps.len());

        for (name, step) in &self.steps {
            let value = match step {
                Step::One(kind) => read_value(tokens, *kind)?,
                Step::Many(length, kind) => {
                    let n = match length {
                        Length::Fixed(n) => *n,
                        Length::Counted => tokens.next_token()?,
                        Length::Named(len_name) => named_length(&values, len_name, tokens)?,
                    };
                    let list = (0..n)
                        .map(|_| read_value(tokens, *kind))
                        .collect::<Result<_>>()?;
                    Value::List(list)
                }
            };
            values.push((name.clone(), value));
        }

        let tokens = if self.pass_tokens { Some(tokens) } else { None };
        Ok(Args { values, tokens })
    }

    /// A per-case solver that collects this plan before every call to `solve`.
    pub fn per_case<'a, R, S, E, F>(self, mut solve: F) -> Solver<'a, R, S, E>
    where
        R: BufRead + 'a,
        S: 'a,
        E: From<Error> + 'a,
        F: FnMut(Args<'_, R>) -> std::result::Result<S, E> + 'a,
    {
        Solver::per_case(move |tokens: &mut Tokens<R>| {
            let args = self.collect(tokens)?;
            solve(args)
        })
    }
}

fn read_value<R: BufRead>(tokens: &mut Tokens<R>, kind: TokenKind) -> Result<Value> {
    Ok(match kind {
        TokenKind::Int => Value::Int(tokens.next_token()?),
        TokenKind::Float => Value::Float(tokens.next_token()?),
        TokenKind::Text => Value::Text(tokens.next_token()?),
    })
}

fn named_length<R: BufRead>(
    values: &[(String, Value)],
    name: &str,
    tokens: &Tokens<R>,
) -> Result<usize> {
    let n = lookup(values, name)
        .and_then(Value::as_int)
        .ok_or_else(|| Error::UnknownArgument {
            name: name.to_owned(),
        })?;

    usize::try_from(n).map_err(|err| Error::MalformedToken {
        token: n.to_string(),
        type_name: "usize",
        line: tokens.line(),
        reason: err.to_string(),
    })
}

fn lookup<'v>(values: &'v [(String, Value)], name: &str) -> Option<&'v Value> {
    // Later arguments shadow earlier ones with the same name.
    values
        .iter()
        .rev()
        .find(|(n, _)| n == name)
        .map(|(_, value)| value)
}

/// The arguments collected for one case.
#[derive(Debug)]
pub struct Args<'t, R> {
    values: Vec<(String, Value)>,
    tokens: Option<&'t mut Tokens<R>>,
}

impl<'t, R> Args<'t, R> {
    pub fn get(&self, name: &str) -> Option<&Value> {
        lookup(&self.values, name)
    }

    pub fn int(&self, name: &str) -> Result<i64> {
        self.typed(name, Value::as_int)
    }

    pub fn float(&self, name: &str) -> Result<f64> {
        self.typed(name, Value::as_float)
    }

    pub fn text(&self, name: &str) -> Result<&str> {
        self.typed(name, Value::as_text)
    }

    pub fn list(&self, name: &str) -> Result<&[Value]> {
        self.typed(name, Value::as_list)
    }

    pub fn ints(&self, name: &str) -> Result<Vec<i64>> {
        self.list(name)?
            .iter()
            .map(|value| value.as_int().ok_or_else(|| unknown(name)))
            .collect()
    }

    pub fn floats(&self, name: &str) -> Result<Vec<f64>> {
        self.list(name)?
            .iter()
            .map(|value| value.as_float().ok_or_else(|| unknown(name)))
            .collect()
    }

    /// The token stream, if the plan asked for it with `with_tokens`.
    pub fn tokens(&mut self) -> Result<&mut Tokens<R>> {
        match &mut self.tokens {
            Some(tokens) => Ok(&mut **tokens),
            None => Err(unknown("tokens")),
        }
    }

    fn typed<'s, T: 's>(
        &'s self,
        name: &str,
        get: impl FnOnce(&'s Value) -> Option<T>,
    ) -> Result<T> {
        self.get(name).and_then(get).ok_or_else(|| unknown(name))
    }
}

fn unknown(name: &str) -> Error {
    Error::UnknownArgument {
        name: name.to_owned(),
    }
}
