use crate::runner::solution::{Rendered, Solution};
use std::fmt;
use std::io::{self, Write};

/// What goes between `Case #i:` and the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Space,
    Newline,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Space => " ",
            Separator::Newline => "\n",
        }
    }
}

/// One line of output, without its trailing newline: `Case #{case}:{separator}{solution}`.
pub struct CaseLine<'a, S: ?Sized> {
    pub case: usize,
    pub separator: Separator,
    pub solution: &'a S,
}

impl<S: Solution + ?Sized> fmt::Display for CaseLine<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Case #{}:{}{}",
            self.case,
            self.separator.as_str(),
            Rendered(self.solution)
        )
    }
}

/// Writes numbered case lines, flushing after every one.
///
/// Flushing each line lets a downstream reader (`head`, `tee`, a judge) see solutions as soon as
/// they are ready.
#[derive(Debug)]
pub struct CasePrinter<W> {
    out: W,
    separator: Separator,
    printed: usize,
}

impl<W: Write> CasePrinter<W> {
    pub fn new(out: W, separator: Separator) -> Self {
        Self {
            out,
            separator,
            printed: 0,
        }
    }

    /// Print the solution to the next case.
    pub fn print_case<S: Solution + ?Sized>(&mut self, solution: &S) -> io::Result<()> {
        let case = self.printed + 1;
        let line = CaseLine {
            case,
            separator: self.separator,
            solution,
        };
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;

        self.printed = case;
        Ok(())
    }

    /// Number of lines fully written and flushed.
    pub fn printed(&self) -> usize {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
