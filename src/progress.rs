//! A crude progress bar: one `@` per finished case, one `-` per pending case.

use std::io::{self, Write};
use tracing::warn;

#[derive(Debug)]
pub struct Progress<W> {
    out: W,
    enabled: bool,
    done: usize,
    /// Unknown for generating solvers, in which case only the `@`s are drawn.
    total: Option<usize>,
}

impl Progress<io::Stderr> {
    pub fn stderr(enabled: bool, total: Option<usize>) -> Self {
        Self::new(io::stderr(), enabled, total)
    }
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, enabled: bool, total: Option<usize>) -> Self {
        Self {
            out,
            enabled,
            done: 0,
            total,
        }
    }

    pub fn start(&mut self) {
        self.draw(false);
    }

    pub fn advance(&mut self) {
        self.done += 1;
        self.draw(false);
    }

    /// Redraw one last time and end the line.
    pub fn finish(&mut self) {
        self.draw(true);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, last: bool) {
        if !self.enabled {
            return;
        }

        let pending = self.total.map_or(0, |total| total.saturating_sub(self.done));
        let end = if last { "\n" } else { "" };
        let result = write!(
            self.out,
            "\r{}{}{}",
            "@".repeat(self.done),
            "-".repeat(pending),
            end
        )
        .and_then(|()| self.out.flush());

        if let Err(err) = result {
            warn!(error = %err, "can't draw progress bar; disabling it");
            self.enabled = false;
        }
    }
}
