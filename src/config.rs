//! Run-wide switches, passed explicitly into the runner.

use crate::runner::Separator;
use std::fmt;
use std::io::{self, Write};

/// Options for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Put each solution on its own line, after `Case #i:`.
    pub insert_newline: bool,
    /// Draw a progress bar on stderr.
    pub emit_progress: bool,
    /// Let `debug_line!` print to stderr.
    pub debug_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            insert_newline: false,
            emit_progress: false,
            debug_enabled: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insert_newline(mut self, insert_newline: bool) -> Self {
        self.insert_newline = insert_newline;
        self
    }

    pub fn with_progress(mut self, emit_progress: bool) -> Self {
        self.emit_progress = emit_progress;
        self
    }

    pub fn with_debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    pub fn separator(&self) -> Separator {
        if self.insert_newline {
            Separator::Newline
        } else {
            Separator::Space
        }
    }

    /// Print a diagnostic line to stderr, if debug printing is on.
    ///
    /// Usually called through `debug_line!`.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        // Diagnostics must never abort a run.
        let _ = self.debug_to(io::stderr(), args);
    }

    pub fn debug_to(&self, mut out: impl Write, args: fmt::Arguments<'_>) -> io::Result<()> {
        if self.debug_enabled {
            writeln!(out, "{}", args)?;
        }
        Ok(())
    }
}

/// `println!`-style diagnostics to stderr, gated by `Config::debug_enabled`.
///
/// ```
/// use codejam::{debug_line, Config};
///
/// let config = Config::new().with_debug(false);
/// debug_line!(config, "never printed: {}", 42);
/// ```
#[macro_export]
macro_rules! debug_line {
    ($config:expr, $($arg:tt)*) => {
        $config.debug(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(!config.insert_newline);
        assert!(!config.emit_progress);
        assert!(config.debug_enabled);
        assert_eq!(Separator::Space, config.separator());
        assert_eq!(
            Separator::Newline,
            config.with_insert_newline(true).separator()
        );
    }

    #[test]
    fn debug_output_is_gated() {
        let mut out = Vec::new();
        Config::new()
            .debug_to(&mut out, format_args!("x = {}", 3))
            .unwrap();
        assert_eq!("x = 3\n", String::from_utf8(out).unwrap());

        let mut out = Vec::new();
        Config::new()
            .with_debug(false)
            .debug_to(&mut out, format_args!("x = {}", 3))
            .unwrap();
        assert!(out.is_empty());
    }
}
