//! In-place line updates on interactive outputs.
//!
//! [`TerminalLine`] rewrites the current line with a trailing carriage
//! return when its writer is a terminal. Redirected output (pipes, files,
//! CI logs) gets one newline-terminated line per update instead, so nothing
//! is lost to `\r` overwrites.

use std::io::{self, IsTerminal, Stdout, Write};

/// A writer that can repeatedly overwrite one output line.
#[derive(Debug)]
pub struct TerminalLine<W: Write> {
    writer: W,
    interactive: bool,
    pending: bool,
}

impl TerminalLine<Stdout> {
    /// Wrap standard output, detecting whether it is a terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let interactive = stdout.is_terminal();
        Self::new(stdout, interactive)
    }
}

impl<W: Write> TerminalLine<W> {
    /// Wrap an arbitrary writer with explicit interactivity.
    pub fn new(writer: W, interactive: bool) -> Self {
        Self {
            writer,
            interactive,
            pending: false,
        }
    }

    /// Whether updates overwrite each other in place.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Replace the current line with `line`.
    ///
    /// On an interactive writer the line is followed by `\r` and flushed
    /// immediately; otherwise it is written as a normal line.
    pub fn update(&mut self, line: &str) -> io::Result<()> {
        if !self.interactive {
            return self.write_line(line);
        }
        write!(self.writer, "{line}\r")?;
        self.writer.flush()?;
        self.pending = true;
        Ok(())
    }

    /// Write `line` followed by a newline.
    ///
    /// Any pending in-place line is overwritten by this one.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.pending = false;
        Ok(())
    }

    /// Move past a pending in-place line so later output starts on a fresh
    /// line.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.pending {
            writeln!(self.writer)?;
            self.pending = false;
        }
        self.writer.flush()
    }

    /// Borrow the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap into the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
