//! Terminal output for error lists.

use std::io::{self, Write};

use crate::{Error, Errors};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes diagnostics for people to read.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    emitted: usize,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            emitted: 0,
        }
    }

    pub fn emit(&mut self, error: &Error) {
        let _ = writeln!(self.writer, "{}", error.show("", self.colors));
        self.emitted += 1;
    }

    pub fn emit_all(&mut self, errors: &Errors) {
        for error in errors {
            self.emit(error);
        }
    }

    /// An error that has no source location, like an unreadable file.
    pub fn emit_message(&mut self, message: &str) {
        if self.colors {
            let _ = writeln!(
                self.writer,
                "{}error{}: {message}",
                colors::ERROR,
                colors::RESET
            );
        } else {
            let _ = writeln!(self.writer, "error: {message}");
        }
        self.emitted += 1;
    }

    /// `found N errors` line; prints nothing when nothing was emitted.
    pub fn emit_summary(&mut self) {
        if self.emitted == 0 {
            return;
        }
        let text = format!("found {} error{}", self.emitted, plural_s(self.emitted));
        if self.colors {
            let _ = writeln!(self.writer, "{}{text}{}", colors::ERROR, colors::RESET);
        } else {
            let _ = writeln!(self.writer, "{text}");
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode) -> Self {
        let is_tty = io::IsTerminal::is_terminal(&io::stderr());
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
