use std::fmt;
use std::io::{self, Write};

use crate::core::constants::script::NEWLINE;

/// Appends CRLF-terminated lines to a borrowed output stream.
///
/// The first write error is kept and every later line is skipped, so a
/// sequence of `line` calls never has to check results one by one.
pub struct ScriptWriter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    lines_written: usize,
    error: Option<io::Error>,
}

impl<'a, W: Write + ?Sized> ScriptWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self {
            out,
            lines_written: 0,
            error: None,
        }
    }

    /// Write one formatted line followed by `\r\n`
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }

        let result = self
            .out
            .write_fmt(args)
            .and_then(|()| self.out.write_all(NEWLINE.as_bytes()));

        match result {
            Ok(()) => self.lines_written += 1,
            Err(err) => self.error = Some(err),
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Return the first write error, if any. The stream is not flushed.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
