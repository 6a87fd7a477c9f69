//! Whitespace-token reading and interactive prompts.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use mathutil_core::error::MathError;

/// Reads whitespace-separated tokens from a buffered source.
///
/// Several values may share one line; a line is only consumed once all of
/// its tokens have been taken.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>, MathError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Read and parse the next token as `T`.
    ///
    /// `expected` names the value kind in error messages.
    pub fn read<T: FromStr>(&mut self, expected: &'static str) -> Result<T, MathError> {
        let token = self
            .next_token()?
            .ok_or(MathError::UnexpectedEof(expected))?;
        token
            .parse()
            .map_err(|_| MathError::invalid(expected, token))
    }

    pub fn read_i64(&mut self) -> Result<i64, MathError> {
        self.read("integer")
    }

    pub fn read_f64(&mut self) -> Result<f64, MathError> {
        self.read("number")
    }
}

/// Writes a prompt, then reads the answer from a [`TokenReader`].
pub struct Prompter<R, W> {
    reader: TokenReader<R>,
    out: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// With `quiet` set, prompts are not written.
    pub fn new(source: R, out: W, quiet: bool) -> Self {
        Self {
            reader: TokenReader::new(source),
            out,
            quiet,
        }
    }

    fn prompt(&mut self, message: &str) -> Result<(), MathError> {
        if !self.quiet {
            write!(self.out, "{message}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn prompt_i64(&mut self, message: &str) -> Result<i64, MathError> {
        self.prompt(message)?;
        let value = self.reader.read_i64()?;
        tracing::debug!(prompt = message, value, "read integer");
        Ok(value)
    }

    pub fn prompt_f64(&mut self, message: &str) -> Result<f64, MathError> {
        self.prompt(message)?;
        let value = self.reader.read_f64()?;
        tracing::debug!(prompt = message, value, "read number");
        Ok(value)
    }

    /// Give back the prompt writer.
    pub fn into_writer(self) -> W {
        self.out
    }
}
