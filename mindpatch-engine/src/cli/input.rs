//! Line-based input
//!
//! Reads stances and yes/no answers from any `BufRead`, so the whole
//! playthrough can be driven from a script or a test buffer.

use std::io::{BufRead, Write};
use thiserror::Error;

use crate::cli::DriverError;
use crate::core::stance::{on_scale, Stance, STANCE_MAX, STANCE_MIN};

/// Why a typed stance was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StanceInputError {
    /// Not an integer.
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    /// Outside the slider scale.
    #[error("{0} is outside {min}..={max}", min = STANCE_MIN, max = STANCE_MAX)]
    OffScale(Stance),
}

/// Parse one line of stance input. An empty line picks `default`.
pub fn parse_stance(line: &str, default: Stance) -> Result<Stance, StanceInputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    let value: Stance = trimmed
        .parse()
        .map_err(|_| StanceInputError::NotANumber(trimmed.to_string()))?;

    if !on_scale(value) {
        return Err(StanceInputError::OffScale(value));
    }

    Ok(value)
}

/// Prompting wrapper over an input and an output stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap a reader and a writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a trailing newline and flush.
    pub fn write(&mut self, text: &str) -> Result<(), DriverError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write a line.
    pub fn line(&mut self, text: &str) -> Result<(), DriverError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line; `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>, DriverError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    /// Ask for a stance until a valid one is given. `None` at end of input.
    pub fn ask_stance(&mut self, prompt: &str, default: Stance) -> Result<Option<Stance>, DriverError> {
        loop {
            self.write(&format!("{} [{}-{}, Enter = {}]: ", prompt, STANCE_MIN, STANCE_MAX, default))?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match parse_stance(&line, default) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.line(&format!("  {}", e))?,
            }
        }
    }

    /// Ask a yes/no question; anything but `y`/`yes` (or end of input) is no.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, DriverError> {
        self.write(prompt)?;
        Ok(self
            .read_line()?
            .map(|l| matches!(l.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    /// Recover the output stream (tests inspect what was written).
    pub fn into_output(self) -> W {
        self.output
    }
}
