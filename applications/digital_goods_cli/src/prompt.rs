//   Copyright 2024 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{
    io,
    io::{BufRead, Write},
};

use thiserror::Error;

/// Asks for a single line of input, unless a value was already given on the command line.
pub struct Prompt {
    label: String,
    default: Option<String>,
    value: Option<String>,
}

impl Prompt {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.into(),
            default: None,
            value: None,
        }
    }

    pub fn with_default<T: ToString>(mut self, default: T) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn with_value<T: ToString>(mut self, value: Option<T>) -> Self {
        self.value = value.map(|v| v.to_string());
        self
    }

    pub fn ask(self) -> Result<String, PromptError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.ask_with(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Re-asks on empty input when there is no default.
    fn ask_with<R: BufRead, W: Write>(self, input: &mut R, output: &mut W) -> Result<String, PromptError> {
        if let Some(value) = self.value {
            return Ok(value);
        }
        loop {
            match self.default.as_ref().filter(|s| !s.is_empty()) {
                Some(default) => writeln!(output, "{} (Default: {})", self.label, default)?,
                None => writeln!(output, "{}", self.label)?,
            }
            write!(output, "> ")?;
            output.flush()?;

            let mut line_buf = String::new();
            if input.read_line(&mut line_buf)? == 0 {
                return Err(PromptError::EndOfInput(self.label));
            }
            writeln!(output)?;
            let trimmed = line_buf.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            if let Some(default) = self.default {
                return Ok(default);
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("No input given for '{0}'")]
    EndOfInput(String),
    #[error(transparent)]
    IoError(#[from] io::Error),
}
