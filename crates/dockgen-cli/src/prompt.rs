//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::io::{self, BufRead, Write};

use crate::style::Style;

/// Typing this ends a repeated step.
pub const DONE_SENTINEL: &str = "done";

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input stream closed")]
    InputClosed,
    #[error("failed to read input")]
    Read { source: io::Error },
    #[error("failed to write prompt")]
    Write { source: io::Error },
}

/// One line typed during a repeated step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Value(String),
    Done,
}

impl Entry {
    /// Only an exact, case-sensitive `done` ends the step.
    pub fn classify(line: String) -> Self {
        if line == DONE_SENTINEL {
            Entry::Done
        } else {
            Entry::Value(line)
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Print one line of already styled text.
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}").map_err(|e| PromptError::Write { source: e })
    }

    /// Print a blank line, then `prompt: `, and read the answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        let styled = self.style.prompt(&format!("{prompt}: "));
        write!(self.output, "\n{styled}")
            .and_then(|()| self.output.flush())
            .map_err(|e| PromptError::Write { source: e })?;
        self.read_line()
    }

    /// Blocks for one full line; surrounding whitespace and the newline are stripped.
    pub fn read_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PromptError::Read { source: e })?;
        if read == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_owned())
    }

    /// Keep asking until the user types `done`; every other line, even an
    /// empty one, is kept in order.
    pub fn collect_many(&mut self, prompt: &str) -> Result<Vec<String>, PromptError> {
        let mut entries = Vec::new();
        loop {
            match Entry::classify(self.ask(prompt)?) {
                Entry::Done => break,
                Entry::Value(value) => entries.push(value),
            }
        }
        tracing::debug!(prompt, count = entries.len(), "collected entries");
        Ok(entries)
    }

    /// Ask once. A read failure is reported and treated as an empty answer.
    pub fn collect_one(&mut self, prompt: &str) -> String {
        match self.ask(prompt) {
            Ok(line) => line,
            // arch-lint: allow(no-silent-result-drop) reason="an unreadable answer is reported and continues as empty"
            Err(e) => {
                tracing::warn!(error = %e, prompt, "continuing with an empty answer");
                let message = self.style.error(&format!("Error reading input: {e}"));
                if let Err(write_err) = writeln!(self.output, "\n{message}") {
                    tracing::warn!(error = %write_err, "failed to report input error");
                }
                String::new()
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
