use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use std::io::{self, BufRead};

/// Line-oriented user input.
pub trait Prompter {
    /// Ask `message` and return the raw answer.
    ///
    /// `Ok(None)` means the user aborted the prompt (Esc, Ctrl-C or end of input).
    fn ask(&mut self, message: &str) -> Result<Option<String>>;
}

/// Interactive prompts backed by `inquire`, with a plain stdin fallback
/// for when input is piped in.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line(message: &str) -> Result<Option<String>> {
        eprint!("{message} ");

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        Ok((read > 0).then_some(line))
    }
}

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        match Text::new(message).prompt() {
            Ok(answer) => Ok(Some(answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(InquireError::NotTTY) => Self::read_line(message),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}
