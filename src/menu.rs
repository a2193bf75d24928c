//! The three-way menu shown at startup.

use crate::error::KeepError;
use std::io::{self, BufRead, Write};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Backup,
    Restore,
    Initialize,
}

impl Mode {
    /// Parse one line of menu input. Only "1", "2" and "3" are accepted;
    /// there is no retry.
    pub fn from_choice(input: &str) -> Result<Self, KeepError> {
        match input.trim() {
            "1" => Ok(Mode::Backup),
            "2" => Ok(Mode::Restore),
            "3" => Ok(Mode::Initialize),
            other => Err(KeepError::InvalidChoice(other.to_string())),
        }
    }
}

/// Source of the user's menu choice
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Show the menu and return the raw line the user entered
    fn read_choice(&mut self) -> io::Result<String>;
}

/// Interactive prompt on stdin/stdout
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Default for StdinPrompt<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for StdinPrompt<R, W> {
    fn read_choice(&mut self) -> io::Result<String> {
        writeln!(self.output, "Choose an action:")?;
        writeln!(self.output, "1. Backup")?;
        writeln!(self.output, "2. Restore")?;
        writeln!(self.output, "3. Initialize")?;
        write!(self.output, "Enter your choice (1/2/3): ")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_choices() {
        assert_eq!(Mode::from_choice("1").unwrap(), Mode::Backup);
        assert_eq!(Mode::from_choice("2\n").unwrap(), Mode::Restore);
        assert_eq!(Mode::from_choice(" 3\r\n").unwrap(), Mode::Initialize);
    }

    #[test]
    fn test_invalid_choices() {
        for input in ["4", "", "abc", "12", "1.", "0"] {
            let err = Mode::from_choice(input).unwrap_err();
            assert!(matches!(err, KeepError::InvalidChoice(_)), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_stdin_prompt_prints_menu_and_reads_line() {
        let mut output = Vec::new();
        let choice = {
            let mut prompt = StdinPrompt::with_io(&b"2\nignored\n"[..], &mut output);
            prompt.read_choice().unwrap()
        };

        assert_eq!(choice, "2\n");
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("1. Backup"));
        assert!(shown.contains("2. Restore"));
        assert!(shown.contains("3. Initialize"));
    }

    #[test]
    fn test_stdin_prompt_eof_is_empty_choice() {
        let mut prompt = StdinPrompt::with_io(&b""[..], io::sink());
        let choice = prompt.read_choice().unwrap();
        assert!(Mode::from_choice(&choice).is_err());
    }

    proptest! {
        #[test]
        fn prop_anything_else_is_rejected(input in ".*") {
            prop_assume!(!matches!(input.trim(), "1" | "2" | "3"));
            prop_assert!(Mode::from_choice(&input).is_err());
        }
    }
}
