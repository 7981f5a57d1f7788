//! Line-based prompting over any `BufRead`/`Write` pair
//!
//! Every answer is parsed into a [`ParseOutcome`]; prompts loop until the
//! parser accepts the line or input ends.

use std::io::{BufRead, Write};
use tracing::{debug, trace};

use crate::error::{Result, TrainlogError};
use crate::models::Category;

/// Result of parsing one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// Accepted value
    Valid(T),
    /// Rejected; the message is printed before asking again
    Retry(String),
}

/// Answer to the completion prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChoice {
    Complete,
    Pause,
}

/// Parse a whole-minute duration
pub fn parse_duration(line: &str) -> ParseOutcome<i64> {
    match first_token(line).map(str::parse::<i64>) {
        Some(Ok(minutes)) => ParseOutcome::Valid(minutes),
        Some(Err(_)) => ParseOutcome::Retry(
            "Duration must be a whole number of minutes. Please try again.".to_string(),
        ),
        None => ParseOutcome::Retry("Please enter a duration in minutes.".to_string()),
    }
}

/// Parse a category menu answer. Never rejects: unknown choices become `Other`.
pub fn parse_category_choice(line: &str) -> Category {
    first_token(line)
        .and_then(|token| token.parse::<i64>().ok())
        .map(Category::from_menu_choice)
        .unwrap_or(Category::Other)
}

/// Parse the y/n answer of the completion flow
pub fn parse_completion_choice(line: &str) -> ParseOutcome<CompletionChoice> {
    match line.trim() {
        "y" | "Y" => ParseOutcome::Valid(CompletionChoice::Complete),
        "n" | "N" => ParseOutcome::Valid(CompletionChoice::Pause),
        _ => ParseOutcome::Retry(
            "Invalid option. Press 'y' to complete or 'n' to pause.".to_string(),
        ),
    }
}

/// Parse the "add another?" answer; only `y` continues
pub fn parse_add_another(line: &str) -> bool {
    matches!(line.trim(), "y" | "Y")
}

/// Parse a date token. The text is kept as typed; only blank answers are rejected.
pub fn parse_date(line: &str) -> ParseOutcome<String> {
    match first_token(line) {
        Some(token) => ParseOutcome::Valid(token.to_string()),
        None => ParseOutcome::Retry("Please enter a date (MM-DD).".to_string()),
    }
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Interactive console over an input reader and output writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text without a newline and flush so the prompt is visible
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one line
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line without its terminator. `prompt` names the question for errors.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            debug!(prompt = prompt.trim(), "Input closed");
            return Err(TrainlogError::end_of_input(prompt));
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        trace!(answer = %line, "Read answer");
        Ok(line)
    }

    /// Show `prompt` and return the raw answer line
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.print(prompt)?;
        self.read_line(prompt)
    }

    /// Show `prompt` once, then read answers until `parse` accepts one.
    /// Rejection messages are printed on their own line.
    pub fn ask_until<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> ParseOutcome<T>,
    {
        self.print(prompt)?;
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                ParseOutcome::Valid(value) => return Ok(value),
                ParseOutcome::Retry(message) => {
                    debug!(answer = %line, "Answer rejected");
                    self.println(&message)?;
                }
            }
        }
    }

    /// Give back the writer, mainly for tests
    pub fn into_output(self) -> W {
        self.output
    }
}
