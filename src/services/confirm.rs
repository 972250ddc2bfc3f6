//! Confirmation capability
//!
//! The cancel action asks the user before throwing allocations away. The
//! asking is injected so the engine never talks to a terminal directly.

use std::io::{self, BufRead, Write};

/// The user's answer to a yes/no prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResponse {
    Yes,
    No,
    /// Prompt closed without choosing
    Dismissed,
}

impl ConfirmResponse {
    /// Only an explicit yes counts
    pub fn is_affirmative(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Interpret a typed answer ("y", "yes", "n", "no"); anything else dismisses
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => Self::Yes,
            "n" | "no" => Self::No,
            _ => Self::Dismissed,
        }
    }
}

/// Something that can ask the user a yes/no question
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> ConfirmResponse;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> ConfirmResponse,
{
    fn confirm(&mut self, message: &str) -> ConfirmResponse {
        self(message)
    }
}

/// Answers every prompt the same way (`--yes` / `--no` on the CLI)
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub ConfirmResponse);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _message: &str) -> ConfirmResponse {
        self.0
    }
}

/// Asks on a line-oriented reader/writer pair, normally stdin/stdout
pub struct PromptConfirm<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, message: &str) -> ConfirmResponse {
        if write!(self.writer, "{} (y/n): ", message).is_err() || self.writer.flush().is_err() {
            return ConfirmResponse::Dismissed;
        }

        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // EOF means nobody is there to answer
            Ok(0) | Err(_) => ConfirmResponse::Dismissed,
            Ok(_) => ConfirmResponse::from_answer(&input),
        }
    }
}
