// Confirmation workflow

use std::io::{self, BufRead, Write};

use super::error::ConfirmError;

/// How a run gates the deletion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the plan, delete nothing.
    DryRun,
    /// Print the plan and wait for a yes/no answer.
    Confirm,
    /// Print the plan, then delete.
    Announce,
    /// Delete without printing the plan.
    Silent,
}

impl Mode {
    /// Dry-run wins over everything, then confirmation, then silence.
    pub fn select(dry_run: bool, confirm: bool, silent: bool) -> Self {
        if dry_run {
            Mode::DryRun
        } else if confirm {
            Mode::Confirm
        } else if silent {
            Mode::Silent
        } else {
            Mode::Announce
        }
    }

    pub fn heading(self) -> Option<&'static str> {
        match self {
            Mode::DryRun => Some("This is a dry-run. Would delete the following files:"),
            Mode::Confirm => Some("Will delete the following files:"),
            Mode::Announce => Some("Deleting the following files:"),
            Mode::Silent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}

/// Prompts `<message> [y/n]: ` until a recognised answer arrives.
///
/// The outer `io::Result` is a failure to write the prompt; the inner one is a
/// failure to read the answer.
pub fn ask_for_confirmation(
    message: &str,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<Result<bool, ConfirmError>> {
    let mut line = String::new();
    loop {
        write!(out, "{} [y/n]: ", message)?;
        out.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            // An answer is only taken once its line is terminated; a trailing
            // fragment without a newline means the input closed mid-answer.
            Ok(_) if !line.ends_with('\n') => return Ok(Err(ConfirmError::Eof)),
            Ok(_) => {}
            Err(e) => return Ok(Err(ConfirmError::Io(e))),
        }

        match parse_answer(&line) {
            Some(Answer::Yes) => return Ok(Ok(true)),
            Some(Answer::No) => return Ok(Ok(false)),
            None => continue,
        }
    }
}
