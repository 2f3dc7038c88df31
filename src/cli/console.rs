//! Terminal implementation of [`Operator`].

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::services::Operator;

pub struct ConsoleOperator {
    assume_yes: bool,
}

impl ConsoleOperator {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

/// `y`/`yes` (any case) confirms; anything else declines.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl Operator for ConsoleOperator {
    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} {} ", question.bright_yellow(), "[y/N]".dimmed());
        let _ = stderr.flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                tracing::warn!("could not read confirmation: {}", e);
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message.bright_cyan().bold());
    }
}
