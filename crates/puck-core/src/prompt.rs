//! Interactive yes/no confirmation

use dialoguer::Input;
use tracing::debug;

/// Asks the user a yes/no question
pub trait Prompter {
    /// Returns true only for an explicit yes
    fn confirm(&self, question: &str) -> bool;
}

/// Reads one answer line from the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, question: &str) -> bool {
        let answer = Input::<String>::new()
            .with_prompt(format!("{} [y/n]", question))
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => is_yes(&answer),
            Err(e) => {
                debug!("Prompt failed, treating as no: {}", e);
                false
            }
        }
    }
}

/// Only `y` or `Y` counts as yes
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y")
}
