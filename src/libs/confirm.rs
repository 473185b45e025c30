//! Confirmation gate for destructive actions.
//!
//! Resetting the day and clearing history ask the user first. The question
//! is routed through [`ConfirmGate`] so the tracker does not depend on a
//! terminal: the CLI uses [`PromptGate`], `--force` and tests use
//! [`FixedAnswer`].

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

pub trait ConfirmGate {
    /// Returns `true` if the user agreed to proceed.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Interactive yes/no prompt, defaulting to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptGate;

impl ConfirmGate for PromptGate {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}

/// Answers every prompt the same way without asking.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmGate for FixedAnswer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        tracing::debug!(prompt, answer = self.0, "confirmation answered without prompting");
        Ok(self.0)
    }
}

/// Picks the gate for a command's `--force` flag.
pub fn gate_for(force: bool) -> Box<dyn ConfirmGate> {
    if force {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(PromptGate)
    }
}
