//! Prompt Engine
//!
//! Two interaction shapes, both blocking until the operator answers:
//! a single-choice menu returning the chosen index, and a free-text input.
//!
//! The dispatcher is generic over [`Prompter`] so tests can script the
//! operator; [`TerminalPrompter`] is the real one, built on `dialoguer`.
//!
//! Selections return an index, never a label to re-parse: callers keep any
//! associated ids in a parallel structure alongside the labels they show.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::Result;

/// One interaction step with the operator.
pub trait Prompter {
    /// Present `options` under `message`, block until exactly one is chosen,
    /// return its index.
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize>;

    /// Ask a free-text question, block until answered, return the answer
    /// verbatim (may be empty).
    fn input(&mut self, message: &str) -> Result<String>;
}

/// `dialoguer`-backed prompter for a real terminal session.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&mut self, message: &str) -> Result<String> {
        // No validation here: answers pass through as typed, the database
        // decides what it accepts.
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
