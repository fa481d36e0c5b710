//! Interactive prompting
//!
//! The workflows ask for input only through [`Prompter`], so the terminal can be
//! swapped for flags, defaults, or a scripted answer list.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use std::io::IsTerminal;
use thiserror::Error;
use tracing::debug;

/// Errors raised while collecting input
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("A value for '{0}' is required; pass it as a flag when running without a terminal")]
    InputRequired(String),

    #[error("Prompt failed: {0}")]
    Terminal(String),
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        PromptError::Terminal(err.to_string())
    }
}

/// Source of operator input
pub trait Prompter {
    /// Ask for free text. Without a default the answer is required.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Ask for a secret without echoing it
    fn password(&self, prompt: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
        if let Some(d) = default {
            input = input
                .default(d.to_string())
                .allow_empty(true)
                .show_default(!d.is_empty());
        }
        Ok(input.interact_text()?)
    }

    fn password(&self, prompt: &str) -> Result<String, PromptError> {
        Ok(Password::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact()?)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// Answers every prompt with its default; required values fail
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        debug!(prompt, ?default, "non-interactive input");
        default
            .map(|d| d.to_string())
            .ok_or_else(|| PromptError::InputRequired(prompt.to_string()))
    }

    fn password(&self, prompt: &str) -> Result<String, PromptError> {
        Err(PromptError::InputRequired(prompt.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        debug!(prompt, default, "non-interactive confirm");
        Ok(default)
    }
}

/// Pick the prompter for this process
///
/// Falls back to defaults when asked to, or when stdin is not a terminal.
pub fn select_prompter(no_input: bool) -> Box<dyn Prompter> {
    if no_input || !std::io::stdin().is_terminal() {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(TerminalPrompter::new())
    }
}
