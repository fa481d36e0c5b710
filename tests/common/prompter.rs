//! Scripted prompter for driving workflows without a terminal.

use quickrepo::cli::{PromptError, Prompter};
use std::collections::HashMap;
use std::sync::Mutex;

/// Answers prompts from a fixed script and records every prompt shown.
///
/// Unscripted prompts fall back to their default; required ones fail.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: HashMap<String, String>,
    confirms: HashMap<String, bool>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, prompt: &str, value: &str) -> Self {
        self.inputs.insert(prompt.to_string(), value.to_string());
        self
    }

    pub fn confirm_with(mut self, prompt: &str, value: bool) -> Self {
        self.confirms.insert(prompt.to_string(), value);
        self
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn record(&self, prompt: &str) {
        self.asked.lock().unwrap().push(prompt.to_string());
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, PromptError> {
        self.record(prompt);
        self.inputs
            .get(prompt)
            .cloned()
            .or_else(|| default.map(|d| d.to_string()))
            .ok_or_else(|| PromptError::InputRequired(prompt.to_string()))
    }

    fn password(&self, prompt: &str) -> Result<String, PromptError> {
        self.record(prompt);
        self.inputs
            .get(prompt)
            .cloned()
            .ok_or_else(|| PromptError::InputRequired(prompt.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, PromptError> {
        self.record(prompt);
        Ok(self.confirms.get(prompt).copied().unwrap_or(default))
    }
}
