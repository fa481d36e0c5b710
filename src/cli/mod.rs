//! CLI layer
//!
//! Command-line workflows, prompting and terminal output.

pub mod commands;
pub mod output;
pub mod prompt;

pub use output::Output;
pub use prompt::{DefaultsPrompter, PromptError, Prompter, TerminalPrompter};
