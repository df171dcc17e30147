//! Interactive answers.
//!
//! Generators ask through the [`Prompter`] trait so they can be driven by the
//! terminal ([`TerminalPrompter`]) or by a fixed list of answers
//! ([`ScriptedPrompter`]).

use std::cell::RefCell;
use std::collections::VecDeque;

use dialoguer::{Confirm, Input};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Checks one text answer; `Err` holds the message shown to the user.
pub type Validator = fn(&str) -> Result<(), String>;

pub trait Prompter {
    /// Ask for a line of text until `validate` accepts it.
    fn input(&self, prompt: &str, validate: Validator) -> ScaffoldResult<String>;

    fn confirm(&self, prompt: &str, default: bool) -> ScaffoldResult<bool>;
}

/// Prompts on the terminal with `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, validate: Validator) -> ScaffoldResult<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|value: &String| validate(value))
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, prompt: &str, default: bool) -> ScaffoldResult<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
}

/// Replays pre-recorded answers in order.
///
/// A text answer that fails validation is reported as
/// [`ScaffoldError::InvalidName`] instead of being asked again.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompter {
            answers: RefCell::new(answers.into_iter().collect()),
        }
    }

    pub fn text(self, answer: &str) -> Self {
        self.answers.borrow_mut().push_back(Answer::Text(answer.to_string()));
        self
    }

    pub fn confirm(self, answer: bool) -> Self {
        self.answers.borrow_mut().push_back(Answer::Confirm(answer));
        self
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> ScaffoldResult<Answer> {
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ScaffoldError::Prompt(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, validate: Validator) -> ScaffoldResult<String> {
        match self.next(prompt)? {
            Answer::Text(text) => {
                validate(&text).map_err(|reason| ScaffoldError::InvalidName {
                    input: text.clone(),
                    reason,
                })?;
                Ok(text.trim().to_string())
            }
            Answer::Confirm(_) => Err(ScaffoldError::Prompt(format!(
                "expected a text answer for '{prompt}', got a confirmation"
            ))),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> ScaffoldResult<bool> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            Answer::Text(_) => Err(ScaffoldError::Prompt(format!(
                "expected a confirmation for '{prompt}', got text"
            ))),
        }
    }
}

// ── Validators ──────────────────────────────────────────────────────

/// Non-empty after trimming.
pub fn required(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        Err("a value is required".into())
    } else {
        Ok(())
    }
}

/// Letters, digits, spaces, `-` and `_` only, and something left once
/// converted to a kebab-case file name.
pub fn artifact_name(input: &str) -> Result<(), String> {
    required(input)?;
    if !input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err("only letters, digits, spaces, '-' and '_' are allowed".into());
    }
    if ngforge_core::case::to_kebab_case(input).trim_matches('-').is_empty() {
        return Err("the name must contain at least one letter or digit".into());
    }
    Ok(())
}
