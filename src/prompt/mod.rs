//! Operator interaction used by the sweep: pick skills, confirm cleanup.

#[cfg(feature = "cli")]
mod terminal;

#[cfg(feature = "cli")]
pub use terminal::TerminalPrompt;

use std::collections::VecDeque;

use crate::error::{Result, SweepError};

/// Answer to a prompt, or the operator backing out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Answered(T),
    Cancelled,
}

/// One entry in a multi-select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value returned when the entry is selected.
    pub value: String,
    pub label: String,
    /// Secondary text shown next to the label.
    pub hint: Option<String>,
}

/// Blocking prompt capability.
pub trait Prompt {
    /// Let the operator pick any subset of `options`; returns selected values.
    fn select_many(
        &mut self,
        message: &str,
        options: &[SelectOption],
    ) -> Result<PromptOutcome<Vec<String>>>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> Result<PromptOutcome<bool>>;
}

/// A queued answer for [`ScriptedPrompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Select(PromptOutcome<Vec<String>>),
    Confirm(PromptOutcome<bool>),
}

/// Prompt that replays queued answers in order and records every question.
///
/// Asking a question with no matching answer queued is an error.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<ScriptedAnswer>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, values: &[&str]) -> Self {
        let values = values.iter().map(|value| value.to_string()).collect();
        self.answers
            .push_back(ScriptedAnswer::Select(PromptOutcome::Answered(values)));
        self
    }

    pub fn confirm_with(mut self, answer: bool) -> Self {
        self.answers
            .push_back(ScriptedAnswer::Confirm(PromptOutcome::Answered(answer)));
        self
    }

    pub fn cancel_select(mut self) -> Self {
        self.answers
            .push_back(ScriptedAnswer::Select(PromptOutcome::Cancelled));
        self
    }

    pub fn cancel_confirm(mut self) -> Self {
        self.answers
            .push_back(ScriptedAnswer::Confirm(PromptOutcome::Cancelled));
        self
    }

    /// Messages of every prompt shown so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers that were queued but never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn select_many(
        &mut self,
        message: &str,
        _options: &[SelectOption],
    ) -> Result<PromptOutcome<Vec<String>>> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(ScriptedAnswer::Select(outcome)) => Ok(outcome),
            other => Err(SweepError::Prompt(format!(
                "expected a queued selection for '{message}', found {other:?}"
            ))),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<PromptOutcome<bool>> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(ScriptedAnswer::Confirm(outcome)) => Ok(outcome),
            other => Err(SweepError::Prompt(format!(
                "expected a queued confirmation for '{message}', found {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompt_replays_answers_in_order() {
        let mut prompt = ScriptedPrompt::new()
            .select(&["greet"])
            .confirm_with(false)
            .cancel_confirm();

        assert_eq!(
            prompt.select_many("pick", &[]).unwrap(),
            PromptOutcome::Answered(vec!["greet".to_string()])
        );
        assert_eq!(
            prompt.confirm("first?").unwrap(),
            PromptOutcome::Answered(false)
        );
        assert_eq!(prompt.confirm("second?").unwrap(), PromptOutcome::Cancelled);
        assert_eq!(prompt.asked(), ["pick", "first?", "second?"]);
        assert_eq!(prompt.remaining(), 0);
    }

    #[test]
    fn scripted_prompt_rejects_unexpected_questions() {
        let mut prompt = ScriptedPrompt::new().confirm_with(true);
        let err = prompt.select_many("pick", &[]).unwrap_err();
        assert!(matches!(err, SweepError::Prompt(_)));

        let mut empty = ScriptedPrompt::new();
        assert!(empty.confirm("anything?").is_err());
    }
}
