use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect};

use super::{Prompt, PromptOutcome, SelectOption};
use crate::error::{Result, SweepError};

/// Interactive terminal prompt. Esc or `q` cancels.
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn select_many(
        &mut self,
        message: &str,
        options: &[SelectOption],
    ) -> Result<PromptOutcome<Vec<String>>> {
        let items: Vec<String> = options
            .iter()
            .map(|option| match &option.hint {
                Some(hint) => format!("{} ({hint})", option.label),
                None => option.label.clone(),
            })
            .collect();

        let picked = MultiSelect::with_theme(&self.theme)
            .with_prompt(message)
            .items(&items)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(match picked {
            Some(indexes) => PromptOutcome::Answered(
                indexes
                    .into_iter()
                    .filter_map(|index| options.get(index))
                    .map(|option| option.value.clone())
                    .collect(),
            ),
            None => PromptOutcome::Cancelled,
        })
    }

    fn confirm(&mut self, message: &str) -> Result<PromptOutcome<bool>> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map_err(prompt_error)?;

        Ok(match answer {
            Some(answer) => PromptOutcome::Answered(answer),
            None => PromptOutcome::Cancelled,
        })
    }
}

fn prompt_error(error: dialoguer::Error) -> SweepError {
    SweepError::Prompt(error.to_string())
}
