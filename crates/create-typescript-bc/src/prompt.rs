//! Terminal prompts backed by dialoguer

use dialoguer::{Confirm, Input, Select};
use tsbc_core::prompt::{Answer, QuestionKind};
use tsbc_core::{Answers, Error, Prompter, Question, ResolvedConfig};

use crate::output;

/// [`Prompter`] that asks on the controlling terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask(question: &Question) -> Result<Answer, dialoguer::Error> {
        let answer = match &question.kind {
            QuestionKind::Select { choices, default } => {
                let index = Select::new()
                    .with_prompt(&question.message)
                    .items(choices)
                    .default(*default)
                    .interact()?;
                if question.field.is_flag() {
                    Answer::Flag(index == 0)
                } else {
                    Answer::Text(choices[index].clone())
                }
            }
            QuestionKind::Input { default } => Answer::Text(
                Input::<String>::new()
                    .with_prompt(&question.message)
                    .default(default.clone())
                    .allow_empty(true)
                    .interact_text()?,
            ),
            QuestionKind::Confirm { default } => Answer::Flag(
                Confirm::new()
                    .with_prompt(&question.message)
                    .default(*default)
                    .interact()?,
            ),
        };
        Ok(answer)
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt(&mut self, questions: &[Question]) -> tsbc_core::Result<Answers> {
        let mut answers = Answers::default();
        for question in questions {
            let answer = Self::ask(question).map_err(|e| Error::prompt(e.to_string()))?;
            answers.set(question.field, answer);
        }
        Ok(answers)
    }

    fn show_defaults(&mut self, config: &ResolvedConfig) {
        output::configuration(config);
    }
}
