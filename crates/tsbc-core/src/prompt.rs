//! Interactive questions and the prompter capability
//!
//! The resolver builds a batch of [`Question`]s and hands them to a
//! [`Prompter`] in a single session. The CLI implements the trait with
//! dialoguer; tests use a scripted implementation.

use crate::error::Result;
use crate::types::ResolvedConfig;

/// Which configuration field a question fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectType,
    ProjectName,
    UseGit,
    PackageManager,
    OpenInEditor,
}

impl Field {
    /// Whether the field holds a yes/no value
    pub fn is_flag(self) -> bool {
        matches!(self, Field::UseGit | Field::OpenInEditor)
    }
}

/// How a question is asked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one entry from `choices`; the answer is the chosen entry, or for
    /// boolean fields whether the first entry was chosen
    Select {
        choices: Vec<String>,
        default: usize,
    },
    /// Free text with a default
    Input { default: String },
    /// Yes/no with a default
    Confirm { default: bool },
}

/// One question in a prompt session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: Field,
    pub message: String,
    pub kind: QuestionKind,
}

impl Question {
    /// Select question; the default index points at `default` when listed
    pub fn select(field: Field, message: &str, choices: &[&str], default: &str) -> Self {
        let default = choices.iter().position(|c| *c == default).unwrap_or(0);
        Self {
            field,
            message: message.to_string(),
            kind: QuestionKind::Select {
                choices: choices.iter().map(|c| c.to_string()).collect(),
                default,
            },
        }
    }

    pub fn input(field: Field, message: &str, default: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
            kind: QuestionKind::Input {
                default: default.to_string(),
            },
        }
    }

    pub fn confirm(field: Field, message: &str, default: bool) -> Self {
        Self {
            field,
            message: message.to_string(),
            kind: QuestionKind::Confirm { default },
        }
    }
}

/// A single answer value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
}

/// Answers collected in one prompt session; unanswered fields stay `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub project_type: Option<String>,
    pub project_name: Option<String>,
    pub use_git: Option<bool>,
    pub package_manager: Option<String>,
    pub open: Option<bool>,
}

impl Answers {
    /// Store an answer for `field`
    ///
    /// Text answers to boolean fields and vice versa are ignored.
    pub fn set(&mut self, field: Field, answer: Answer) {
        match (field, answer) {
            (Field::ProjectType, Answer::Text(v)) => self.project_type = Some(v),
            (Field::ProjectName, Answer::Text(v)) => self.project_name = Some(v),
            (Field::PackageManager, Answer::Text(v)) => self.package_manager = Some(v),
            (Field::UseGit, Answer::Flag(v)) => self.use_git = Some(v),
            (Field::OpenInEditor, Answer::Flag(v)) => self.open = Some(v),
            _ => {}
        }
    }
}

/// Asks the user a batch of questions
pub trait Prompter {
    /// Ask every question in order and return the collected answers
    fn prompt(&mut self, questions: &[Question]) -> Result<Answers>;

    /// Called instead of [`prompt`](Prompter::prompt) when prompts are skipped
    fn show_defaults(&mut self, _config: &ResolvedConfig) {}
}
