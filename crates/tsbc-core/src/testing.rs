//! Test doubles for the process, prompt and initializer seams

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};

use crate::dispatch::ProjectInitializer;
use crate::error::{Error, Result};
use crate::prompt::{Answers, Field, Prompter, Question};
use crate::runner::{CommandRunner, Invocation};
use crate::types::ResolvedConfig;

/// Runner with scripted outcomes
///
/// Programs registered with `with_tool` succeed, `with_failing` exit
/// non-zero, and anything else fails to spawn.
#[derive(Default)]
pub struct FakeRunner {
    installed: HashSet<String>,
    failing: HashSet<String>,
    failing_invocations: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tool(mut self, program: &str) -> Self {
        self.installed.insert(program.to_string());
        self
    }

    pub fn with_failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    /// Exit non-zero for one exact command line
    pub fn with_failing_invocation(mut self, command_line: &str) -> Self {
        self.failing_invocations.insert(command_line.to_string());
        self
    }

    /// Every command line run so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run_quiet(&self, invocation: &Invocation) -> std::io::Result<bool> {
        let line = invocation.to_string();
        self.calls.lock().unwrap().push(line.clone());

        if self.failing.contains(&invocation.program) || self.failing_invocations.contains(&line) {
            return Ok(false);
        }
        if self.installed.contains(&invocation.program) {
            return Ok(true);
        }
        Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", invocation.program),
        ))
    }
}

/// Prompter that answers from a fixed script and records what it was asked
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Answers,
    fail: bool,
    sessions: usize,
    questions: Vec<Question>,
    shown_defaults: Vec<ResolvedConfig>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers returned for whichever fields are asked
    pub fn with_answers(mut self, answers: Answers) -> Self {
        self.answers = answers;
        self
    }

    /// Make every session fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn sessions(&self) -> usize {
        self.sessions
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn asked_fields(&self) -> Vec<Field> {
        self.questions.iter().map(|q| q.field).collect()
    }

    pub fn shown_defaults(&self) -> Vec<ResolvedConfig> {
        self.shown_defaults.clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, questions: &[Question]) -> Result<Answers> {
        self.sessions += 1;
        self.questions.extend_from_slice(questions);
        if self.fail {
            return Err(Error::prompt("not a terminal"));
        }

        // Only hand back answers for the fields actually asked
        let mut answers = Answers::default();
        for question in questions {
            match question.field {
                Field::ProjectType => answers.project_type = self.answers.project_type.clone(),
                Field::ProjectName => answers.project_name = self.answers.project_name.clone(),
                Field::UseGit => answers.use_git = self.answers.use_git,
                Field::PackageManager => {
                    answers.package_manager = self.answers.package_manager.clone()
                }
                Field::OpenInEditor => answers.open = self.answers.open,
            }
        }
        Ok(answers)
    }

    fn show_defaults(&mut self, config: &ResolvedConfig) {
        self.shown_defaults.push(config.clone());
    }
}

/// Initializer that records its calls and returns a fixed outcome
pub struct FakeInitializer {
    failure: Option<String>,
    calls: Mutex<Vec<(ResolvedConfig, Utf8PathBuf)>>,
}

impl FakeInitializer {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(ResolvedConfig, Utf8PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectInitializer for FakeInitializer {
    async fn initialize(&self, config: &ResolvedConfig, destination: &Utf8Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((config.clone(), destination.to_path_buf()));
        match &self.failure {
            Some(message) => Err(Error::initialization(message.clone())),
            None => Ok(()),
        }
    }
}
