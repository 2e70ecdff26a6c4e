//! Execution dispatch
//!
//! Hands a resolved configuration to the project initializer, then decides
//! whether to open the result in the editor. Only initialization failures are
//! fatal; every editor problem is reported through [`EditorOutcome`].

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::config::ToolsConfig;
use crate::error::{Error, Result};
use crate::probe;
use crate::prompt::{Field, Prompter, Question};
use crate::resolver::Resolution;
use crate::runner::{CommandRunner, Invocation};
use crate::types::ResolvedConfig;

/// Materializes a project on disk
///
/// Implementations copy the template, install dependencies and initialize
/// version control when requested.
#[async_trait]
pub trait ProjectInitializer: Send + Sync {
    /// Create the project described by `config` at `destination`
    async fn initialize(&self, config: &ResolvedConfig, destination: &Utf8Path) -> Result<()>;
}

/// What happened with the editor after a successful initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The user declined, or `--open` was not given and the answer was no
    Skipped,
    /// The editor CLI could not be found
    CliMissing { editor: String },
    /// The editor was launched
    Opened,
    /// The editor CLI was found but launching it failed
    Failed { editor: String, reason: String },
}

/// Result of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub project_dir: Utf8PathBuf,
    pub editor: EditorOutcome,
}

/// Runs the initializer and the optional editor step
pub struct Dispatcher<'a> {
    runner: &'a dyn CommandRunner,
    tools: &'a ToolsConfig,
    workdir: Utf8PathBuf,
}

impl<'a> Dispatcher<'a> {
    /// `workdir` is the directory the project folder is created in
    pub fn new(
        runner: &'a dyn CommandRunner,
        tools: &'a ToolsConfig,
        workdir: impl Into<Utf8PathBuf>,
    ) -> Self {
        Self {
            runner,
            tools,
            workdir: workdir.into(),
        }
    }

    /// Where the project for `config` is created
    pub fn destination(&self, config: &ResolvedConfig) -> Utf8PathBuf {
        self.workdir.join(&config.project_name)
    }

    #[instrument(skip_all, fields(project = %resolution.config.project_name))]
    pub async fn dispatch(
        &self,
        resolution: &Resolution,
        initializer: &dyn ProjectInitializer,
        prompter: &mut dyn Prompter,
    ) -> Result<DispatchOutcome> {
        let config = &resolution.config;
        let project_dir = self.destination(config);

        initializer
            .initialize(config, &project_dir)
            .await
            .map_err(|e| match e {
                Error::Initialization { .. } => e,
                other => Error::initialization(other.to_string()),
            })?;
        info!("Project created at {}", project_dir);

        let open = if resolution.open_explicit {
            config.open
        } else {
            self.ask_open(prompter)
        };

        let editor = if open {
            self.open_editor(&project_dir)
        } else {
            EditorOutcome::Skipped
        };

        Ok(DispatchOutcome {
            project_dir,
            editor,
        })
    }

    /// A failed prompt here counts as "no": the project already exists
    fn ask_open(&self, prompter: &mut dyn Prompter) -> bool {
        let open_choice = format!("Open with `{}`", self.tools.editor);
        let question = Question::select(
            Field::OpenInEditor,
            "Do you want to open the new folder with Visual Studio Code?",
            &[open_choice.as_str(), "Skip"],
            &open_choice,
        );
        match prompter.prompt(&[question]) {
            Ok(answers) => answers.open.unwrap_or(false),
            Err(e) => {
                warn!("Editor prompt failed, skipping: {}", e);
                false
            }
        }
    }

    fn open_editor(&self, project_dir: &Utf8Path) -> EditorOutcome {
        let editor = self.tools.editor.clone();
        if !probe::has_editor_cli(self.runner, self.tools) {
            return EditorOutcome::CliMissing { editor };
        }

        let invocation = Invocation::new(&editor).arg(project_dir.as_str());
        debug!("Opening editor: {}", invocation);
        match self.runner.run_quiet(&invocation) {
            Ok(true) => EditorOutcome::Opened,
            Ok(false) => EditorOutcome::Failed {
                editor,
                reason: "editor exited with a non-zero status".to_string(),
            },
            Err(e) => EditorOutcome::Failed {
                editor,
                reason: e.to_string(),
            },
        }
    }
}
