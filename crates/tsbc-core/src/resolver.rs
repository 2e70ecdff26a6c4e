//! Configuration resolution
//!
//! Merges command-line flags, interactive answers and defaults into one
//! [`ResolvedConfig`]. Precedence is explicit flag > prompt answer > default.
//!
//! The pipeline is strictly sequential:
//!
//! ```text
//! baseline -> gate check -> explicit validation -> prompts (0..N)
//!          -> merge -> final validation -> Resolved
//! ```
//!
//! Any failure aborts the run; nothing is retried.

use tracing::{debug, info, instrument};

use crate::config::ToolsConfig;
use crate::error::{Error, Result};
use crate::probe;
use crate::prompt::{Answers, Field, Prompter, Question};
use crate::registry::{self, DEFAULT_PROJECT_NAME, PROJECT_TYPES};
use crate::runner::CommandRunner;
use crate::types::{RawInputs, ResolvedConfig};
use crate::validate::{
    is_valid_package_manager, is_valid_project_name, is_valid_project_type,
    normalize_package_manager,
    normalize_project_type,
};

/// Output of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The validated configuration
    pub config: ResolvedConfig,
    /// Whether `--open` was given (the dispatcher only asks when it was not)
    pub open_explicit: bool,
}

/// Resolves [`RawInputs`] into a [`Resolution`]
pub struct Resolver<'a> {
    runner: &'a dyn CommandRunner,
    tools: &'a ToolsConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(runner: &'a dyn CommandRunner, tools: &'a ToolsConfig) -> Self {
        Self { runner, tools }
    }

    /// Run the full resolution pipeline
    #[instrument(skip_all, fields(yes = inputs.yes))]
    pub fn resolve(&self, inputs: &RawInputs, prompter: &mut dyn Prompter) -> Result<Resolution> {
        let baseline = Self::baseline(inputs);
        debug!(?baseline, "baseline configuration");

        // Fail fast before asking anything that could not succeed anyway
        self.check_gate(&baseline)?;
        let gated = baseline.use_git;
        Self::check_explicit_values(inputs)?;

        let config = if inputs.yes {
            prompter.show_defaults(&baseline);
            baseline
        } else {
            let questions = Self::questions(inputs, &baseline);
            let answers = if questions.is_empty() {
                debug!("all fields supplied by flags, skipping prompts");
                Answers::default()
            } else {
                debug!(count = questions.len(), "prompting for missing fields");
                prompter.prompt(&questions)?
            };
            Self::merge(inputs, &answers, &baseline)
        };

        Self::check_final(&config)?;
        if !gated {
            // A "yes" at the git prompt has not been through the gate yet
            self.check_gate(&config)?;
        }

        info!("Resolved configuration: {}", config);
        Ok(Resolution {
            config,
            open_explicit: inputs.open,
        })
    }

    /// Configuration from flags alone, with defaults for unset fields
    pub fn baseline(inputs: &RawInputs) -> ResolvedConfig {
        ResolvedConfig {
            project_type: normalize_project_type(inputs.project_type.as_deref()),
            project_name: inputs
                .project_name
                .clone()
                .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
            use_git: inputs.git.explicit().unwrap_or(false),
            package_manager: normalize_package_manager(inputs.package_manager.as_deref()),
            open: inputs.open,
        }
    }

    fn check_gate(&self, config: &ResolvedConfig) -> Result<()> {
        if config.use_git && !probe::has_version_control(self.runner, self.tools) {
            return Err(Error::precondition(&self.tools.vcs));
        }
        Ok(())
    }

    /// Explicit values are never silently corrected
    fn check_explicit_values(inputs: &RawInputs) -> Result<()> {
        if let Some(project_type) = &inputs.project_type {
            if !is_valid_project_type(project_type) {
                return Err(Error::invalid_explicit_value(
                    "--project-type",
                    project_type,
                    PROJECT_TYPES,
                ));
            }
        }

        if let Some(pm) = &inputs.package_manager {
            if !is_valid_package_manager(pm) {
                return Err(Error::invalid_explicit_value(
                    "--pm",
                    pm,
                    &registry::package_manager_names(),
                ));
            }
        }

        Ok(())
    }

    /// One question per prompt-eligible field the flags left unset
    fn questions(inputs: &RawInputs, baseline: &ResolvedConfig) -> Vec<Question> {
        let mut questions = Vec::new();

        if inputs.project_type.is_none() {
            questions.push(Question::select(
                Field::ProjectType,
                "What type of project do you want to create?",
                PROJECT_TYPES,
                &baseline.project_type,
            ));
        }

        if inputs.project_name.is_none() {
            questions.push(Question::input(
                Field::ProjectName,
                "What's the name of your project?",
                &baseline.project_name,
            ));
        }

        if inputs.git.explicit().is_none() {
            questions.push(Question::confirm(
                Field::UseGit,
                "Initialize a git repository?",
                baseline.use_git,
            ));
        }

        if inputs.package_manager.is_none() {
            questions.push(Question::select(
                Field::PackageManager,
                "Which package manager to use?",
                &registry::package_manager_names(),
                &baseline.package_manager,
            ));
        }

        questions
    }

    /// Re-derive every field as flag, else answer, else baseline
    fn merge(inputs: &RawInputs, answers: &Answers, baseline: &ResolvedConfig) -> ResolvedConfig {
        ResolvedConfig {
            project_type: inputs
                .project_type
                .clone()
                .or_else(|| answers.project_type.clone())
                .unwrap_or_else(|| baseline.project_type.clone()),
            project_name: inputs
                .project_name
                .clone()
                .or_else(|| answers.project_name.clone().filter(|n| !n.trim().is_empty()))
                .unwrap_or_else(|| baseline.project_name.clone()),
            use_git: inputs
                .git
                .explicit()
                .or(answers.use_git)
                .unwrap_or(baseline.use_git),
            package_manager: inputs
                .package_manager
                .clone()
                .or_else(|| answers.package_manager.clone())
                .unwrap_or_else(|| baseline.package_manager.clone()),
            open: baseline.open,
        }
    }

    /// Re-check the merged result, whatever source each value came from
    fn check_final(config: &ResolvedConfig) -> Result<()> {
        if !is_valid_project_name(&config.project_name) {
            return Err(Error::post_resolution_invalid_value(
                "project name",
                &config.project_name,
            ));
        }
        if !is_valid_project_type(&config.project_type) {
            return Err(Error::post_resolution_invalid_value(
                "project type",
                &config.project_type,
            ));
        }
        if !is_valid_package_manager(&config.package_manager) {
            return Err(Error::post_resolution_invalid_value(
                "package manager",
                &config.package_manager,
            ));
        }
        Ok(())
    }
}
