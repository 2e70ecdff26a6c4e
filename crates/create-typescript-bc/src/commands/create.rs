//! Project creation: resolve, initialize, optionally open the editor

use anyhow::{Context, Result};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use indicatif::ProgressBar;
use tracing::debug;
use tsbc_core::{
    ConfigLoader, Dispatcher, EditorOutcome, ProjectInitializer, ResolvedConfig, Resolver,
    SystemRunner,
};
use tsbc_projects::ProjectGenerator;

use crate::cli::Cli;
use crate::output;
use crate::prompt::DialoguerPrompter;

/// Wraps the generator in a spinner that is cleared before the editor prompt
struct SpinnerInitializer {
    generator: ProjectGenerator,
    spinner: ProgressBar,
}

#[async_trait]
impl ProjectInitializer for SpinnerInitializer {
    async fn initialize(
        &self,
        config: &ResolvedConfig,
        destination: &Utf8Path,
    ) -> tsbc_core::Result<()> {
        let result = self.generator.initialize(config, destination).await;
        self.spinner.finish_and_clear();

        if result.is_ok() {
            output::success(&format!(
                "Created {} in {}",
                config.project_name, destination
            ));
        }
        result
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let runtime = ConfigLoader::from_option(cli.config.as_deref())
        .and_then(|loader| loader.load())
        .context("Failed to load configuration")?;
    if !runtime.display.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    debug!(?runtime, "runtime configuration");

    if !cli.quiet {
        output::welcome();
    }

    let runner = SystemRunner::new();
    let mut prompter = DialoguerPrompter::new();

    let resolution =
        Resolver::new(&runner, &runtime.tools).resolve(&cli.to_inputs(), &mut prompter)?;

    let workdir = Utf8PathBuf::try_from(std::env::current_dir()?)
        .context("Current directory is not valid UTF-8")?;

    let generator = ProjectGenerator::new(&runtime)?;
    let spinner = output::spinner(&format!(
        "Creating {}...",
        resolution.config.project_name
    ));
    let progress = spinner.clone();
    let initializer = SpinnerInitializer {
        generator: generator.with_progress(move |step| progress.set_message(step.to_string())),
        spinner,
    };
    let outcome = Dispatcher::new(&runner, &runtime.tools, workdir)
        .dispatch(&resolution, &initializer, &mut prompter)
        .await?;

    report_editor(&outcome.editor);
    Ok(())
}

fn report_editor(outcome: &EditorOutcome) {
    match outcome {
        EditorOutcome::Skipped => {}
        EditorOutcome::Opened => output::success("Opened project in VS Code."),
        EditorOutcome::CliMissing { editor } => output::warning(&format!(
            "Couldn't find the VS Code CLI (`{}`). In VS Code, run \"Shell Command: Install '{}' command in PATH\", then try again.",
            editor, editor
        )),
        EditorOutcome::Failed { editor, reason } => {
            debug!("Editor launch failed: {}", reason);
            output::error(&format!("Failed to open VS Code with `{}`.", editor));
        }
    }
}
