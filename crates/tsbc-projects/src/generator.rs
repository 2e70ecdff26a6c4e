//! Project generation: the full scaffolding sequence behind the initializer

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use camino::Utf8Path;
use tracing::{debug, info, instrument, warn};
use tsbc_core::registry::{self, PackageManagerDescriptor};
use tsbc_core::{
    CommandRunner, GitConfig, ProjectInitializer, ResolvedConfig, RuntimeConfig, SystemRunner,
    TemplatesConfig,
};

use crate::error::{Error, Result};
use crate::exec::SharedRunner;
use crate::git;
use crate::package;
use crate::template::{self, TemplateSource};

/// A step of [`ProjectGenerator::generate`], reported before it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationStep {
    CheckingPackageManager { name: String },
    DownloadingTemplate { template: String },
    CopyingTemplate { template: String },
    InstallingDependencies { command: String },
    InitializingGit,
}

impl std::fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckingPackageManager { name } => write!(f, "Checking {}...", name),
            Self::DownloadingTemplate { template } => {
                write!(f, "Downloading template {}...", template)
            }
            Self::CopyingTemplate { template } => write!(f, "Copying template {}...", template),
            Self::InstallingDependencies { command } => write!(f, "Running {}...", command),
            Self::InitializingGit => write!(f, "Initializing git repository..."),
        }
    }
}

type ProgressFn = Arc<dyn Fn(&GenerationStep) + Send + Sync>;

/// Creates projects from the template catalog
pub struct ProjectGenerator {
    client: reqwest::Client,
    templates: TemplatesConfig,
    vcs: String,
    git: GitConfig,
    runner: SharedRunner,
    progress: Option<ProgressFn>,
}

impl ProjectGenerator {
    /// Build a generator from runtime settings
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.network.user_agent)
            .timeout(Duration::from_secs(config.network.http_timeout_secs))
            .build()
            .map_err(|e| Error::download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            templates: config.templates.clone(),
            vcs: config.tools.vcs.clone(),
            git: config.git.clone(),
            runner: Arc::new(SystemRunner::new()),
            progress: None,
        })
    }

    /// Run package manager and git commands through `runner`
    pub fn with_runner(mut self, runner: impl CommandRunner + Send + Sync + 'static) -> Self {
        self.runner = Arc::new(runner);
        self
    }

    /// Receive a callback before each step
    pub fn with_progress(
        mut self,
        progress: impl Fn(&GenerationStep) + Send + Sync + 'static,
    ) -> Self {
        self.progress = Some(Arc::new(progress));
        self
    }

    fn report(&self, step: GenerationStep) {
        if let Some(progress) = &self.progress {
            progress(&step);
        }
    }

    /// Scaffold the project described by `config` into `destination`
    ///
    /// The destination must not exist. Once it has been created, any failure
    /// removes it again so the same command can be rerun.
    #[instrument(skip_all, fields(template = %config.project_type, dest = %destination))]
    pub async fn generate(&self, config: &ResolvedConfig, destination: &Utf8Path) -> Result<()> {
        if destination.exists() {
            return Err(Error::project_exists(destination.as_str()));
        }

        let manager = registry::package_manager(&config.package_manager)
            .ok_or_else(|| Error::package_manager_not_found(&config.package_manager))?;
        self.report(GenerationStep::CheckingPackageManager {
            name: manager.name.to_string(),
        });
        package::check_available(&self.runner, manager).await?;

        if let Err(e) = self.build(config, manager, destination).await {
            Self::discard(destination).await;
            return Err(e);
        }

        info!("Project {} generated", config.project_name);
        Ok(())
    }

    async fn build(
        &self,
        config: &ResolvedConfig,
        manager: &PackageManagerDescriptor,
        destination: &Utf8Path,
    ) -> Result<()> {
        self.materialize(&config.project_type, destination).await?;

        package::set_package_name(destination, &config.project_name).await?;
        let removed = package::remove_foreign_lock_files(destination, manager).await?;
        if !removed.is_empty() {
            info!("Removed lock files: {}", removed.join(", "));
        }

        self.report(GenerationStep::InstallingDependencies {
            command: manager.install.to_string(),
        });
        package::install_dependencies(&self.runner, destination, manager).await?;

        if config.use_git {
            self.report(GenerationStep::InitializingGit);
            git::init_repository(&self.runner, destination, &self.vcs, &self.git).await?;
        }
        Ok(())
    }

    /// Remove a partially generated project
    async fn discard(destination: &Utf8Path) {
        if !destination.exists() {
            return;
        }
        match tokio::fs::remove_dir_all(destination).await {
            Ok(()) => debug!("Removed partially generated {}", destination),
            Err(e) => warn!("Failed to clean up {}: {}", destination, e),
        }
    }

    async fn materialize(&self, template: &str, destination: &Utf8Path) -> Result<usize> {
        match TemplateSource::for_template(&self.templates, template) {
            TemplateSource::Archive { url } => {
                self.report(GenerationStep::DownloadingTemplate {
                    template: template.to_string(),
                });
                template::download_archive(&self.client, &url, template, destination).await
            }
            TemplateSource::Local { dir } => {
                self.report(GenerationStep::CopyingTemplate {
                    template: template.to_string(),
                });
                template::copy_local(&dir, template, destination)
            }
        }
    }
}

#[async_trait]
impl ProjectInitializer for ProjectGenerator {
    async fn initialize(
        &self,
        config: &ResolvedConfig,
        destination: &Utf8Path,
    ) -> tsbc_core::Result<()> {
        self.generate(config, destination).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRunner;
    use camino::Utf8PathBuf;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn config(name: &str) -> ResolvedConfig {
        ResolvedConfig {
            project_type: registry::default_project_type().to_string(),
            project_name: name.to_string(),
            use_git: false,
            package_manager: "npm".to_string(),
            open: false,
        }
    }

    /// Temp root holding `templates/<default type>` with a package.json and
    /// every lock file
    fn local_templates() -> (TempDir, Utf8PathBuf, RuntimeConfig) {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let template = root.join("templates").join(registry::default_project_type());
        std::fs::create_dir_all(template.join("src")).unwrap();
        std::fs::write(
            template.join("package.json"),
            r#"{"name":"template","version":"1.0.0"}"#,
        )
        .unwrap();
        std::fs::write(template.join("src/index.ts"), "export {};").unwrap();
        for lock in ["package-lock.json", "yarn.lock", "pnpm-lock.yaml"] {
            std::fs::write(template.join(lock), "").unwrap();
        }

        let mut runtime = RuntimeConfig::default();
        runtime.templates.local_dir = Some(root.join("templates"));
        (temp, root, runtime)
    }

    #[tokio::test]
    async fn test_existing_destination_is_refused() {
        let temp = TempDir::new().unwrap();
        let dest = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

        let generator = ProjectGenerator::new(&RuntimeConfig::default())
            .unwrap()
            .with_runner(RecordingRunner::new());
        let err = generator.generate(&config("demo"), &dest).await.unwrap_err();

        assert!(matches!(err, Error::ProjectExists { .. }));
        assert!(dest.exists());
    }

    #[tokio::test]
    async fn test_initializer_maps_errors_to_initialization() {
        let temp = TempDir::new().unwrap();
        let dest = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();

        let generator = ProjectGenerator::new(&RuntimeConfig::default()).unwrap();
        let err = generator.initialize(&config("demo"), &dest).await.unwrap_err();

        assert!(matches!(err, tsbc_core::Error::Initialization { .. }));
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_unknown_package_manager() {
        let temp = TempDir::new().unwrap();
        let dest = Utf8PathBuf::from_path_buf(temp.path().join("demo")).unwrap();
        let mut cfg = config("demo");
        cfg.package_manager = "bun".to_string();

        let generator = ProjectGenerator::new(&RuntimeConfig::default()).unwrap();
        let err = generator.generate(&cfg, &dest).await.unwrap_err();

        assert!(matches!(err, Error::PackageManagerNotFound { .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_missing_package_manager_creates_nothing() {
        let (_temp, root, runtime) = local_templates();
        let generator = ProjectGenerator::new(&runtime)
            .unwrap()
            .with_runner(RecordingRunner::new().with_missing("npm"));

        let dest = root.join("demo");
        let err = generator.generate(&config("demo"), &dest).await.unwrap_err();

        assert!(matches!(err, Error::PackageManagerNotFound { .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_yarn_project_installs_in_destination() {
        let (_temp, root, runtime) = local_templates();
        let runner = Arc::new(RecordingRunner::new());
        let generator = ProjectGenerator {
            runner: runner.clone(),
            ..ProjectGenerator::new(&runtime).unwrap()
        };
        let mut cfg = config("my-addin");
        cfg.package_manager = "yarn".to_string();

        let dest = root.join("my-addin");
        generator.generate(&cfg, &dest).await.unwrap();

        let calls = runner.calls();
        assert_eq!(runner.command_lines(), vec!["yarn --version", "yarn install"]);
        assert_eq!(calls[1].cwd.as_deref(), Some(dest.as_path()));

        let manifest = std::fs::read_to_string(dest.join("package.json")).unwrap();
        assert!(manifest.contains(r#""name": "my-addin""#));
        assert!(dest.join("yarn.lock").exists());
        assert!(!dest.join("package-lock.json").exists());
        assert!(!dest.join("pnpm-lock.yaml").exists());
        assert!(dest.join("src/index.ts").is_file());
    }

    #[tokio::test]
    async fn test_git_runs_after_install() {
        let (_temp, root, runtime) = local_templates();
        let runner = Arc::new(RecordingRunner::new());
        let generator = ProjectGenerator {
            runner: runner.clone(),
            ..ProjectGenerator::new(&runtime).unwrap()
        };
        let mut cfg = config("demo");
        cfg.use_git = true;

        generator.generate(&cfg, &root.join("demo")).await.unwrap();

        assert_eq!(
            runner.command_lines(),
            vec![
                "npm --version",
                "npm install",
                "git init --initial-branch main",
                "git add -A",
                "git commit -m Initial commit",
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_install_removes_project() {
        let (_temp, root, runtime) = local_templates();
        let generator = ProjectGenerator::new(&runtime)
            .unwrap()
            .with_runner(RecordingRunner::new().with_failing("npm install"));

        let dest = root.join("demo");
        let err = generator.generate(&config("demo"), &dest).await.unwrap_err();

        assert!(matches!(err, Error::Install { .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_failed_git_init_removes_project() {
        let (_temp, root, runtime) = local_templates();
        let generator = ProjectGenerator::new(&runtime)
            .unwrap()
            .with_runner(RecordingRunner::new().with_failing("git init --initial-branch main"));
        let mut cfg = config("demo");
        cfg.use_git = true;

        let dest = root.join("demo");
        let err = generator.generate(&cfg, &dest).await.unwrap_err();

        assert!(matches!(err, Error::GitOperation { .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_missing_local_template_cleans_up() {
        let temp = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).unwrap();
        let mut runtime = RuntimeConfig::default();
        runtime.templates.local_dir = Some(root.join("templates"));

        let steps = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&steps);
        let generator = ProjectGenerator::new(&runtime)
            .unwrap()
            .with_runner(RecordingRunner::new())
            .with_progress(move |step| recorded.lock().unwrap().push(step.clone()));

        let dest = root.join("demo");
        let err = generator.generate(&config("demo"), &dest).await.unwrap_err();

        assert!(matches!(err, Error::TemplateNotFound { .. }));
        assert!(!dest.exists());
        assert_eq!(
            steps.lock().unwrap().last(),
            Some(&GenerationStep::CopyingTemplate {
                template: registry::default_project_type().to_string()
            })
        );
    }

    #[test]
    fn test_step_display() {
        assert_eq!(
            GenerationStep::InstallingDependencies {
                command: "pnpm install".to_string()
            }
            .to_string(),
            "Running pnpm install..."
        );
    }
}
