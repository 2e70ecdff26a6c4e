//! Repository initialization for new projects

use camino::Utf8Path;
use tracing::{debug, info, warn};
use tsbc_core::{GitConfig, Invocation};

use crate::error::{Error, Result};
use crate::exec::{self, SharedRunner};

/// Run `<vcs> <args>` in `path`, failing on a non-zero exit
async fn run_git(runner: &SharedRunner, vcs: &str, path: &Utf8Path, args: &[&str]) -> Result<()> {
    let invocation = Invocation::new(vcs)
        .args(args.iter().copied())
        .current_dir(path);
    let output = exec::run(runner, invocation)
        .await
        .map_err(|e| Error::git_operation(format!("{} {}: {}", vcs, args[0], e)))?;

    if !output.success {
        return Err(Error::git_operation(format!(
            "{} {} failed: {}",
            vcs, args[0], output.stderr
        )));
    }
    Ok(())
}

/// Initialize a repository in `path` and commit the whole project
///
/// `git init` and `git add` failures are errors. A failed commit (typically
/// no `user.name`/`user.email` configured) only logs a warning and returns
/// `Ok(false)`; the repository is still usable.
pub async fn init_repository(
    runner: &SharedRunner,
    path: &Utf8Path,
    vcs: &str,
    git_config: &GitConfig,
) -> Result<bool> {
    info!("Initializing git repository at: {}", path);

    if path.join(".git").exists() {
        debug!("Git repository already exists at: {}", path);
        return Ok(false);
    }

    run_git(
        runner,
        vcs,
        path,
        &["init", "--initial-branch", git_config.default_branch.as_str()],
    )
    .await?;
    run_git(runner, vcs, path, &["add", "-A"]).await?;

    match run_git(
        runner,
        vcs,
        path,
        &["commit", "-m", git_config.initial_commit_message.as_str()],
    )
    .await
    {
        Ok(()) => {
            info!("Initial commit created");
            Ok(true)
        }
        Err(e) => {
            warn!("git commit failed, continuing: {}", e);
            Ok(false)
        }
    }
}
