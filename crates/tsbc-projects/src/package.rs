//! Package manager operations on a freshly materialized project

use camino::Utf8Path;
use serde_json::Value;
use tracing::{debug, info, warn};
use tsbc_core::registry::{PackageManagerDescriptor, PACKAGE_MANAGERS};
use tsbc_core::Invocation;

use crate::error::{Error, Result};
use crate::exec::{self, SharedRunner};

/// Verify the package manager is installed by running its check command
pub async fn check_available(
    runner: &SharedRunner,
    manager: &PackageManagerDescriptor,
) -> Result<()> {
    let Some(invocation) = Invocation::parse(manager.check) else {
        return Err(Error::package_manager_not_found(manager.name));
    };

    match exec::run(runner, invocation).await {
        Ok(output) if output.success => Ok(()),
        Ok(_) => {
            debug!("{} check failed", manager.name);
            Err(Error::package_manager_not_found(manager.name))
        }
        Err(e) => {
            debug!("{} check could not start: {}", manager.name, e);
            Err(Error::package_manager_not_found(manager.name))
        }
    }
}

/// Set the `name` field of `package.json`, keeping every other field
///
/// Returns `false` when the project has no `package.json`.
pub async fn set_package_name(project_dir: &Utf8Path, name: &str) -> Result<bool> {
    let manifest = project_dir.join("package.json");
    if !manifest.is_file() {
        debug!("No package.json in {}", project_dir);
        return Ok(false);
    }

    let contents = tokio::fs::read_to_string(&manifest).await?;
    let mut value: Value = serde_json::from_str(&contents)?;
    match value.as_object_mut() {
        Some(object) => {
            object.insert("name".to_string(), Value::String(name.to_string()));
        }
        None => {
            warn!("package.json is not an object, leaving it unchanged");
            return Ok(false);
        }
    }

    let mut rendered = serde_json::to_string_pretty(&value)?;
    rendered.push('\n');
    tokio::fs::write(&manifest, rendered).await?;
    debug!("Set package name to {}", name);
    Ok(true)
}

/// Delete lock files written by the other package managers
///
/// Returns the names of the removed files.
pub async fn remove_foreign_lock_files(
    project_dir: &Utf8Path,
    manager: &PackageManagerDescriptor,
) -> Result<Vec<&'static str>> {
    let mut removed = Vec::new();
    for other in PACKAGE_MANAGERS.iter().filter(|m| m.name != manager.name) {
        let lock = project_dir.join(other.lock);
        if lock.is_file() {
            tokio::fs::remove_file(&lock).await?;
            debug!("Removed {}", other.lock);
            removed.push(other.lock);
        }
    }
    Ok(removed)
}

/// Run the manager's install command inside the project
pub async fn install_dependencies(
    runner: &SharedRunner,
    project_dir: &Utf8Path,
    manager: &PackageManagerDescriptor,
) -> Result<()> {
    info!("Installing dependencies with {}", manager.install);
    let Some(invocation) = Invocation::parse(manager.install) else {
        return Err(Error::install(manager.install, "empty install command"));
    };

    let output = exec::run(runner, invocation.current_dir(project_dir))
        .await
        .map_err(|e| Error::install(manager.install, e.to_string()))?;

    if !output.success {
        let message = if output.stderr.is_empty() {
            "exited with a non-zero status".to_string()
        } else {
            output.stderr
        };
        return Err(Error::install(manager.install, message));
    }

    info!("Dependencies installed");
    Ok(())
}
