//! Layered runtime configuration loader
//!
//! Loads configuration with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Config file (`~/.create-typescript-bc/config.yaml` or `--config`)
//! 3. Environment variables (`TSBC_*` prefix, plus `NO_COLOR`)
//! 4. CLI flags (handled by the resolver)

use std::env;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use super::runtime::RuntimeConfig;
use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".create-typescript-bc";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Runtime configuration loader
pub struct ConfigLoader {
    /// Config file to read
    path: Utf8PathBuf,
    /// Whether a missing file is an error (true for `--config`)
    required: bool,
}

impl ConfigLoader {
    /// Loader for the default location under the home directory
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::default_config_path()?,
            required: false,
        })
    }

    /// Loader for an explicit path; the file must exist
    pub fn with_path(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// Pick the explicit path when given, otherwise the default location
    pub fn from_option(path: Option<&Utf8Path>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::with_path(p)),
            None => Self::new(),
        }
    }

    fn default_config_path() -> Result<Utf8PathBuf> {
        let home = env::var("HOME")
            .ok()
            .filter(|h| !h.is_empty())
            .map(Utf8PathBuf::from)
            .or_else(|| dirs::home_dir().and_then(|p| Utf8PathBuf::from_path_buf(p).ok()))
            .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?;

        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// The config file this loader reads
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Load defaults, then the file, then environment overrides
    pub fn load(&self) -> Result<RuntimeConfig> {
        let mut config = if self.path.exists() {
            debug!("Loading runtime config from {}", self.path);
            let content = fs::read_to_string(&self.path)?;
            serde_yaml_ng::from_str::<RuntimeConfig>(&content)
                .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", self.path, e)))?
        } else if self.required {
            return Err(Error::config_not_found(self.path.as_str()));
        } else {
            debug!("No runtime config at {}, using defaults", self.path);
            RuntimeConfig::default()
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(config: &mut RuntimeConfig) -> Result<()> {
        if let Some(val) = env_value("TSBC_TEMPLATE_OWNER") {
            config.templates.owner = val;
        }

        if let Some(val) = env_value("TSBC_TEMPLATE_DIR") {
            config.templates.local_dir = Some(Utf8PathBuf::from(val));
        }

        if let Some(val) = env_value("TSBC_VCS_COMMAND") {
            config.tools.vcs = val;
        }

        if let Some(val) = env_value("TSBC_EDITOR_COMMAND") {
            config.tools.editor = val;
        }

        if let Some(val) = env_value("TSBC_GIT_DEFAULT_BRANCH") {
            config.git.default_branch = val;
        }

        if let Some(val) = env_value("TSBC_HTTP_TIMEOUT_SECS") {
            config.network.http_timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("TSBC_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        // https://no-color.org: any non-empty value disables color
        if env_value("NO_COLOR").is_some() {
            config.display.color = false;
        }

        Ok(())
    }

    fn validate(config: &RuntimeConfig) -> Result<()> {
        if config.tools.vcs.trim().is_empty() {
            return Err(Error::invalid_config("tools.vcs must not be empty"));
        }
        if config.tools.editor.trim().is_empty() {
            return Err(Error::invalid_config("tools.editor must not be empty"));
        }
        if config.network.http_timeout_secs == 0 {
            return Err(Error::invalid_config(
                "network.http-timeout-secs must be > 0",
            ));
        }
        if config.templates.local_dir.is_none()
            && !config.templates.archive_url.contains("{template}")
        {
            return Err(Error::invalid_config(
                "templates.archive-url must contain a {template} placeholder",
            ));
        }
        Ok(())
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
