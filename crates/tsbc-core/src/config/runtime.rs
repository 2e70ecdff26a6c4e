//! Runtime configuration types
//!
//! These settings control how the tool talks to its environment (where
//! templates come from, which binaries to call). They never change which
//! templates or package managers are allowed.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Template source settings
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// External binaries
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Git initialization defaults
    #[serde(default)]
    pub git: GitConfig,

    /// Network settings for template downloads
    #[serde(default)]
    pub network: NetworkConfig,

    /// Display and output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where templates are materialized from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplatesConfig {
    /// GitHub owner hosting the template repositories
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Archive URL pattern; `{owner}` and `{template}` are substituted
    #[serde(default = "default_archive_url")]
    pub archive_url: String,

    /// Directory holding one sub-directory per template; overrides downloads
    #[serde(default)]
    pub local_dir: Option<Utf8PathBuf>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            archive_url: default_archive_url(),
            local_dir: None,
        }
    }
}

impl TemplatesConfig {
    /// Archive URL for one template
    pub fn archive_url_for(&self, template: &str) -> String {
        self.archive_url
            .replace("{owner}", &self.owner)
            .replace("{template}", template)
    }
}

fn default_owner() -> String {
    "Florian-Noever".to_string()
}

fn default_archive_url() -> String {
    "https://codeload.github.com/{owner}/{template}/tar.gz/HEAD".to_string()
}

/// External binaries probed and invoked by the tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ToolsConfig {
    /// Version-control binary
    #[serde(default = "default_vcs")]
    pub vcs: String,

    /// Editor CLI used to open the new project
    #[serde(default = "default_editor")]
    pub editor: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            vcs: default_vcs(),
            editor: default_editor(),
        }
    }
}

fn default_vcs() -> String {
    "git".to_string()
}

fn default_editor() -> String {
    "code".to_string()
}

/// Defaults for the repository created in the new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitConfig {
    #[serde(default = "default_branch")]
    pub default_branch: String,

    #[serde(default = "default_commit_message")]
    pub initial_commit_message: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            initial_commit_message: default_commit_message(),
        }
    }
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_commit_message() -> String {
    "Initial commit".to_string()
}

/// Network configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// Timeout for the template download in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_http_timeout() -> u64 {
    120
}

fn default_user_agent() -> String {
    format!(
        "create-typescript-bc/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

fn default_true() -> bool {
    true
}
