//! Error types for tsbc-core

use thiserror::Error;

/// Result type alias using tsbc-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a run
#[derive(Error, Debug)]
pub enum Error {
    /// A requested feature needs a tool that is not installed
    #[error("Install {tool} to use Typescript-BC Project Generator")]
    Precondition { tool: String },

    /// An explicitly supplied flag value is outside the allowed set
    #[error("Invalid {flag} \"{value}\". Must be one of: {allowed}")]
    InvalidExplicitValue {
        flag: String,
        value: String,
        allowed: String,
    },

    /// A merged value failed the final re-check
    #[error("Invalid {field} \"{value}\"")]
    PostResolutionInvalidValue { field: String, value: String },

    /// The project initializer reported failure
    #[error("Project initialization failed: {message}")]
    Initialization { message: String },

    /// Terminal interaction failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value or format
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing-tool error
    pub fn precondition(tool: impl Into<String>) -> Self {
        Self::Precondition { tool: tool.into() }
    }

    /// Create an invalid explicit value error, listing the allowed values
    pub fn invalid_explicit_value(
        flag: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidExplicitValue {
            flag: flag.into(),
            value: value.into(),
            allowed: allowed.join(", "),
        }
    }

    /// Create a post-resolution validation error
    pub fn post_resolution_invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::PostResolutionInvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an initialization error
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::Initialization {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
