//! Error types for tsbc-projects

use thiserror::Error;

/// Result type alias using tsbc-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Destination already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Package manager check command failed
    #[error("Package manager '{name}' not found. Install it or choose another with --pm")]
    PackageManagerNotFound { name: String },

    /// Template not found at its source
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Template download failed
    #[error("Template download failed: {message}")]
    Download { message: String },

    /// Template archive could not be unpacked
    #[error("Template archive is invalid: {message}")]
    Archive { message: String },

    /// Dependency installation failed
    #[error("Dependency installation failed ({command}): {message}")]
    Install { command: String, message: String },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a package manager not found error
    pub fn package_manager_not_found(name: impl Into<String>) -> Self {
        Self::PackageManagerNotFound { name: name.into() }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create a download error
    pub fn download(message: impl Into<String>) -> Self {
        Self::Download {
            message: message.into(),
        }
    }

    /// Create an archive error
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    /// Create an install error
    pub fn install(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Install {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }
}

/// Every scaffolding failure surfaces as an initialization failure
impl From<Error> for tsbc_core::Error {
    fn from(err: Error) -> Self {
        tsbc_core::Error::initialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::project_exists("/work/demo");
        assert_eq!(err.to_string(), "Project already exists at: /work/demo");

        let err = Error::install("pnpm install", "exit status 1");
        assert_eq!(
            err.to_string(),
            "Dependency installation failed (pnpm install): exit status 1"
        );
    }

    #[test]
    fn test_converts_to_core_initialization_error() {
        let core: tsbc_core::Error =
            Error::template_not_found("bc-controladdin-typescript-template").into();
        assert!(matches!(core, tsbc_core::Error::Initialization { .. }));
        assert!(core.to_string().contains("bc-controladdin-typescript-template"));
    }
}
