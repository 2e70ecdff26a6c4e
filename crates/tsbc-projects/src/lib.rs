//! # tsbc-projects
//!
//! Project scaffolding for create-typescript-bc:
//! - Template materialization (GitHub archive or local directory)
//! - `package.json` naming and lock file cleanup
//! - Dependency installation through the chosen package manager
//! - Git repository initialization
//!
//! [`ProjectGenerator`] ties these steps together and implements the core
//! [`ProjectInitializer`](tsbc_core::ProjectInitializer) trait.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use tsbc_core::{ResolvedConfig, RuntimeConfig};
//! use tsbc_projects::ProjectGenerator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ProjectGenerator::new(&RuntimeConfig::default())?;
//! let config = ResolvedConfig {
//!     project_type: "bc-controladdin-typescript-template".to_string(),
//!     project_name: "my-addin".to_string(),
//!     use_git: true,
//!     package_manager: "npm".to_string(),
//!     open: false,
//! };
//! generator.generate(&config, Utf8Path::new("/tmp/my-addin")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod exec;
pub mod generator;
pub mod git;
pub mod package;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, Result};
pub use generator::{GenerationStep, ProjectGenerator};
pub use template::TemplateSource;
