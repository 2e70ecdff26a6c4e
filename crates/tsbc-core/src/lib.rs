//! # tsbc-core
//!
//! Core library for the `create-typescript-bc` CLI providing:
//! - The compiled-in registry of project templates and package managers
//! - Normalizers and validators for user-supplied choices
//! - Host environment probes (version control, editor CLI)
//! - The configuration resolver that merges flags, prompt answers and defaults
//! - The dispatcher that hands a resolved configuration to the initializer
//! - Runtime configuration loading (`~/.create-typescript-bc/config.yaml`)
//!
//! Everything that touches a terminal or spawns a process goes through the
//! [`Prompter`] and [`CommandRunner`] traits so the resolution logic can be
//! exercised without either.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod probe;
pub mod prompt;
pub mod registry;
pub mod resolver;
pub mod runner;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{
    ConfigLoader, DisplayConfig, GitConfig, NetworkConfig, RuntimeConfig, TemplatesConfig,
    ToolsConfig,
};
pub use dispatch::{DispatchOutcome, Dispatcher, EditorOutcome, ProjectInitializer};
pub use error::{Error, Result};
pub use prompt::{Answers, Field, Prompter, Question};
pub use resolver::{Resolution, Resolver};
pub use runner::{CommandRunner, Invocation, RunOutput, SystemRunner};
pub use types::{GitChoice, RawInputs, ResolvedConfig};
