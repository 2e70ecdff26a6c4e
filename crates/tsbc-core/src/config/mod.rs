//! Runtime configuration: types and layered loading

mod loader;
mod runtime;

pub use loader::ConfigLoader;
pub use runtime::{
    DisplayConfig, GitConfig, NetworkConfig, RuntimeConfig, TemplatesConfig, ToolsConfig,
};
