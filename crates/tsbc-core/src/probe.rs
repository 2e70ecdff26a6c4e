//! Host environment probes
//!
//! Each probe runs `<tool> --version` and reports availability. Probes never
//! fail: a missing binary, a spawn error and a non-zero exit all mean "absent".

use tracing::debug;

use crate::config::ToolsConfig;
use crate::runner::{CommandRunner, Invocation};

/// Whether the configured version-control binary (default `git`) is usable
pub fn has_version_control(runner: &dyn CommandRunner, tools: &ToolsConfig) -> bool {
    is_tool_available(runner, &tools.vcs)
}

/// Whether the configured editor CLI (default `code`) is usable
pub fn has_editor_cli(runner: &dyn CommandRunner, tools: &ToolsConfig) -> bool {
    is_tool_available(runner, &tools.editor)
}

fn is_tool_available(runner: &dyn CommandRunner, program: &str) -> bool {
    let available = runner
        .run_quiet(&Invocation::new(program).arg("--version"))
        .unwrap_or(false);
    debug!(tool = program, available, "probed tool");
    available
}
