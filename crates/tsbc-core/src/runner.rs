//! Process execution capability
//!
//! Probes, the editor launch, dependency installation and git all go through
//! [`CommandRunner`] so tests can substitute scripted exit codes for real
//! processes.

use std::fmt;
use std::process::{Command, Stdio};

use camino::Utf8PathBuf;
use tracing::debug;

/// A program with arguments and an optional working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<Utf8PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Build from a whitespace-separated command string (e.g. `npm --version`)
    ///
    /// Returns `None` for an empty command.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program).args(parts))
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of [`CommandRunner::run_captured`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub success: bool,
    /// Standard error, lossily decoded
    pub stderr: String,
}

/// Runs a process to completion with its output discarded
pub trait CommandRunner {
    /// Run `invocation` and report whether it exited successfully
    ///
    /// Spawn failures are returned as `Err`; a non-zero exit is `Ok(false)`.
    fn run_quiet(&self, invocation: &Invocation) -> std::io::Result<bool>;

    /// Like [`run_quiet`](CommandRunner::run_quiet), keeping stderr for error
    /// reports
    fn run_captured(&self, invocation: &Invocation) -> std::io::Result<RunOutput> {
        self.run_quiet(invocation).map(|success| RunOutput {
            success,
            stderr: String::new(),
        })
    }
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a program through `PATH`, keeping the bare name when lookup fails
    ///
    /// Lookup matters on Windows, where editor shims such as `code.cmd` are not
    /// found by `Command::new("code")`.
    fn resolve_program(program: &str) -> std::ffi::OsString {
        match which::which(program) {
            Ok(path) => path.into_os_string(),
            Err(_) => program.into(),
        }
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(Self::resolve_program(&invocation.program));
        cmd.args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null());
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }
        debug!("Running: {}", invocation);
        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run_quiet(&self, invocation: &Invocation) -> std::io::Result<bool> {
        let mut cmd = Self::command(invocation);
        cmd.stderr(Stdio::null());

        match cmd.status() {
            Ok(status) => {
                debug!(exit_code = ?status.code(), "{} finished", invocation.program);
                Ok(status.success())
            }
            Err(e) => {
                debug!("Failed to spawn {}: {}", invocation.program, e);
                Err(e)
            }
        }
    }

    fn run_captured(&self, invocation: &Invocation) -> std::io::Result<RunOutput> {
        let output = Self::command(invocation)
            .stderr(Stdio::piped())
            .output()
            .inspect_err(|e| debug!("Failed to spawn {}: {}", invocation.program, e))?;
        debug!(exit_code = ?output.status.code(), "{} finished", invocation.program);
        Ok(RunOutput {
            success: output.status.success(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
