//! Test doubles shared by the unit tests

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tsbc_core::{CommandRunner, Invocation, RunOutput};

/// Runner that records every invocation and succeeds unless told otherwise
#[derive(Default)]
pub struct RecordingRunner {
    failing: HashSet<String>,
    missing: HashSet<String>,
    calls: Mutex<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit non-zero for one exact command line
    pub fn with_failing(mut self, command_line: &str) -> Self {
        self.failing.insert(command_line.to_string());
        self
    }

    /// Fail to spawn `program`
    pub fn with_missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run_quiet(&self, invocation: &Invocation) -> std::io::Result<bool> {
        Ok(self.run_captured(invocation)?.success)
    }

    fn run_captured(&self, invocation: &Invocation) -> std::io::Result<RunOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        if self.missing.contains(&invocation.program) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", invocation.program),
            ));
        }
        let line = invocation.to_string();
        if self.failing.contains(&line) {
            return Ok(RunOutput {
                success: false,
                stderr: format!("{} exploded", line),
            });
        }
        Ok(RunOutput {
            success: true,
            stderr: String::new(),
        })
    }
}
