//! Blocking process execution from async code

use std::io;
use std::sync::Arc;

use tsbc_core::{CommandRunner, Invocation, RunOutput};

/// Runner shared between the generator and the blocking pool
pub type SharedRunner = Arc<dyn CommandRunner + Send + Sync>;

/// Run `invocation` on the blocking pool, capturing stderr
pub async fn run(runner: &SharedRunner, invocation: Invocation) -> io::Result<RunOutput> {
    let runner = Arc::clone(runner);
    tokio::task::spawn_blocking(move || runner.run_captured(&invocation))
        .await
        .map_err(io::Error::other)?
}
