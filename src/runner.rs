use std::os::unix::process::ExitStatusExt;
use std::path::Path;
use std::process::ExitStatus;

use tokio::process::Command;
use tokio::signal::unix::{Signal, SignalKind, signal};

use crate::command::CommandSpec;
use crate::error::{Error, Result};

/// Status reported when the program exists but could not be executed.
pub const EXEC_FAILED: i32 = 126;

/// Run `spec` from the already-resolved `path`, inheriting stdio, and wait
/// for that child to exit.
///
/// Terminal SIGINT and SIGQUIT reach the whole foreground group. While the
/// child runs they are left to it: this process swallows them and keeps
/// waiting, so the outcome is still reported. Listeners go in before the
/// spawn; the child gets default dispositions back on exec.
pub async fn run(path: &Path, spec: &CommandSpec) -> Result<i32> {
    let mut sigint = listen(SignalKind::interrupt());
    let mut sigquit = listen(SignalKind::quit());

    let mut child = match Command::new(path).args(spec.args()).spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to execute program");
            return Ok(EXEC_FAILED);
        }
    };

    let pid = child.id();
    tracing::debug!(?pid, path = %path.display(), "program started");

    let status = loop {
        tokio::select! {
            status = child.wait() => break status.map_err(Error::Wait)?,
            _ = next(&mut sigint) => tracing::debug!(?pid, "ignoring SIGINT while program runs"),
            _ = next(&mut sigquit) => tracing::debug!(?pid, "ignoring SIGQUIT while program runs"),
        }
    };
    let code = exit_code(status);
    tracing::debug!(?pid, code, "program exited");
    Ok(code)
}

fn listen(kind: SignalKind) -> Option<Signal> {
    signal(kind)
        .map_err(|e| tracing::warn!(?kind, error = %e, "cannot listen for signal"))
        .ok()
}

/// Resolve on the next delivery of `signal`; never resolve once it is gone.
async fn next(signal: &mut Option<Signal>) {
    if let Some(s) = signal {
        if s.recv().await.is_some() {
            return;
        }
    }
    *signal = None;
    std::future::pending::<()>().await;
}

/// Normalize a wait status to an exit code: the program's own code when it
/// exited, `128 + signal` when it was killed.
pub fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}
