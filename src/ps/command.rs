use async_trait::async_trait;
use tokio::process::Command;

use crate::platform::OsFamily;
use crate::prelude::*;

/// Captured streams and exit indicator of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the command was terminated by a signal.
    pub exit_code: Option<i32>,
}

/// Launches a command and captures both of its streams.
///
/// The production implementation is [`TokioLauncher`]; tests substitute fakes
/// instead of patching process primitives globally.
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Launcher backed by `tokio::process`.
pub struct TokioLauncher;

#[async_trait]
impl ProcessLauncher for TokioLauncher {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        // output() drains stdout and stderr concurrently, so the child can
        // never block on a full pipe before exiting.
        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .with_context(|| format!("failed to launch {program}"))?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// `ps` arguments requesting the parent-PID and PID columns.
pub(crate) fn listing_args(family: OsFamily) -> &'static [&'static str] {
    match family {
        OsFamily::Darwin => &["-axo", "ppid,pid"],
        OsFamily::Posix => &["-A", "-o", "ppid,pid"],
    }
}
