//! Spawn the system `ps` command and parse its listing into PID pairs.

mod command;
mod parser;
mod stderr;

pub use command::{CommandOutput, ProcessLauncher, TokioLauncher};

use serde::Serialize;

use crate::platform::{HostPlatform, PlatformInfo};
use crate::prelude::*;

/// A parent/child process-ID pair, in the order `ps` printed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PidPair {
    pub ppid: u32,
    pub pid: u32,
}

/// List all running processes as `(parent PID, PID)` pairs.
///
/// Spawns `ps` with the column flags matching the host platform, waits for it
/// to finish, and parses its output. The listing order is preserved. stderr
/// output fails the call unless it is the known-benign terminal screen-size
/// warning.
pub async fn ps() -> Result<Vec<PidPair>> {
    ps_with(&TokioLauncher, &HostPlatform).await
}

/// Same as [`ps`], with the process launcher and platform identity injected.
pub async fn ps_with(
    launcher: &dyn ProcessLauncher,
    platform: &dyn PlatformInfo,
) -> Result<Vec<PidPair>> {
    let args = command::listing_args(platform.os_family());
    debug!("running ps {}", args.join(" "));

    let output = launcher.run("ps", args).await?;
    if let Some(code) = output.exit_code
        && code != 0
    {
        debug!("ps exited with status {code}");
    }
    stderr::ensure_benign(&output.stderr)?;

    Ok(parser::parse_listing(&output.stdout))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::platform::OsFamily;

    const LISTING: &str = "PPID   PID\n   1   430\n 430   432\n   1   727\n   1  7166\n";

    fn expected_pairs() -> Vec<PidPair> {
        vec![
            PidPair { ppid: 1, pid: 430 },
            PidPair { ppid: 430, pid: 432 },
            PidPair { ppid: 1, pid: 727 },
            PidPair { ppid: 1, pid: 7166 },
        ]
    }

    struct FakeLauncher {
        stdout: &'static str,
        stderr: &'static str,
        seen: Mutex<Vec<String>>,
    }

    impl FakeLauncher {
        fn new(stdout: &'static str, stderr: &'static str) -> Self {
            Self {
                stdout,
                stderr,
                seen: Mutex::new(Vec::new()),
            }
        }

        fn command_line(&self) -> String {
            self.seen.lock().unwrap().join(" ")
        }
    }

    #[async_trait]
    impl ProcessLauncher for FakeLauncher {
        async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
            let mut seen = self.seen.lock().unwrap();
            seen.push(program.to_string());
            seen.extend(args.iter().map(|a| a.to_string()));

            Ok(CommandOutput {
                stdout: self.stdout.to_string(),
                stderr: self.stderr.to_string(),
                exit_code: Some(0),
            })
        }
    }

    struct FailingLauncher;

    #[async_trait]
    impl ProcessLauncher for FailingLauncher {
        async fn run(&self, program: &str, _args: &[&str]) -> Result<CommandOutput> {
            bail!("failed to launch {program}")
        }
    }

    struct FakePlatform(OsFamily);

    impl PlatformInfo for FakePlatform {
        fn os_family(&self) -> OsFamily {
            self.0
        }
    }

    #[tokio::test]
    async fn parses_listing_on_darwin() {
        let launcher = FakeLauncher::new(LISTING, "");
        let pairs = ps_with(&launcher, &FakePlatform(OsFamily::Darwin))
            .await
            .unwrap();

        assert_eq!(pairs, expected_pairs());
        assert_eq!(launcher.command_line(), "ps -axo ppid,pid");
    }

    #[tokio::test]
    async fn parses_listing_on_posix() {
        let launcher = FakeLauncher::new(LISTING, "");
        let pairs = ps_with(&launcher, &FakePlatform(OsFamily::Posix))
            .await
            .unwrap();

        assert_eq!(pairs, expected_pairs());
        assert_eq!(launcher.command_line(), "ps -A -o ppid,pid");
    }

    #[tokio::test]
    async fn fails_when_stderr_has_a_real_error() {
        let launcher = FakeLauncher::new(LISTING, "Some error");
        let err = ps_with(&launcher, &FakePlatform(OsFamily::Posix))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Some error"));
    }

    #[tokio::test]
    async fn tolerates_bogus_screen_size_warning() {
        let launcher = FakeLauncher::new(
            LISTING,
            "Error: your 131072x1 screen size is bogus. expect trouble",
        );
        let pairs = ps_with(&launcher, &FakePlatform(OsFamily::Posix))
            .await
            .unwrap();

        assert_eq!(pairs, expected_pairs());
    }

    #[tokio::test]
    async fn empty_listing_yields_empty_result() {
        let launcher = FakeLauncher::new("PPID   PID\n", "");
        let pairs = ps_with(&launcher, &FakePlatform(OsFamily::Posix))
            .await
            .unwrap();

        assert!(pairs.is_empty());
    }

    #[tokio::test]
    async fn launch_failure_propagates() {
        let err = ps_with(&FailingLauncher, &FakePlatform(OsFamily::Posix))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to launch ps"));
    }
}
