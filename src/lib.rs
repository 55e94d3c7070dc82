//! Parent/child PID pairs from the system process-listing command.
//!
//! The crate spawns `ps` with the column flags matching the host platform,
//! waits for it to finish, and parses its output into ordered
//! `(parent PID, PID)` pairs. A known-benign terminal warning on stderr is
//! tolerated; any other stderr content fails the call.

pub mod app;
pub mod platform;
pub mod ps;

mod prelude;

pub use platform::{HostPlatform, OsFamily, PlatformInfo};
pub use ps::{CommandOutput, PidPair, ProcessLauncher, TokioLauncher, ps, ps_with};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
