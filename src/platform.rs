//! Host operating-system identity, used to pick the `ps` argument syntax.

/// OS families with distinct `ps` invocation syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// macOS and other Darwin derivatives, using BSD-style options.
    Darwin,
    /// Everything else POSIX, using standard syntax.
    Posix,
}

/// Identifies the platform the listing command runs on.
///
/// Injected into [`ps_with`](crate::ps::ps_with) so tests can pin either
/// family without depending on the build target.
pub trait PlatformInfo {
    fn os_family(&self) -> OsFamily;
}

/// Platform identity of the machine this crate was compiled for.
pub struct HostPlatform;

impl PlatformInfo for HostPlatform {
    fn os_family(&self) -> OsFamily {
        if cfg!(target_os = "macos") {
            OsFamily::Darwin
        } else {
            OsFamily::Posix
        }
    }
}
