//! Host platform detection.

use serde::Serialize;
use std::env::VarError;
use std::fmt;

/// Lookup function for environment variables.
///
/// Probes and diagnostics read the environment through this indirection so
/// tests can supply a fixed environment without mutating the process.
pub type EnvLookup = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// Environment lookup backed by the real process environment.
pub fn system_env() -> EnvLookup {
    Box::new(|key: &str| std::env::var(key))
}

/// Operating system family of the machine being inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl HostOs {
    /// Detect the host this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name (`std::env::consts::OS` style, or Go's `darwin`) to a host.
    pub fn from_os_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "windows" => HostOs::Windows,
            "macos" | "darwin" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Windows => "windows",
            HostOs::MacOs => "macos",
            HostOs::Linux => "linux",
            HostOs::Other => "other",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shell executable and the flag that makes it run a command string.
///
/// Probes use a plain non-login shell: login/interactive shells print
/// banners and source rc files, which pollutes captured version output.
pub fn shell_program() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        (
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
            "/C",
        )
    } else {
        ("sh".to_string(), "-c")
    }
}

/// Check if running in a CI environment.
///
/// Used to suppress spinners in log-based environments.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
