//! Known-problem detection over checked dependencies.
//!
//! Each [`IssueRule`] inspects the checked list plus a [`DiagnosticEnv`] and
//! may produce one [`Finding`]. Rules are independent and read-only.

use crate::catalog::names;
use crate::checker::{CheckStatus, CheckedDependency};
use crate::shell::{system_env, EnvLookup, HostOs};
use serde::Serialize;

/// Go release that introduced the WebAssembly target the web build uses.
pub const MIN_WASM_GO: &str = "go1.16";

/// Wayland tracking issue.
pub const WAYLAND_ISSUE: &str = "https://github.com/fyne-io/fyne/issues/5908";

/// Host facts the rules may consult besides the checked list.
pub struct DiagnosticEnv {
    pub host: HostOs,
    env: EnvLookup,
}

impl DiagnosticEnv {
    /// Environment of the running process.
    pub fn system(host: HostOs) -> Self {
        Self {
            host,
            env: system_env(),
        }
    }

    /// Replace the environment lookup.
    pub fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    /// Read a variable; unset reads as empty.
    pub fn var(&self, key: &str) -> String {
        (self.env)(key).unwrap_or_default()
    }
}

/// Kind of finding a rule produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Likely to break Fyne apps on this machine.
    Issue(String),
    /// Worth knowing, but builds may still succeed.
    Warning(String),
}

/// A single known-problem check.
pub trait IssueRule {
    /// Short identifier.
    fn id(&self) -> &'static str;

    /// Inspect the results.
    fn check(&self, checked: &[CheckedDependency], env: &DiagnosticEnv) -> Option<Finding>;
}

/// Aggregated findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl Diagnostics {
    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }
}

fn status_of(checked: &[CheckedDependency], name: &str) -> Option<CheckStatus> {
    checked.iter().find(|c| c.name() == name).map(|c| c.status)
}

fn is_installed(checked: &[CheckedDependency], name: &str) -> bool {
    status_of(checked, name) == Some(CheckStatus::Installed)
}

struct WaylandSession;

impl IssueRule for WaylandSession {
    fn id(&self) -> &'static str {
        "wayland-session"
    }

    fn check(&self, checked: &[CheckedDependency], env: &DiagnosticEnv) -> Option<Finding> {
        if env.var("XDG_SESSION_TYPE") != "wayland" || is_installed(checked, names::WAYLAND_SUPPORT)
        {
            return None;
        }
        Some(Finding::Issue(format!(
            "Running on Wayland but Wayland support may be incomplete (see {})",
            WAYLAND_ISSUE
        )))
    }
}

struct AndroidNdk;

impl IssueRule for AndroidNdk {
    fn id(&self) -> &'static str {
        "android-ndk"
    }

    fn check(&self, checked: &[CheckedDependency], _env: &DiagnosticEnv) -> Option<Finding> {
        (is_installed(checked, names::ANDROID_SDK) && !is_installed(checked, names::ANDROID_NDK))
            .then(|| {
                Finding::Warning(
                    "Android SDK found but NDK missing - mobile builds may fail".to_string(),
                )
            })
    }
}

struct GpuAcceleration;

impl IssueRule for GpuAcceleration {
    fn id(&self) -> &'static str {
        "gpu-acceleration"
    }

    fn check(&self, checked: &[CheckedDependency], env: &DiagnosticEnv) -> Option<Finding> {
        (env.host == HostOs::Linux && !is_installed(checked, names::GPU_ACCELERATION)).then(|| {
            Finding::Warning(
                "GPU acceleration not available - performance may be reduced".to_string(),
            )
        })
    }
}

struct WasmGoVersion;

impl IssueRule for WasmGoVersion {
    fn id(&self) -> &'static str {
        "wasm-go-version"
    }

    fn check(&self, checked: &[CheckedDependency], _env: &DiagnosticEnv) -> Option<Finding> {
        let go = checked
            .iter()
            .find(|c| c.name() == names::GO && c.status == CheckStatus::Installed)?;
        if go.detected_version.is_empty() || go.detected_version.contains(MIN_WASM_GO) {
            return None;
        }
        Some(Finding::Warning(
            "Go version < 1.16 - WebAssembly builds not supported".to_string(),
        ))
    }
}

/// The built-in rule set, in report order.
pub fn builtin_rules() -> Vec<Box<dyn IssueRule>> {
    vec![
        Box::new(WaylandSession),
        Box::new(AndroidNdk),
        Box::new(GpuAcceleration),
        Box::new(WasmGoVersion),
    ]
}

/// Run every built-in rule.
pub fn diagnose(checked: &[CheckedDependency], env: &DiagnosticEnv) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    for rule in builtin_rules() {
        match rule.check(checked, env) {
            Some(Finding::Issue(message)) => {
                tracing::debug!("Rule '{}' raised an issue", rule.id());
                diagnostics.issues.push(message);
            }
            Some(Finding::Warning(message)) => {
                tracing::debug!("Rule '{}' raised a warning", rule.id());
                diagnostics.warnings.push(message);
            }
            None => {}
        }
    }

    diagnostics
}
