//! Check status types.
//!
//! Each dependency check produces a `CheckStatus` describing whether the
//! dependency is available, and a `CheckedDependency` carrying it alongside
//! the descriptor that was checked.

use crate::catalog::DependencyDescriptor;
use serde::Serialize;
use std::fmt;

/// The result of checking a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Probe found the dependency.
    Installed,

    /// Probe ran cleanly and found nothing.
    Missing,

    /// Probe could not complete (non-zero exit, spawn failure, timeout).
    Error,

    /// Dependency does not apply to this host.
    NotApplicable,
}

impl CheckStatus {
    /// Whether the dependency is present.
    pub fn is_installed(&self) -> bool {
        matches!(self, CheckStatus::Installed)
    }

    /// Whether the dependency takes part in pass/fail accounting.
    pub fn is_applicable(&self) -> bool {
        !matches!(self, CheckStatus::NotApplicable)
    }

    /// Label shown in the report.
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Installed => "Installed",
            CheckStatus::Missing => "Missing",
            CheckStatus::Error => "Error",
            CheckStatus::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A descriptor together with the outcome of checking it.
#[derive(Debug, Clone, Serialize)]
pub struct CheckedDependency {
    #[serde(flatten)]
    pub descriptor: DependencyDescriptor,

    pub status: CheckStatus,

    /// Raw probe output or env value; empty unless installed.
    pub detected_version: String,

    /// Diagnostic note, e.g. why a probe errored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckedDependency {
    /// Create a result with no detail.
    pub fn new(
        descriptor: DependencyDescriptor,
        status: CheckStatus,
        detected_version: impl Into<String>,
    ) -> Self {
        Self {
            descriptor,
            status,
            detected_version: detected_version.into(),
            detail: None,
        }
    }

    /// Attach a diagnostic note.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Dependency display name.
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    /// Whether this dependency fails the diagnosis.
    pub fn is_blocking(&self) -> bool {
        self.status.is_applicable() && !self.descriptor.optional && !self.status.is_installed()
    }
}
