//! Dependency descriptor types.

use crate::error::DoctorError;
use crate::shell::HostOs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform a dependency applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    All,
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
}

impl Platform {
    /// Whether a dependency for this platform should be checked on `host`.
    ///
    /// Mobile targets never match a desktop host; their tooling is probed
    /// through `All`/`MacOs` entries instead.
    pub fn applies_to(&self, host: HostOs) -> bool {
        match self {
            Platform::All => true,
            Platform::Windows => host == HostOs::Windows,
            Platform::MacOs => host == HostOs::MacOs,
            Platform::Linux => host == HostOs::Linux,
            Platform::Android | Platform::Ios => false,
        }
    }
}

/// Report grouping for dependencies.
///
/// Declaration order is display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Mobile,
    Web,
    Performance,
    Compatibility,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Core,
        Category::Mobile,
        Category::Web,
        Category::Performance,
        Category::Compatibility,
    ];

    /// Section title used in the text report.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Core => "Core Dependencies",
            Category::Mobile => "Mobile Development",
            Category::Web => "Web Development",
            Category::Performance => "Performance",
            Category::Compatibility => "Compatibility",
        }
    }

    /// Lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Mobile => "mobile",
            Category::Web => "web",
            Category::Performance => "performance",
            Category::Compatibility => "compatibility",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DoctorError::InvalidCategory {
                name: s.to_string(),
            })
    }
}

/// How much a missing dependency matters. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// Detection strategy for a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Probe {
    /// Read an environment variable; set and non-empty means installed.
    EnvVar { var: String },

    /// Ask `pkg-config` whether a library is installed.
    ///
    /// `raw` holds the exact command line when the probe was classified from
    /// one that carries more than the package query.
    PackageExists {
        package: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },

    /// Look for any of several programs on PATH.
    PathSearch {
        candidates: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },

    /// Shell predicate whose output (if any) is the detected value.
    CompoundShell { command: String },

    /// Run a program and report its output as the version.
    CommandOutput { command: String },
}

impl Probe {
    /// Environment-variable probe.
    pub fn env_var(var: &str) -> Self {
        Probe::EnvVar {
            var: var.to_string(),
        }
    }

    /// `pkg-config --exists` probe.
    pub fn package(package: &str) -> Self {
        Probe::PackageExists {
            package: package.to_string(),
            raw: None,
        }
    }

    /// PATH search over candidate program names.
    pub fn path_search(candidates: &[&str]) -> Self {
        Probe::PathSearch {
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            raw: None,
        }
    }

    /// Compound shell predicate.
    pub fn compound(command: &str) -> Self {
        Probe::CompoundShell {
            command: command.to_string(),
        }
    }

    /// Plain version command.
    pub fn command(command: &str) -> Self {
        Probe::CommandOutput {
            command: command.to_string(),
        }
    }

    /// Derive a probe kind from a raw command line.
    ///
    /// Precedence follows the order the detection strategies are documented
    /// in: `echo $VAR`, then `pkg-config --exists`, then a `which ` prefix,
    /// then `&&`/`||` chains, and finally a plain command.
    ///
    /// Package queries and PATH searches keep the full command line when it
    /// says more than the rebuilt form, so it still runs as written.
    pub fn classify(command_line: &str) -> Self {
        let trimmed = command_line.trim();

        if let Some(var) = trimmed.strip_prefix("echo $") {
            return Probe::EnvVar {
                var: var.trim().to_string(),
            };
        }

        if let Some((_, rest)) = trimmed.split_once("pkg-config --exists") {
            let package = rest.split_whitespace().next().unwrap_or_default();
            return Probe::package(package).keeping_raw(trimmed);
        }

        if trimmed.starts_with("which ") {
            let mut candidates = Vec::new();
            let mut tokens = trimmed.split_whitespace();
            while let Some(token) = tokens.next() {
                if token == "which" {
                    if let Some(candidate) = tokens.next() {
                        candidates.push(candidate.to_string());
                    }
                }
            }
            return Probe::PathSearch {
                candidates,
                raw: None,
            }
            .keeping_raw(trimmed);
        }

        if trimmed.contains("&&") || trimmed.contains("||") {
            return Probe::CompoundShell {
                command: trimmed.to_string(),
            };
        }

        Probe::CommandOutput {
            command: trimmed.to_string(),
        }
    }

    fn keeping_raw(mut self, command_line: &str) -> Self {
        if self.command_line() == command_line {
            return self;
        }
        if let Probe::PackageExists { raw, .. } | Probe::PathSearch { raw, .. } = &mut self {
            *raw = Some(command_line.to_string());
        }
        self
    }

    /// The command line this probe stands for.
    pub fn command_line(&self) -> String {
        match self {
            Probe::EnvVar { var } => format!("echo ${}", var),
            Probe::PackageExists { raw: Some(raw), .. }
            | Probe::PathSearch { raw: Some(raw), .. } => raw.clone(),
            Probe::PackageExists { package, .. } => format!("pkg-config --exists {}", package),
            Probe::PathSearch { candidates, .. } => candidates
                .iter()
                .map(|c| format!("which {}", c))
                .collect::<Vec<_>>()
                .join(" || "),
            Probe::CompoundShell { command } | Probe::CommandOutput { command } => {
                command.clone()
            }
        }
    }
}

/// A dependency the doctor knows how to check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyDescriptor {
    /// Display name, unique within a catalog.
    pub name: String,
    /// How to detect it.
    pub probe: Probe,
    /// Absence does not fail the diagnosis.
    pub optional: bool,
    /// Where it applies.
    pub platform: Platform,
    /// Report grouping.
    pub category: Category,
    /// Importance hint.
    pub severity: Severity,
    /// Short description for the report.
    pub description: String,
    /// Related upstream issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_link: Option<String>,
}

impl DependencyDescriptor {
    /// Create a required, critical, all-platform core dependency.
    ///
    /// Use struct update syntax to adjust the remaining fields.
    pub fn new(name: &str, probe: Probe, description: &str) -> Self {
        Self {
            name: name.to_string(),
            probe,
            optional: false,
            platform: Platform::All,
            category: Category::Core,
            severity: Severity::Critical,
            description: description.to_string(),
            issue_link: None,
        }
    }

    /// Whether this dependency should be checked on `host`.
    pub fn applies_to(&self, host: HostOs) -> bool {
        self.platform.applies_to(host)
    }
}
