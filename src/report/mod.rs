//! Report assembly and rendering.
//!
//! A [`Report`] bundles the checked dependency list with everything derived
//! from it: the pass/fail [`Diagnosis`] and rule-based [`Diagnostics`]. It is
//! rendered either as box-drawn text ([`render`]) or as JSON ([`json`]).

pub mod diagnosis;
pub mod issues;
pub mod json;
pub mod render;
pub mod system;
pub mod table;
pub mod tips;

pub use diagnosis::Diagnosis;
pub use issues::{diagnose, DiagnosticEnv, Diagnostics};
pub use render::{render_dependencies, render_report, RenderOptions};
pub use system::SystemInfo;
pub use table::Table;

use crate::checker::CheckedDependency;
use chrono::{DateTime, Utc};

/// Everything one doctor run found.
#[derive(Debug, Clone)]
pub struct Report {
    pub system: SystemInfo,
    pub generated_at: DateTime<Utc>,
    pub dependencies: Vec<CheckedDependency>,
    pub diagnosis: Diagnosis,
    pub diagnostics: Diagnostics,
}

impl Report {
    /// Derive the diagnosis and diagnostics for a checked list.
    pub fn new(
        system: SystemInfo,
        dependencies: Vec<CheckedDependency>,
        env: &DiagnosticEnv,
    ) -> Self {
        let diagnosis = Diagnosis::evaluate(&dependencies);
        let diagnostics = diagnose(&dependencies, env);

        Self {
            system,
            generated_at: Utc::now(),
            dependencies,
            diagnosis,
            diagnostics,
        }
    }

    /// Whether the machine is ready for development.
    pub fn is_success(&self) -> bool {
        self.diagnosis.success
    }
}
