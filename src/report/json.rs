//! Machine-readable report output.

use super::render::RenderOptions;
use super::{Diagnosis, Report, SystemInfo};
use crate::checker::CheckedDependency;
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    tool: &'static str,
    version: &'static str,
    generated_at: String,
    system: &'a SystemInfo,
    dependencies: Vec<&'a CheckedDependency>,
    diagnosis: &'a Diagnosis,
    issues: &'a [String],
    warnings: &'a [String],
}

/// Serialize a report as pretty-printed JSON.
///
/// The category filter applies to the dependency list only; the diagnosis
/// always covers every checked dependency.
pub fn to_json(report: &Report, options: &RenderOptions) -> Result<String> {
    let doc = JsonReport {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        generated_at: report.generated_at.to_rfc3339(),
        system: &report.system,
        dependencies: report
            .dependencies
            .iter()
            .filter(|d| options.includes(d.descriptor.category))
            .collect(),
        diagnosis: &report.diagnosis,
        issues: &report.diagnostics.issues,
        warnings: &report.diagnostics.warnings,
    };

    serde_json::to_string_pretty(&doc).map_err(|e| anyhow::Error::from(e).into())
}
