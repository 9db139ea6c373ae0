//! Pass/fail verdict over checked dependencies.

use crate::checker::CheckedDependency;
use serde::Serialize;

/// SUCCESS when every required, applicable dependency is installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub success: bool,
    /// Offending dependency names, in catalog order.
    pub missing: Vec<String>,
}

impl Diagnosis {
    /// Evaluate checked dependencies.
    pub fn evaluate(checked: &[CheckedDependency]) -> Self {
        let missing: Vec<String> = checked
            .iter()
            .filter(|c| c.is_blocking())
            .map(|c| c.name().to_string())
            .collect();

        Self {
            success: missing.is_empty(),
            missing,
        }
    }

    /// Banner word.
    pub fn verdict(&self) -> &'static str {
        if self.success {
            "SUCCESS"
        } else {
            "FAILURE"
        }
    }
}
