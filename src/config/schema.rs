//! Configuration schema definitions.
//!
//! [`FileConfig`] maps one YAML file; every key is optional so files can be
//! layered. [`DoctorConfig`] is the resolved result the doctor runs with.

use crate::catalog::Category;
use crate::shell::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root structure of a `.fyne-doctor.yml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Show full versions and per-probe details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Emit JSON instead of the text report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,

    /// Categories to report on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    /// Per-probe timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Also write the report to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Exit non-zero when the diagnosis fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Fully resolved doctor settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorConfig {
    pub verbose: bool,
    pub json: bool,
    /// Empty means every category.
    pub categories: Vec<Category>,
    pub timeout: Duration,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            json: false,
            categories: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            output: None,
            strict: false,
        }
    }
}

impl DoctorConfig {
    /// Layer a file over the current settings; keys present in the file win.
    pub fn apply(&mut self, file: FileConfig) {
        if let Some(verbose) = file.verbose {
            self.verbose = verbose;
        }
        if let Some(json) = file.json {
            self.json = json;
        }
        if let Some(categories) = file.categories {
            self.categories = categories;
        }
        if let Some(secs) = file.timeout {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(output) = file.output {
            self.output = Some(output);
        }
        if let Some(strict) = file.strict {
            self.strict = strict;
        }
    }
}
