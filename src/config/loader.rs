//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::schema::{DoctorConfig, FileConfig};
use crate::error::{DoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const PROJECT_CONFIG: &str = ".fyne-doctor.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.fyne-doctor/config.yml`)
/// 2. Project config (`.fyne-doctor.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.fyne-doctor/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .fyne-doctor.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given working directory.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(dirs::home_dir().as_deref(), project_root)
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(home: Option<&Path>, project_root: &Path) -> Self {
        Self {
            user_global: home
                .map(|h| h.join(".fyne-doctor").join("config.yml"))
                .filter(|p| p.exists()),
            project: Some(project_root.join(PROJECT_CONFIG)).filter(|p| p.exists()),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid or has unknown keys.
pub fn load_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a `FileConfig`.
///
/// An empty or comment-only document is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<FileConfig> {
    let parse_error = |message: String| DoctorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message,
    };

    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    if value.is_null() {
        return Ok(FileConfig::default());
    }

    let config: FileConfig =
        serde_yaml::from_value(value).map_err(|e| parse_error(e.to_string()))?;

    if config.timeout == Some(0) {
        return Err(parse_error("timeout must be at least 1 second".to_string()));
    }

    Ok(config)
}

/// Resolve settings from defaults and config files.
///
/// If `config_override` is provided, only that file is layered over the
/// defaults. Otherwise the discovered files are layered in merge order.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<DoctorConfig> {
    let paths = match config_override {
        Some(path) => vec![path.to_path_buf()],
        None => ConfigPaths::discover(project_root)
            .all_existing()
            .into_iter()
            .cloned()
            .collect(),
    };

    let mut config = DoctorConfig::default();
    for path in paths {
        tracing::debug!("Loading config from {}", path.display());
        config.apply(load_config_file(&path)?);
    }
    Ok(config)
}
