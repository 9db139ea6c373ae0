//! Configuration loading for fyne-doctor.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use fyne_doctor::config::load_config;
//! use std::fs;
//! use std::time::Duration;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("doctor.yml");
//! fs::write(&path, "timeout: 3\ncategories: [core, mobile]").unwrap();
//!
//! let config = load_config(temp.path(), Some(&path)).unwrap();
//! assert_eq!(config.timeout, Duration::from_secs(3));
//! assert_eq!(config.categories.len(), 2);
//! ```
//!
//! # Configuration File Locations
//!
//! Settings are layered in this order, later wins:
//! 1. Built-in defaults
//! 2. User global config (`~/.fyne-doctor/config.yml`)
//! 3. Project config (`.fyne-doctor.yml` in the working directory)
//! 4. Command-line flags and `FYNE_DOCTOR_*` environment variables
//!
//! `--config <PATH>` replaces steps 2 and 3 with a single file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, ConfigPaths, PROJECT_CONFIG};
pub use schema::{DoctorConfig, FileConfig};
