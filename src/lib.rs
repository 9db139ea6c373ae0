//! fyne-doctor - development environment diagnostics for Fyne.
//!
//! fyne-doctor probes a machine for everything a Fyne developer needs (Go,
//! the Fyne CLI, a C toolchain, platform SDKs, display libraries) and prints
//! a categorized report with a pass/fail diagnosis.
//!
//! # Modules
//!
//! - [`catalog`] - The declarative list of dependencies and their probes
//! - [`checker`] - Running probes and recording their status
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.fyne-doctor.yml` loading and layering
//! - [`error`] - Error types and result aliases
//! - [`report`] - Diagnosis, issue rules and text/JSON rendering
//! - [`shell`] - Subprocess execution with timeouts, host detection
//! - [`ui`] - Spinners, theme and terminal output
//!
//! # Example
//!
//! ```
//! use fyne_doctor::catalog::{self, names};
//! use fyne_doctor::shell::HostOs;
//!
//! let deps = catalog::build(HostOs::Linux);
//! assert_eq!(deps[0].name, names::GO);
//! ```

pub mod catalog;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{DoctorError, Result};
