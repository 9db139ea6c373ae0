//! The static catalog of dependencies a Fyne build pipeline needs.
//!
//! # Modules
//!
//! - [`types`] - Descriptor, probe, platform and category types
//! - [`builtin`] - The built-in entries and per-OS dispatch
//!
//! # Example
//!
//! ```
//! use fyne_doctor::catalog::{self, names};
//! use fyne_doctor::shell::HostOs;
//!
//! let deps = catalog::build(HostOs::Linux);
//! assert_eq!(deps[0].name, names::GO);
//! assert!(deps.iter().any(|d| d.name == names::FYNE_CLI));
//! ```

pub mod builtin;
pub mod types;

pub use builtin::{build, core_dependencies, OsExtras};
pub use types::{Category, DependencyDescriptor, Platform, Probe, Severity};

/// Names of dependencies that other components look up.
pub mod names {
    pub const GO: &str = "Go";
    pub const FYNE_CLI: &str = "Fyne CLI";
    pub const FYNE_CROSS: &str = "Fyne-cross";
    pub const C_COMPILER: &str = "C Compiler";
    pub const WAYLAND_SUPPORT: &str = "Wayland Support";
    pub const ANDROID_SDK: &str = "Android SDK";
    pub const ANDROID_NDK: &str = "Android NDK";
    pub const GPU_ACCELERATION: &str = "GPU Acceleration";
    pub const DISPLAY_SERVER: &str = "Display Server";
}
