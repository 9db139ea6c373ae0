//! Dependency checking.
//!
//! Turns catalog descriptors into checked results by running their probes.

pub mod probe;
pub mod status;

pub use probe::DependencyChecker;
pub use status::{CheckStatus, CheckedDependency};
