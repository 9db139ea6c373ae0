//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]; running the binary
//! without a subcommand is the same as `fyne-doctor doctor`.

pub mod completions;
pub mod dispatcher;
pub mod doctor;

pub use completions::CompletionsCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use doctor::DoctorCommand;
