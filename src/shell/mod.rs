//! Probe command execution and host platform detection.

pub mod command;
pub mod guard;
pub mod path;
pub mod platform;

pub use command::{
    needs_shell, CommandRunner, ProbeRunner, RunOutcome, RunOutput, DEFAULT_TIMEOUT,
};
pub use guard::ProcessGuard;
pub use path::{parse_system_path, resolve_tool_path};
pub use platform::{is_ci, shell_program, system_env, EnvLookup, HostOs};
