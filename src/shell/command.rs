//! Timed command execution for dependency probes.
//!
//! [`CommandRunner`] runs one probe command line with a wall-clock budget.
//! Output from stdout and stderr is drained on reader threads while the
//! calling thread waits on the child with a deadline; when the deadline
//! passes, the child's process group is killed and reaped before returning.
//! After a normal exit, anything the child left running in its group is
//! killed as well.

use crate::error::{DoctorError, Result};
use crate::shell::guard::ProcessGuard;
use crate::shell::path::{parse_system_path, resolve_tool_path};
use crate::shell::platform::shell_program;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// Default time budget for a single probe.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// How long to wait for reader threads after the child is gone.
const READER_GRACE: Duration = Duration::from_millis(500);

/// Fragments that require a shell to interpret the command line.
const SHELL_SYNTAX: &[&str] = &[
    "&", "|", ";", "$", ">", "<", "`", "'", "\"", "*", "?", "~", "(", ")", "\n",
];

/// How a probe command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Exited with status zero.
    Success,
    /// Could not be started, or exited non-zero.
    ExecutionFailed {
        /// Exit code, if the process ran and was not killed by a signal.
        exit_code: Option<i32>,
        /// Human-readable reason.
        reason: String,
    },
    /// Still running when the time budget ran out; the process group was killed.
    TimedOut,
}

/// Result of running a probe command.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Trimmed stdout followed by stderr.
    pub output: String,

    /// How the command ended.
    pub outcome: RunOutcome,

    /// Wall-clock time spent.
    pub duration: Duration,
}

impl RunOutput {
    /// Create a success result.
    pub fn success(output: String, duration: Duration) -> Self {
        Self {
            output,
            outcome: RunOutcome::Success,
            duration,
        }
    }

    /// Create a failure result.
    pub fn failed(
        exit_code: Option<i32>,
        reason: impl Into<String>,
        output: String,
        duration: Duration,
    ) -> Self {
        Self {
            output,
            outcome: RunOutcome::ExecutionFailed {
                exit_code,
                reason: reason.into(),
            },
            duration,
        }
    }

    /// Create a timeout result.
    pub fn timed_out(output: String, duration: Duration) -> Self {
        Self {
            output,
            outcome: RunOutcome::TimedOut,
            duration,
        }
    }

    /// Whether the command exited with status zero.
    pub fn is_success(&self) -> bool {
        self.outcome == RunOutcome::Success
    }

    /// Whether the command was killed for exceeding its budget.
    pub fn is_timed_out(&self) -> bool {
        self.outcome == RunOutcome::TimedOut
    }

    /// Convert into the captured output, or a probe error.
    pub fn into_result(self, command: &str, timeout: Duration) -> Result<String> {
        match self.outcome {
            RunOutcome::Success => Ok(self.output),
            RunOutcome::TimedOut => Err(DoctorError::ProbeTimedOut {
                command: command.to_string(),
                timeout,
            }),
            RunOutcome::ExecutionFailed { reason, .. } => Err(DoctorError::ProbeExecutionFailed {
                command: command.to_string(),
                message: reason,
            }),
        }
    }
}

/// Executes probe commands on behalf of the dependency checker.
///
/// The checker only talks to this trait, so tests can substitute a runner
/// that records or forbids subprocess spawns.
pub trait ProbeRunner {
    /// Run a command line with a wall-clock timeout.
    fn run(&self, command_line: &str, timeout: Duration) -> RunOutput;

    /// Resolve a program name on PATH.
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Whether a command line needs the host shell to be interpreted.
pub fn needs_shell(command_line: &str) -> bool {
    SHELL_SYNTAX
        .iter()
        .any(|fragment| command_line.contains(fragment))
}

/// The real subprocess runner.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    path_entries: Vec<PathBuf>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    /// Create a runner that resolves binaries on the process PATH.
    pub fn new() -> Self {
        Self::with_path(parse_system_path())
    }

    /// Create a runner with explicit PATH entries.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// Build the process for a command line.
    ///
    /// Plain commands run their first token directly so that a missing
    /// binary is reported as a spawn failure instead of whatever the shell
    /// decides to print.
    fn build_command(&self, command_line: &str) -> std::result::Result<Command, String> {
        if needs_shell(command_line) {
            let (shell, flag) = shell_program();
            let mut cmd = Command::new(shell);
            cmd.arg(flag).arg(command_line);
            return Ok(cmd);
        }

        let mut tokens = command_line.split_whitespace();
        let program = tokens.next().ok_or_else(|| "empty command".to_string())?;
        let resolved = resolve_tool_path(program, &self.path_entries)
            .ok_or_else(|| format!("'{}' not found on PATH", program))?;

        let mut cmd = Command::new(resolved);
        cmd.args(tokens);
        Ok(cmd)
    }
}

impl ProbeRunner for CommandRunner {
    fn run(&self, command_line: &str, timeout: Duration) -> RunOutput {
        let start = Instant::now();

        let mut cmd = match self.build_command(command_line) {
            Ok(cmd) => cmd,
            Err(reason) => {
                tracing::debug!("Probe '{}' not started: {}", command_line, reason);
                return RunOutput::failed(None, reason, String::new(), start.elapsed());
            }
        };

        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!("Probe '{}' failed to spawn: {}", command_line, e);
                return RunOutput::failed(
                    None,
                    format!("failed to start: {}", e),
                    String::new(),
                    start.elapsed(),
                );
            }
        };

        let mut guard = ProcessGuard::new(child, command_line);
        let stdout = Drain::start(guard.take_stdout());
        let stderr = Drain::start(guard.take_stderr());

        let result = match guard.wait_timeout(timeout) {
            Ok(Some(status)) => {
                guard.kill_stragglers();
                let output = combine(stdout.collect(), stderr.collect());
                if status.success() {
                    RunOutput::success(output, start.elapsed())
                } else {
                    let reason = match status.code() {
                        Some(code) => format!("exit code {}", code),
                        None => "terminated by signal".to_string(),
                    };
                    RunOutput::failed(status.code(), reason, output, start.elapsed())
                }
            }
            Ok(None) => {
                guard.kill();
                let output = combine(stdout.collect(), stderr.collect());
                RunOutput::timed_out(output, start.elapsed())
            }
            Err(e) => {
                guard.kill();
                RunOutput::failed(None, e.to_string(), String::new(), start.elapsed())
            }
        };

        tracing::debug!(
            "Probe '{}' finished in {:?}: {:?}",
            command_line,
            result.duration,
            result.outcome
        );
        result
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        resolve_tool_path(program, &self.path_entries)
    }
}

/// A pipe read on a background thread into a shared buffer.
struct Drain {
    buffer: Arc<Mutex<Vec<u8>>>,
    done: mpsc::Receiver<()>,
}

impl Drain {
    fn start<R: Read + Send + 'static>(pipe: Option<R>) -> Self {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let (tx, done) = mpsc::channel();

        if let Some(mut pipe) = pipe {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                let mut chunk = [0u8; 4096];
                loop {
                    match pipe.read(&mut chunk) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buffer
                            .lock()
                            .unwrap_or_else(|e| e.into_inner())
                            .extend_from_slice(&chunk[..n]),
                    }
                }
                let _ = tx.send(());
            });
        }

        Self { buffer, done }
    }

    /// Output read so far, waiting briefly for end of file.
    ///
    /// A pipe held open by a process outside the child's group is given up
    /// on after the grace period, keeping what was already read.
    fn collect(&self) -> String {
        let _ = self.done.recv_timeout(READER_GRACE);
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

fn combine(stdout: String, stderr: String) -> String {
    let mut combined = stdout;
    if !stderr.trim().is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&stderr);
    }
    combined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_shell_detects_operators() {
        assert!(needs_shell("which studio || which android-studio"));
        assert!(needs_shell("pkg-config --exists gl && echo 'Found'"));
        assert!(needs_shell("glxinfo | grep 'direct rendering'"));
        assert!(needs_shell("echo $ANDROID_HOME"));
        assert!(!needs_shell("go version"));
        assert!(!needs_shell("xcrun simctl list devices"));
        assert!(!needs_shell("fyne-cross --version"));
    }

    #[test]
    fn combine_joins_streams() {
        assert_eq!(combine("out\n".into(), "err\n".into()), "out\nerr");
        assert_eq!(combine("out".into(), "err".into()), "out\nerr");
        assert_eq!(combine("  out  ".into(), String::new()), "out");
        assert_eq!(combine(String::new(), "err".into()), "err");
    }

    #[test]
    fn into_result_maps_outcomes() {
        let timeout = Duration::from_secs(1);
        let ok = RunOutput::success("v1".into(), Duration::ZERO);
        assert_eq!(ok.into_result("x", timeout).unwrap(), "v1");

        let timed = RunOutput::timed_out(String::new(), timeout);
        assert!(matches!(
            timed.into_result("x", timeout),
            Err(DoctorError::ProbeTimedOut { .. })
        ));

        let failed = RunOutput::failed(Some(2), "exit code 2", String::new(), Duration::ZERO);
        assert!(matches!(
            failed.into_result("x", timeout),
            Err(DoctorError::ProbeExecutionFailed { .. })
        ));
    }

    #[test]
    fn missing_binary_fails_without_shell() {
        let runner = CommandRunner::new();
        let result = runner.run("nonexistentcommand12345 --version", DEFAULT_TIMEOUT);

        match result.outcome {
            RunOutcome::ExecutionFailed { exit_code, reason } => {
                assert_eq!(exit_code, None);
                assert!(reason.contains("not found"));
            }
            other => panic!("Expected ExecutionFailed, got {:?}", other),
        }
    }

    #[test]
    fn empty_command_fails() {
        let runner = CommandRunner::new();
        let result = runner.run("   ", DEFAULT_TIMEOUT);
        assert!(!result.is_success());
    }

    #[test]
    fn locate_finds_nothing_for_unknown_program() {
        let runner = CommandRunner::new();
        assert!(runner.locate("nonexistentcommand12345").is_none());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;

        #[test]
        fn shell_command_output_is_trimmed() {
            let runner = CommandRunner::new();
            let result = runner.run("echo 'test'", DEFAULT_TIMEOUT);

            assert!(result.is_success());
            assert_eq!(result.output, "test");
        }

        #[test]
        fn direct_command_runs_without_shell() {
            let runner = CommandRunner::new();
            let result = runner.run("echo hello world", DEFAULT_TIMEOUT);

            assert!(result.is_success());
            assert_eq!(result.output, "hello world");
        }

        #[test]
        fn non_zero_exit_is_execution_failure() {
            let runner = CommandRunner::new();
            let result = runner.run("sh -c 'exit 3'", DEFAULT_TIMEOUT);

            assert_eq!(
                result.outcome,
                RunOutcome::ExecutionFailed {
                    exit_code: Some(3),
                    reason: "exit code 3".to_string(),
                }
            );
        }

        #[test]
        fn stderr_is_captured() {
            let runner = CommandRunner::new();
            let result = runner.run("echo oops >&2", DEFAULT_TIMEOUT);

            assert!(result.is_success());
            assert_eq!(result.output, "oops");
        }

        #[test]
        fn compound_command_captures_both_branches() {
            let runner = CommandRunner::new();
            let result = runner.run("false || echo 'Not available'", DEFAULT_TIMEOUT);

            assert!(result.is_success());
            assert_eq!(result.output, "Not available");
        }

        #[test]
        fn slow_command_times_out_at_budget() {
            let runner = CommandRunner::new();
            let start = Instant::now();
            let result = runner.run("sleep 10", Duration::from_secs(1));
            let elapsed = start.elapsed();

            assert!(result.is_timed_out());
            assert!(elapsed >= Duration::from_secs(1));
            assert!(
                elapsed < Duration::from_secs(4),
                "took {:?}, expected about one second",
                elapsed
            );
        }

        #[test]
        fn timeout_kills_background_children() {
            let runner = CommandRunner::new();
            let start = Instant::now();
            let result = runner.run("sleep 10 & sleep 10; wait", Duration::from_millis(500));

            assert!(result.is_timed_out());
            assert!(start.elapsed() < Duration::from_secs(4));
        }

        #[test]
        fn background_job_does_not_swallow_output() {
            let runner = CommandRunner::new();
            let start = Instant::now();
            let result = runner.run("sleep 3 & echo hi", Duration::from_secs(5));

            assert!(result.is_success());
            assert_eq!(result.output, "hi");
            assert!(start.elapsed() < Duration::from_secs(2));
        }

        #[cfg(target_os = "linux")]
        #[test]
        fn partial_output_survives_a_held_pipe() {
            let runner = CommandRunner::new();
            // setsid moves the sleeper out of the probe's process group, so
            // only the grace period ends the wait on its inherited pipe.
            let result = runner.run("echo partial; setsid sleep 3 &", Duration::from_secs(5));

            assert!(result.is_success());
            assert_eq!(result.output, "partial");
        }

        #[test]
        fn locate_finds_sh() {
            let runner = CommandRunner::new();
            assert!(runner.locate("sh").is_some());
        }
    }
}
