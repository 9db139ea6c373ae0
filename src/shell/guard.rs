//! Ownership guard for probe subprocesses.
//!
//! A [`ProcessGuard`] owns a spawned child for the duration of a probe. The
//! child is started in its own process group, so on timeout or drop the whole
//! group is killed and the child is reaped. Background processes the child
//! left behind in its group are killed once it exits normally too.

use std::io;
use std::process::{Child, ChildStderr, ChildStdout, ExitStatus};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between `try_wait` polls while waiting for a child.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Guard for a running child process.
pub struct ProcessGuard {
    child: Option<Child>,
    /// Process group id, equal to the child's pid.
    #[cfg_attr(not(unix), allow(dead_code))]
    pgid: u32,
    command: String,
}

impl ProcessGuard {
    /// Take ownership of a spawned child.
    pub fn new(child: Child, command: impl Into<String>) -> Self {
        Self {
            pgid: child.id(),
            child: Some(child),
            command: command.into(),
        }
    }

    /// Take the child's stdout pipe, if it was captured.
    pub fn take_stdout(&mut self) -> Option<ChildStdout> {
        self.child.as_mut().and_then(|c| c.stdout.take())
    }

    /// Take the child's stderr pipe, if it was captured.
    pub fn take_stderr(&mut self) -> Option<ChildStderr> {
        self.child.as_mut().and_then(|c| c.stderr.take())
    }

    /// Wait for the child to exit, giving up once `timeout` has elapsed.
    ///
    /// Returns `Ok(None)` when the deadline passed with the child still
    /// running. The child is left alive in that case; call [`kill`](Self::kill)
    /// or drop the guard to terminate it.
    pub fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<ExitStatus>> {
        let deadline = Instant::now() + timeout;
        loop {
            let Some(child) = self.child.as_mut() else {
                return Err(io::Error::other("process already reaped"));
            };
            if let Some(status) = child.try_wait()? {
                self.child = None;
                return Ok(Some(status));
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }

    /// Kill the child and its process group, then reap it.
    pub fn kill(&mut self) {
        if let Some(mut child) = self.child.take() {
            tracing::debug!("Killing process group for probe: {}", self.command);
            self.signal_group();
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    /// Kill whatever the exited child left running in its process group.
    ///
    /// Background jobs started by a shell probe keep the output pipes open;
    /// killing them lets the readers reach end of file.
    pub fn kill_stragglers(&mut self) {
        if self.child.is_none() {
            self.signal_group();
        }
    }

    fn signal_group(&self) {
        #[cfg(unix)]
        {
            // SAFETY: killpg only sends a signal; the group id is the
            // child's pid because it was spawned with process_group(0).
            // An empty group yields ESRCH, which is ignored.
            unsafe {
                libc::killpg(self.pgid as libc::pid_t, libc::SIGKILL);
            }
        }
    }
}

impl Drop for ProcessGuard {
    fn drop(&mut self) {
        if self.child.is_some() {
            tracing::warn!(
                "ProcessGuard dropping with active process for probe: {}",
                self.command
            );
            self.kill();
        }
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use std::os::unix::process::CommandExt;
    use std::process::{Command, Stdio};

    fn spawn(script: &str) -> ProcessGuard {
        let child = Command::new("sh")
            .arg("-c")
            .arg(script)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .unwrap();
        ProcessGuard::new(child, script)
    }

    #[test]
    fn wait_timeout_returns_status_for_fast_command() {
        let mut guard = spawn("exit 3");
        let status = guard.wait_timeout(Duration::from_secs(5)).unwrap().unwrap();
        assert_eq!(status.code(), Some(3));
        assert!(guard.wait_timeout(Duration::ZERO).is_err());
    }

    #[test]
    fn wait_timeout_expires_for_slow_command() {
        let mut guard = spawn("sleep 10");
        let start = Instant::now();
        let status = guard.wait_timeout(Duration::from_millis(200)).unwrap();
        assert!(status.is_none());
        assert!(start.elapsed() < Duration::from_secs(2));

        guard.kill();
        assert!(guard.wait_timeout(Duration::ZERO).is_err());
    }

    #[test]
    fn drop_kills_running_child() {
        let guard = spawn("sleep 10");
        let start = Instant::now();
        drop(guard);
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn kill_is_idempotent() {
        let mut guard = spawn("sleep 10");
        guard.kill();
        guard.kill();
        assert!(guard.wait_timeout(Duration::ZERO).is_err());
    }

    #[test]
    fn kill_stragglers_ends_background_jobs() {
        let child = Command::new("sh")
            .arg("-c")
            .arg("sleep 10 &")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .process_group(0)
            .spawn()
            .unwrap();
        let mut guard = ProcessGuard::new(child, "sleep 10 &");
        let mut stdout = guard.take_stdout().unwrap();

        guard.wait_timeout(Duration::from_secs(5)).unwrap().unwrap();
        guard.kill_stragglers();

        // The pipe only reaches EOF once the background sleep is gone.
        let start = Instant::now();
        let mut buf = Vec::new();
        std::io::Read::read_to_end(&mut stdout, &mut buf).unwrap();
        assert!(start.elapsed() < Duration::from_secs(2));
    }
}
