//! Dependency checker.
//!
//! The `DependencyChecker` interprets each descriptor's probe kind and asks a
//! [`ProbeRunner`] to execute whatever command the kind needs. Probe failures
//! never escape as errors: they are folded into a [`CheckStatus`] plus an
//! optional detail note.

use crate::catalog::{DependencyDescriptor, Probe};
use crate::checker::status::{CheckStatus, CheckedDependency};
use crate::shell::{system_env, EnvLookup, HostOs, ProbeRunner, RunOutcome, DEFAULT_TIMEOUT};
use std::time::Duration;

const FOUND: &str = "Found";

/// Checks dependencies against the current machine.
pub struct DependencyChecker<'a> {
    runner: &'a dyn ProbeRunner,
    host: HostOs,
    timeout: Duration,
    env: EnvLookup,
}

impl<'a> DependencyChecker<'a> {
    /// Create a checker using the process environment and the default timeout.
    pub fn new(runner: &'a dyn ProbeRunner, host: HostOs) -> Self {
        Self {
            runner,
            host,
            timeout: DEFAULT_TIMEOUT,
            env: system_env(),
        }
    }

    /// Set the per-probe time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the environment lookup.
    pub fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    /// Host the checker evaluates platforms against.
    pub fn host(&self) -> HostOs {
        self.host
    }

    /// Check every descriptor, preserving order.
    pub fn check_all(&self, descriptors: &[DependencyDescriptor]) -> Vec<CheckedDependency> {
        descriptors.iter().map(|d| self.check(d)).collect()
    }

    /// Check a raw command line as an ad-hoc required dependency.
    pub fn check_command(&self, command_line: &str) -> CheckedDependency {
        let descriptor =
            DependencyDescriptor::new(command_line, Probe::classify(command_line), "");
        self.check(&descriptor)
    }

    /// Check a single dependency.
    pub fn check(&self, descriptor: &DependencyDescriptor) -> CheckedDependency {
        if !descriptor.applies_to(self.host) {
            tracing::debug!(
                "Skipping '{}': platform {:?} does not apply to {}",
                descriptor.name,
                descriptor.platform,
                self.host
            );
            return CheckedDependency::new(descriptor.clone(), CheckStatus::NotApplicable, "");
        }

        let checked = match &descriptor.probe {
            Probe::EnvVar { var } => self.check_env(descriptor, var),
            Probe::PackageExists { .. } | Probe::PathSearch { .. } => {
                self.check_exists(descriptor)
            }
            Probe::CompoundShell { command } => self.check_compound(descriptor, command),
            Probe::CommandOutput { command } => self.check_output(descriptor, command),
        };

        tracing::debug!("Checked '{}': {}", descriptor.name, checked.status);
        checked
    }

    fn check_env(&self, descriptor: &DependencyDescriptor, var: &str) -> CheckedDependency {
        match (self.env)(var) {
            Ok(value) if !value.is_empty() => {
                CheckedDependency::new(descriptor.clone(), CheckStatus::Installed, value)
            }
            _ => CheckedDependency::new(descriptor.clone(), CheckStatus::Missing, "")
                .with_detail(format!("{} is not set", var)),
        }
    }

    /// Existence queries: the exit status is the answer, output is ignored.
    fn check_exists(&self, descriptor: &DependencyDescriptor) -> CheckedDependency {
        let command_line = descriptor.probe.command_line();
        let run = self.runner.run(&command_line, self.timeout);

        match run.outcome {
            RunOutcome::Success => {
                CheckedDependency::new(descriptor.clone(), CheckStatus::Installed, FOUND)
            }
            RunOutcome::TimedOut => {
                let result = run.into_result(&command_line, self.timeout);
                self.errored(descriptor, &command_line, result)
            }
            RunOutcome::ExecutionFailed { .. } => {
                CheckedDependency::new(descriptor.clone(), CheckStatus::Missing, "")
            }
        }
    }

    fn run(&self, command: &str) -> crate::Result<String> {
        self.runner
            .run(command, self.timeout)
            .into_result(command, self.timeout)
    }

    fn check_compound(
        &self,
        descriptor: &DependencyDescriptor,
        command: &str,
    ) -> CheckedDependency {
        match self.run(command) {
            Ok(output) if output.is_empty() => {
                CheckedDependency::new(descriptor.clone(), CheckStatus::Missing, "")
            }
            Ok(output) => {
                CheckedDependency::new(descriptor.clone(), CheckStatus::Installed, output)
            }
            result => self.errored(descriptor, command, result),
        }
    }

    fn check_output(
        &self,
        descriptor: &DependencyDescriptor,
        command: &str,
    ) -> CheckedDependency {
        let program = command.split_whitespace().next().unwrap_or_default();
        if self.runner.locate(program).is_none() {
            return CheckedDependency::new(descriptor.clone(), CheckStatus::Missing, "")
                .with_detail(format!("'{}' not found on PATH", program));
        }

        match self.run(command) {
            Ok(output) => {
                CheckedDependency::new(descriptor.clone(), CheckStatus::Installed, output)
            }
            result => self.errored(descriptor, command, result),
        }
    }

    fn errored(
        &self,
        descriptor: &DependencyDescriptor,
        command: &str,
        result: crate::Result<String>,
    ) -> CheckedDependency {
        let checked = CheckedDependency::new(descriptor.clone(), CheckStatus::Error, "");
        match result {
            Err(e) => {
                tracing::debug!("Probe '{}' for '{}' errored: {}", command, descriptor.name, e);
                checked.with_detail(e.to_string())
            }
            Ok(_) => checked,
        }
    }
}
