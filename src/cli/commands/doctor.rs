//! The `fyne-doctor doctor` command.
//!
//! Resolves settings, probes the catalog for the running host, prints the
//! report and optionally writes it to a file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog;
use crate::checker::{CheckedDependency, DependencyChecker};
use crate::cli::args::DoctorArgs;
use crate::config::{load_config, DoctorConfig};
use crate::error::Result;
use crate::report::json::to_json;
use crate::report::{render_report, DiagnosticEnv, RenderOptions, Report, SystemInfo};
use crate::shell::{system_env, CommandRunner, EnvLookup, HostOs, ProbeRunner};
use crate::ui::{DoctorTheme, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code for unreadable or invalid configuration.
pub const CONFIG_ERROR_EXIT: i32 = 2;

/// Exit code for a failed diagnosis under `--strict`.
pub const STRICT_FAILURE_EXIT: i32 = 1;

/// The doctor command implementation.
pub struct DoctorCommand {
    project_root: PathBuf,
    args: DoctorArgs,
    config_path: Option<PathBuf>,
    verbose: bool,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(project_root: &Path, args: DoctorArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            config_path: None,
            verbose: false,
        }
    }

    /// Use an explicit config file instead of discovery.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Apply the global `--verbose` flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Config files layered under the command-line flags.
    pub fn resolve_config(&self) -> Result<DoctorConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;

        config.verbose |= self.verbose;
        config.json |= self.args.json;
        config.strict |= self.args.strict;
        if !self.args.categories.is_empty() {
            config.categories = self.args.categories.clone();
        }
        if let Some(secs) = self.args.timeout {
            config.timeout = std::time::Duration::from_secs(secs);
        }
        if let Some(output) = &self.args.output {
            config.output = Some(output.clone());
        }

        Ok(config)
    }

    /// Run against an explicit runner, host and environment.
    ///
    /// `env` is called once for the checker and once for the issue rules.
    pub fn run_with(
        &self,
        ui: &mut dyn UserInterface,
        runner: &dyn ProbeRunner,
        host: HostOs,
        env: &dyn Fn() -> EnvLookup,
    ) -> Result<CommandResult> {
        let config = match self.resolve_config() {
            Ok(config) => config,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT));
            }
        };
        tracing::debug!("Resolved config: {:?}", config);

        ui.set_output_mode(OutputMode::for_report(config.verbose, config.json));

        let checker = DependencyChecker::new(runner, host)
            .with_timeout(config.timeout)
            .with_env(env());
        let checked = check_with_progress(ui, &checker, &catalog::build(host));

        let diagnostic_env = DiagnosticEnv::system(host).with_env(env());
        let report = Report::new(SystemInfo::detect(host), checked, &diagnostic_env);
        let options = RenderOptions {
            categories: config.categories.clone(),
            verbose: config.verbose,
        };

        let rendered = if config.json {
            to_json(&report, &options)?
        } else {
            render_report(&report, &options, ui.theme())
        };
        ui.message(rendered.trim_end());

        if let Some(path) = &config.output {
            let contents = if config.json {
                rendered
            } else {
                render_report(&report, &options, &DoctorTheme::plain())
            };
            if let Err(e) = fs::write(path, format!("{}\n", contents.trim_end())) {
                ui.error(&format!(
                    "Failed to write report to {}: {}",
                    path.display(),
                    e
                ));
                return Ok(CommandResult::failure(1));
            }
            ui.success(&format!("Report written to {}", path.display()));
        }

        if config.strict && !report.is_success() {
            return Ok(CommandResult::failure(STRICT_FAILURE_EXIT));
        }
        Ok(CommandResult::success())
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = CommandRunner::new();
        self.run_with(ui, &runner, HostOs::current(), &system_env)
    }
}

fn check_with_progress(
    ui: &mut dyn UserInterface,
    checker: &DependencyChecker<'_>,
    catalog: &[catalog::DependencyDescriptor],
) -> Vec<CheckedDependency> {
    let mut spinner = ui.start_spinner("Checking dependencies...");
    let mut checked = Vec::with_capacity(catalog.len());

    for descriptor in catalog {
        spinner.set_message(&format!("Checking {}...", descriptor.name));
        checked.push(checker.check(descriptor));
    }

    let blocking = checked.iter().filter(|c| c.is_blocking()).count();
    if blocking == 0 {
        let applicable = checked.iter().filter(|c| c.status.is_applicable()).count();
        spinner.finish_success(&format!("Checked {} dependencies", applicable));
    } else {
        spinner.finish_error(&format!("{} required dependencies missing", blocking));
    }

    checked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::shell::RunOutput;
    use crate::ui::{MockUI, SpinnerEvent};
    use std::env::VarError;
    use std::time::Duration;
    use tempfile::TempDir;

    /// Every probe either succeeds or fails, with no subprocesses.
    struct StubRunner {
        installed: bool,
    }

    impl ProbeRunner for StubRunner {
        fn run(&self, command_line: &str, _timeout: Duration) -> RunOutput {
            if !self.installed {
                return RunOutput::failed(Some(1), "exit code 1", String::new(), Duration::ZERO);
            }
            let output = if command_line.starts_with("go ") {
                "go version go1.22.1 linux/amd64".to_string()
            } else {
                "v2.5.0".to_string()
            };
            RunOutput::success(output, Duration::ZERO)
        }

        fn locate(&self, program: &str) -> Option<PathBuf> {
            self.installed.then(|| PathBuf::from("/usr/bin").join(program))
        }
    }

    fn no_env() -> EnvLookup {
        Box::new(|_| Err(VarError::NotPresent))
    }

    fn full_env() -> EnvLookup {
        Box::new(|key| match key {
            "XDG_SESSION_TYPE" => Ok("x11".to_string()),
            _ => Ok("/opt/sdk".to_string()),
        })
    }

    fn command(temp: &TempDir, args: DoctorArgs) -> DoctorCommand {
        // Point at an empty config so the developer's own files never leak in.
        let config = temp.path().join("empty.yml");
        fs::write(&config, "").unwrap();
        DoctorCommand::new(temp.path(), args).with_config(Some(config))
    }

    #[test]
    fn healthy_machine_reports_success() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, DoctorArgs::default());
        let mut ui = MockUI::new();

        let result = cmd
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &full_env)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Fyne Doctor"));
        assert!(ui.has_message("SUCCESS"));
        assert_eq!(ui.spinners(), &["Checking dependencies..."]);
        let log = ui.spinner_log();
        assert!(log.contains(&SpinnerEvent::Message("Checking Go...".into())));
        assert!(matches!(log.last(), Some(SpinnerEvent::Success(_))));
    }

    #[test]
    fn missing_dependencies_exit_zero_by_default() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp, DoctorArgs::default());
        let mut ui = MockUI::new();

        let result = cmd
            .run_with(&mut ui, &StubRunner { installed: false }, HostOs::Linux, &no_env)
            .unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("FAILURE"));
        assert!(ui.has_message("Missing dependencies:"));
        assert!(matches!(
            ui.spinner_log().last(),
            Some(SpinnerEvent::Error(msg)) if msg.ends_with("required dependencies missing")
        ));
    }

    #[test]
    fn strict_fails_on_missing_dependencies() {
        let temp = TempDir::new().unwrap();
        let args = DoctorArgs {
            strict: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = command(&temp, args)
            .run_with(&mut ui, &StubRunner { installed: false }, HostOs::Linux, &no_env)
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, STRICT_FAILURE_EXIT);
    }

    #[test]
    fn strict_passes_on_healthy_machine() {
        let temp = TempDir::new().unwrap();
        let args = DoctorArgs {
            strict: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = command(&temp, args)
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &full_env)
            .unwrap();

        assert!(result.success);
    }

    #[test]
    fn json_output_is_a_single_document() {
        let temp = TempDir::new().unwrap();
        let args = DoctorArgs {
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        command(&temp, args)
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &full_env)
            .unwrap();

        assert_eq!(ui.messages().len(), 1);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
        let doc: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(doc["tool"], "fyne-doctor");
        assert_eq!(doc["diagnosis"]["success"], true);
    }

    #[test]
    fn invalid_config_exits_with_config_error() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("bad.yml");
        fs::write(&config, "colour: always\n").unwrap();
        let cmd = DoctorCommand::new(temp.path(), DoctorArgs::default()).with_config(Some(config));
        let mut ui = MockUI::new();

        let result = cmd
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &no_env)
            .unwrap();

        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
        assert!(!ui.errors().is_empty());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn missing_config_file_exits_with_config_error() {
        let temp = TempDir::new().unwrap();
        let cmd = DoctorCommand::new(temp.path(), DoctorArgs::default())
            .with_config(Some(temp.path().join("nope.yml")));
        let mut ui = MockUI::new();

        let result = cmd
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &no_env)
            .unwrap();

        assert_eq!(result.exit_code, CONFIG_ERROR_EXIT);
    }

    #[test]
    fn flags_override_config_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("doctor.yml");
        fs::write(&config, "timeout: 9\ncategories: [mobile]\njson: false\n").unwrap();
        let args = DoctorArgs {
            json: true,
            categories: vec![Category::Core],
            timeout: Some(2),
            ..Default::default()
        };
        let cmd = DoctorCommand::new(temp.path(), args)
            .with_config(Some(config))
            .with_verbose(true);

        let resolved = cmd.resolve_config().unwrap();
        assert!(resolved.json);
        assert!(resolved.verbose);
        assert_eq!(resolved.categories, vec![Category::Core]);
        assert_eq!(resolved.timeout, Duration::from_secs(2));
    }

    #[test]
    fn config_file_applies_without_flags() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("doctor.yml");
        fs::write(&config, "timeout: 9\nstrict: true\n").unwrap();
        let cmd = DoctorCommand::new(temp.path(), DoctorArgs::default()).with_config(Some(config));

        let resolved = cmd.resolve_config().unwrap();
        assert!(resolved.strict);
        assert_eq!(resolved.timeout, Duration::from_secs(9));
    }

    #[test]
    fn category_filter_limits_sections() {
        let temp = TempDir::new().unwrap();
        let args = DoctorArgs {
            categories: vec![Category::Web],
            ..Default::default()
        };
        let mut ui = MockUI::new();

        command(&temp, args)
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &full_env)
            .unwrap();

        let output = ui.output();
        assert!(output.contains("## Web Development"));
        assert!(!output.contains("## Core Dependencies"));
    }

    #[test]
    fn writes_plain_report_to_output_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.txt");
        let args = DoctorArgs {
            output: Some(path.clone()),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = command(&temp, args)
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &full_env)
            .unwrap();

        assert!(result.success);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Fyne Doctor"));
        assert!(!written.contains('\u{1b}'));
        assert!(ui.has_success("Report written"));
    }

    #[test]
    fn unwritable_output_is_reported() {
        let temp = TempDir::new().unwrap();
        let args = DoctorArgs {
            output: Some(temp.path().join("missing-dir").join("report.txt")),
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let result = command(&temp, args)
            .run_with(&mut ui, &StubRunner { installed: true }, HostOs::Linux, &full_env)
            .unwrap();

        assert!(!result.success);
        assert!(ui.has_error("Failed to write report"));
    }
}
