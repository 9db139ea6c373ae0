//! Library integration tests.

use std::path::PathBuf;
use std::time::Duration;

use fyne_doctor::catalog::{self, names, Category, Platform};
use fyne_doctor::checker::{CheckStatus, DependencyChecker};
use fyne_doctor::report::{DiagnosticEnv, Diagnosis, Report, SystemInfo};
use fyne_doctor::shell::{HostOs, ProbeRunner, RunOutput};
use fyne_doctor::DoctorError;

/// Answers `go version` and nothing else.
struct GoOnly;

impl ProbeRunner for GoOnly {
    fn run(&self, command_line: &str, _timeout: Duration) -> RunOutput {
        if command_line == "go version" {
            RunOutput::success("go version go1.21.5 linux/amd64".into(), Duration::ZERO)
        } else {
            RunOutput::failed(None, "not found", String::new(), Duration::ZERO)
        }
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        (program == "go").then(|| PathBuf::from("/usr/local/go/bin/go"))
    }
}

fn no_env() -> fyne_doctor::shell::EnvLookup {
    Box::new(|_| Err(std::env::VarError::NotPresent))
}

#[test]
fn error_types_are_public() {
    let err = DoctorError::InvalidCategory {
        name: "desktop".into(),
    };
    assert!(err.to_string().contains("desktop"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> fyne_doctor::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn catalog_always_has_core_tools() {
    for host in [HostOs::Windows, HostOs::MacOs, HostOs::Linux, HostOs::Other] {
        let deps = catalog::build(host);
        for name in [names::GO, names::FYNE_CLI] {
            let dep = deps.iter().find(|d| d.name == name).unwrap();
            assert_eq!(dep.platform, Platform::All);
            assert_eq!(dep.category, Category::Core);
        }
    }
}

#[test]
fn check_command_classifies_raw_commands() {
    let checker = DependencyChecker::new(&GoOnly, HostOs::Linux).with_env(no_env());

    let go = checker.check_command("go version");
    assert_eq!(go.status, CheckStatus::Installed);
    assert!(go.detected_version.contains("go1.21.5"));

    let env = checker.check_command("echo $ANDROID_HOME");
    assert_eq!(env.status, CheckStatus::Missing);

    let fyne = checker.check_command("fyne version");
    assert_eq!(fyne.status, CheckStatus::Missing);
}

#[test]
fn report_fails_without_fyne_cli() {
    let checker = DependencyChecker::new(&GoOnly, HostOs::Linux).with_env(no_env());
    let checked = checker.check_all(&catalog::build(HostOs::Linux));

    let diagnosis = Diagnosis::evaluate(&checked);
    assert!(!diagnosis.success);
    assert!(diagnosis.missing.contains(&names::FYNE_CLI.to_string()));
    assert!(!diagnosis.missing.contains(&names::GO.to_string()));

    let env = DiagnosticEnv::system(HostOs::Linux).with_env(no_env());
    let report = Report::new(SystemInfo::detect(HostOs::Linux), checked, &env);
    assert!(!report.is_success());
}
