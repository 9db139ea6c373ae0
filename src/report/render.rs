//! Text rendering of a doctor report.

use super::table::{first_line, truncate, version_cell, Table, DESCRIPTION_WIDTH, VERSION_WIDTH};
use super::tips::{installation_tips, ISSUES_URL, KNOWN_ISSUES};
use super::Report;
use crate::catalog::{names, Category, Probe};
use crate::checker::{CheckStatus, CheckedDependency};
use crate::ui::DoctorTheme;

const COLUMNS: [&str; 5] = ["Dependency", "Optional", "Status", "Version", "Description"];

/// What to include in the rendered report.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Categories to render; empty means all.
    pub categories: Vec<Category>,
    /// Show full versions and per-probe details.
    pub verbose: bool,
}

impl RenderOptions {
    /// Whether a category should be rendered.
    pub fn includes(&self, category: Category) -> bool {
        self.categories.is_empty() || self.categories.contains(&category)
    }
}

/// Version reported by the Fyne CLI check, for the header.
pub fn fyne_version(checked: &[CheckedDependency]) -> String {
    match checked.iter().find(|c| c.name() == names::FYNE_CLI) {
        Some(c) if c.status == CheckStatus::Installed => {
            first_line(&c.detected_version).to_string()
        }
        Some(c) if c.status == CheckStatus::Error => "Unknown".to_string(),
        _ => "Not installed".to_string(),
    }
}

/// Version column text.
///
/// Only version commands have a number worth extracting; predicate and
/// lookup output is shown as its first line.
fn version_text(dep: &CheckedDependency, verbose: bool) -> String {
    match dep.descriptor.probe {
        Probe::CommandOutput { .. } => version_cell(&dep.detected_version, verbose),
        _ if verbose => first_line(&dep.detected_version).to_string(),
        _ => truncate(first_line(&dep.detected_version), VERSION_WIDTH),
    }
}

/// Render the per-category dependency tables.
///
/// Categories appear in display order, empty ones are omitted, and
/// non-applicable entries are left out entirely.
pub fn render_dependencies(
    checked: &[CheckedDependency],
    options: &RenderOptions,
    theme: &DoctorTheme,
) -> String {
    let mut sections = Vec::new();

    for category in Category::ALL {
        if !options.includes(category) {
            continue;
        }

        let mut table = Table::new(&COLUMNS);
        for dep in checked
            .iter()
            .filter(|c| c.descriptor.category == category && c.status.is_applicable())
        {
            table.add_row(vec![
                dep.name().to_string(),
                if dep.descriptor.optional { "*" } else { "" }.to_string(),
                theme.format_status(dep.status, dep.descriptor.optional),
                version_text(dep, options.verbose),
                truncate(&dep.descriptor.description, DESCRIPTION_WIDTH),
            ]);
        }

        if table.is_empty() {
            continue;
        }

        sections.push(format!(
            "{}\n{}",
            theme.header.apply_to(format!("## {}", category.title())),
            table.render()
        ));
    }

    sections.join("\n\n")
}

fn render_system(report: &Report, theme: &DoctorTheme) -> String {
    let mut table = Table::new(&["Property", "Value"]);
    table.add_row(vec!["OS".to_string(), report.system.os.to_string()]);
    table.add_row(vec!["Architecture".to_string(), report.system.arch.clone()]);
    table.add_row(vec!["CPUs".to_string(), report.system.cpus.to_string()]);
    if let Some(cpu) = report.system.cpu_label() {
        table.add_row(vec!["CPU".to_string(), cpu]);
    }
    table.add_row(vec!["Memory".to_string(), report.system.memory_label()]);
    format!("{}\n{}", theme.format_section("System"), table.render())
}

fn render_probe_details(
    checked: &[CheckedDependency],
    options: &RenderOptions,
    theme: &DoctorTheme,
) -> String {
    let mut lines = vec![theme.format_section("Probe Details")];
    for dep in checked
        .iter()
        .filter(|c| options.includes(c.descriptor.category))
    {
        let mut line = format!(
            "{} {} {}",
            theme.key.apply_to(format!("{}:", dep.name())),
            theme.command.apply_to(dep.descriptor.probe.command_line()),
            dep.status
        );
        if let Some(detail) = &dep.detail {
            line.push_str(&format!(" ({})", detail));
        }
        if let Some(link) = &dep.descriptor.issue_link {
            line.push_str(&format!(" [{}]", link));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn render_diagnosis(report: &Report, theme: &DoctorTheme) -> String {
    let mut lines = vec![theme.format_section("Diagnosis")];

    if report.diagnosis.success {
        lines.push(theme.format_success(&format!(
            "{}  Your system is ready for Fyne development!",
            report.diagnosis.verdict()
        )));
    } else {
        lines.push(theme.format_error(&format!(
            "{}  Some required dependencies are missing or not properly installed.",
            report.diagnosis.verdict()
        )));
        lines.push(format!(
            "Missing dependencies: {}",
            report.diagnosis.missing.join(", ")
        ));
        lines.push(String::new());
        lines.push(theme.format_section("Installation Tips"));
        lines.push(
            "Based on your platform, here are the recommended installation steps:".to_string(),
        );
        lines.push(String::new());
        lines.extend(installation_tips(report.system.os));
    }

    lines.join("\n")
}

fn render_common_issues(report: &Report, theme: &DoctorTheme) -> String {
    let diagnostics = &report.diagnostics;
    let mut lines = vec![theme.format_section("Common Issues Check")];

    if diagnostics.is_clean() {
        lines.push(theme.format_success("No common issues detected!"));
        return lines.join("\n");
    }

    if !diagnostics.issues.is_empty() {
        lines.push(theme.format_error("Issues found:"));
        lines.extend(diagnostics.issues.iter().map(|i| format!("   • {}", i)));
    }
    if !diagnostics.warnings.is_empty() {
        lines.push(theme.format_warning("Warnings:"));
        lines.extend(diagnostics.warnings.iter().map(|w| format!("   • {}", w)));
    }

    lines.join("\n")
}

fn render_known_issues(theme: &DoctorTheme) -> String {
    let mut lines = vec![
        theme.format_section("Known Issues Summary"),
        "Recently reported Fyne problems include:".to_string(),
    ];
    lines.extend(
        KNOWN_ISSUES
            .iter()
            .map(|(summary, number)| format!("• {} (#{})", summary, number)),
    );
    lines.push(String::new());
    lines.push(format!(
        "For more details, visit: {}",
        theme.dim.apply_to(ISSUES_URL)
    ));
    lines.join("\n")
}

/// Render the full human-readable report.
pub fn render_report(report: &Report, options: &RenderOptions, theme: &DoctorTheme) -> String {
    let mut sections = vec![
        format!("{}", theme.highlight.apply_to("Fyne Doctor")),
        format!(
            "{}\n{} {}",
            theme.format_section("Fyne"),
            theme.key.apply_to("Version:"),
            fyne_version(&report.dependencies)
        ),
        render_system(report, theme),
    ];

    let tables = render_dependencies(&report.dependencies, options, theme);
    if !tables.is_empty() {
        sections.push(tables);
    }

    if options.verbose {
        sections.push(render_probe_details(&report.dependencies, options, theme));
    }

    sections.push(render_diagnosis(report, theme));
    sections.push(render_common_issues(report, theme));
    sections.push(render_known_issues(theme));

    let mut output = sections.join("\n\n");
    output.push('\n');
    output
}
