//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full versions and per-probe details.
    Verbose,
    /// Spinner while checking, then the report.
    #[default]
    Normal,
    /// Only the report itself (used for JSON output).
    Quiet,
}

impl OutputMode {
    /// Resolve the mode from report settings; JSON wins over verbosity.
    pub fn for_report(verbose: bool, json: bool) -> Self {
        if json {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status lines such as "Report written".
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
