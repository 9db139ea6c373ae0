//! Recording UI for tests.
//!
//! `MockUI` captures everything a command prints, and every spinner it hands
//! out writes into a log the test can read back afterwards.
//!
//! # Example
//!
//! ```
//! use fyne_doctor::ui::{MockUI, SpinnerEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut spinner = ui.start_spinner("Checking dependencies...");
//! spinner.set_message("Checking Go...");
//! spinner.finish_success("Checked 1 dependencies");
//! ui.message("Fyne Doctor");
//!
//! assert!(ui.has_message("Fyne Doctor"));
//! assert_eq!(
//!     ui.spinner_log().last(),
//!     Some(&SpinnerEvent::Success("Checked 1 dependencies".into()))
//! );
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{DoctorTheme, OutputMode, SpinnerHandle, UserInterface};

/// One thing that happened to a spinner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerEvent {
    Started(String),
    Message(String),
    Success(String),
    Error(String),
}

type SpinnerLog = Rc<RefCell<Vec<SpinnerEvent>>>;

/// UI that records output instead of printing it.
#[derive(Debug)]
pub struct MockUI {
    mode: OutputMode,
    theme: DoctorTheme,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    spinner_log: SpinnerLog,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    pub fn new() -> Self {
        Self::with_mode(OutputMode::Normal)
    }

    /// Start in a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: DoctorTheme::plain(),
            interactive: false,
            messages: Vec::new(),
            successes: Vec::new(),
            errors: Vec::new(),
            spinner_log: Rc::default(),
        }
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Messages of every spinner started so far.
    pub fn spinners(&self) -> Vec<String> {
        self.spinner_log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                SpinnerEvent::Started(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every spinner event in order.
    pub fn spinner_log(&self) -> Vec<SpinnerEvent> {
        self.spinner_log.borrow().clone()
    }

    pub fn has_message(&self, needle: &str) -> bool {
        contains(&self.messages, needle)
    }

    pub fn has_success(&self, needle: &str) -> bool {
        contains(&self.successes, needle)
    }

    pub fn has_error(&self, needle: &str) -> bool {
        contains(&self.errors, needle)
    }

    /// Report text as it would appear on stdout.
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn theme(&self) -> &DoctorTheme {
        &self.theme
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let spinner = MockSpinner {
            log: Rc::clone(&self.spinner_log),
        };
        spinner.record(SpinnerEvent::Started(message.to_string()));
        Box::new(spinner)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Spinner handed out by [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    log: SpinnerLog,
}

impl MockSpinner {
    fn record(&self, event: SpinnerEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.record(SpinnerEvent::Message(msg.to_string()));
    }

    fn finish_success(&mut self, msg: &str) {
        self.record(SpinnerEvent::Success(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.record(SpinnerEvent::Error(msg.to_string()));
    }
}
