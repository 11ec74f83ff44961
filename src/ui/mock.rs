//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use checkupdate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("checkupdate: no update needed (0.3)");
//! ui.error("Error: source unreachable");
//!
//! assert!(ui.has_message("no update needed"));
//! assert!(ui.has_error("unreachable"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI that records every message it is given.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Output mode this mock was created with.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.error("e");

        assert_eq!(ui.messages(), &["m".to_string()]);
        assert_eq!(ui.successes(), &["s".to_string()]);
        assert_eq!(ui.errors(), &["e".to_string()]);
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.mode(), OutputMode::Quiet);
    }

    #[test]
    fn has_checks_use_substrings() {
        let mut ui = MockUI::new();
        ui.success("test: update available (0.0 -> 1.0)");
        assert!(ui.has_success("update available"));
        assert!(!ui.has_success("no update"));
    }
}
