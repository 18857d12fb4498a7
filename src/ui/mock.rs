//! Mock reporter for testing.
//!
//! `MockReporter` captures every message for later assertion.

use super::Reporter;

/// A reported message with its level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Info(String),
    Error(String),
}

/// Mock reporter implementation for testing.
#[derive(Debug, Default)]
pub struct MockReporter {
    entries: Vec<Entry>,
    infos: Vec<String>,
    errors: Vec<String>,
}

impl MockReporter {
    /// Create an empty mock reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order they were reported.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any info message contains the given text.
    pub fn has_info(&self, text: &str) -> bool {
        self.infos.iter().any(|m| m.contains(text))
    }

    /// Check if any error message contains the given text.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors.iter().any(|m| m.contains(text))
    }
}

impl Reporter for MockReporter {
    fn info(&mut self, msg: &str) {
        self.entries.push(Entry::Info(msg.to_string()));
        self.infos.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.entries.push(Entry::Error(msg.to_string()));
        self.errors.push(msg.to_string());
    }
}
