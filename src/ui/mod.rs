//! Leveled message reporting.
//!
//! The reconciler never logs through a global; it receives a
//! [`Reporter`] at construction. The binary uses [`TracingReporter`],
//! tests use [`MockReporter`].
//!
//! # Example
//!
//! ```
//! use depcheck::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.info("Checking requirements");
//! assert!(reporter.has_info("Checking"));
//! ```

pub mod mock;

pub use mock::MockReporter;

/// Sink for leveled messages.
///
/// This trait allows capturing output in tests.
pub trait Reporter {
    /// Report an informational message.
    fn info(&mut self, msg: &str);

    /// Report an error message.
    fn error(&mut self, msg: &str);
}

/// Reporter that forwards to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TracingReporter {
    fn info(&mut self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn error(&mut self, msg: &str) {
        tracing::error!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracing_reporter_accepts_messages_without_subscriber() {
        let mut reporter = TracingReporter::new();
        reporter.info("hello");
        reporter.error("world");
    }

    #[test]
    fn reporter_is_object_safe() {
        let mut mock = MockReporter::new();
        let reporter: &mut dyn Reporter = &mut mock;
        reporter.error("boom");
        assert_eq!(mock.errors(), &["boom"]);
    }
}
