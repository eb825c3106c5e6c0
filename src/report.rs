// Diagnostics channel for recoverable problems.
//
// A reporter is handed to each stage explicitly instead of the stages logging
// through a process-wide configuration. The binary uses `TracingReporter`;
// tests use `CollectingReporter` to assert on what was skipped.

use std::cell::RefCell;

use tracing::warn;

use crate::error::LogOddsError;

/// Receives problems that were handled without aborting the run.
pub trait Reporter {
    /// An input line was dropped under `MalformedPolicy::Skip`.
    fn skipped_line(&self, error: &LogOddsError);

    /// A token was dropped because its score is undefined.
    fn skipped_token(&self, error: &LogOddsError);
}

/// Forwards every report to `tracing` at warn level.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn skipped_line(&self, error: &LogOddsError) {
        warn!(%error, "Skipping input line");
    }

    fn skipped_token(&self, error: &LogOddsError) {
        warn!(%error, "Skipping token");
    }
}

/// Keeps every report in memory, rendered with `Display`.
#[derive(Default)]
pub struct CollectingReporter {
    lines: RefCell<Vec<String>>,
    tokens: RefCell<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages for skipped input lines, in the order they were reported.
    pub fn skipped_lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Messages for skipped tokens, in the order they were reported.
    pub fn skipped_tokens(&self) -> Vec<String> {
        self.tokens.borrow().clone()
    }
}

impl Reporter for CollectingReporter {
    fn skipped_line(&self, error: &LogOddsError) {
        self.lines.borrow_mut().push(error.to_string());
    }

    fn skipped_token(&self, error: &LogOddsError) {
        self.tokens.borrow_mut().push(error.to_string());
    }
}
