//! Diagnostic collection for lexical errors.
//!
//! A [`Diagnostic`] is one recoverable lexical problem, tagged with the line
//! on which it was detected. The [`Collector`] gathers them in order during
//! a scan; reporting a diagnostic never stops the scan.

use std::fmt;

/// A single lexical problem detected during scanning.
///
/// Diagnostics are informational: they describe a problem in the input text,
/// not a failure of the analyzer. They carry no severity levels and are never
/// deduplicated.
///
/// # Examples
///
/// ```
/// use minic_util::Diagnostic;
///
/// let diag = Diagnostic::new(3, "string not closed");
/// assert_eq!(diag.to_string(), "Line 3: string not closed");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Line number at the time of detection (1-based).
    pub line: u32,
    /// Human-readable description of the problem.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic for the given line.
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Append-only sink for diagnostics produced by one scan.
///
/// The collector preserves insertion order and supports no removal or
/// mutation of already-reported entries.
///
/// # Examples
///
/// ```
/// use minic_util::Collector;
///
/// let mut collector = Collector::new();
/// collector.report(1, "unrecognized character '#'");
///
/// assert_eq!(collector.len(), 1);
/// assert!(!collector.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Appends a diagnostic for the given line.
    pub fn report(&mut self, line: u32, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(line, message));
    }

    /// Returns the collected diagnostics, in order of detection.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the collector, yielding the collected diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Returns the number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if no diagnostics were reported.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
