//! Per-line and per-run problem reporting.
//!
//! Diagnostics are collected as values so callers and tests can assert
//! on them directly; the loaders additionally mirror them onto the
//! `tracing` facade. The pipeline never prints and never installs a
//! subscriber.

use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single reported problem or notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// 1-based line in the declaration source, when the problem is
    /// attributable to one line.
    pub line: Option<u32>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Error,
            line: None,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Warning,
            line: None,
            message: message.into(),
        }
    }

    /// Create a new informational diagnostic.
    pub fn info(message: impl Into<Arc<str>>) -> Self {
        Self {
            severity: Severity::Info,
            line: None,
            message: message.into(),
        }
    }

    /// Attach a 1-based line number.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during a load run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Report a failing line: "Line <n>: <reason> - <stripped text>".
    pub fn line_error(&mut self, line: u32, reason: &str, text: &str) {
        self.add(Diagnostic::error(format!("Line {line}: {reason} - {text}")).at_line(line));
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
