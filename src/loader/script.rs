//! Line-mode loading: parse, check, bind, one line at a time.

use std::path::Path;

use tracing::{info, warn};

use crate::config::{Discovery, SCRIPT_FILE};
use crate::syntax::{LineError, LineOutcome, parse_line};
use crate::table::{Binder, SymbolSource};
use crate::validate::{Diagnostic, DiagnosticCollector};

use super::LoadError;

/// Counters for one load run. Reset at the start of each invocation,
/// never shared across runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines that parsed, resolved, and bound.
    pub loaded: u32,
    /// Blank and comment lines.
    pub skipped: u32,
    /// Lines that failed parsing, resolution, or binding.
    pub errored: u32,
}

/// The line-mode orchestrator.
///
/// Every per-line failure is recovered: the line is reported with its
/// number, counted as errored, and processing continues. Only a missing
/// or unreadable explicit file aborts a run.
pub struct ScriptLoader<'t, T: SymbolSource + Binder> {
    table: &'t T,
    diagnostics: DiagnosticCollector,
}

impl<'t, T: SymbolSource + Binder> ScriptLoader<'t, T> {
    pub fn new(table: &'t T) -> Self {
        Self {
            table,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Load declarations from in-memory script text.
    pub fn load_str(&mut self, source: &str) -> LoadSummary {
        let mut summary = LoadSummary::default();
        for (index, raw) in source.lines().enumerate() {
            self.process_line(index as u32 + 1, raw, &mut summary);
        }
        self.log_summary(&summary);
        summary
    }

    /// Load declarations from an explicit file path. An unreadable path
    /// is a hard error here; use [`Self::load_discovered`] for the
    /// warn-and-continue search.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadSummary, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading definitions");
        Ok(self.load_str(&text))
    }

    /// Search the project directory, then home, for a script. Finding
    /// nothing is not an error: a warning is emitted and the run
    /// returns an all-zero summary.
    pub fn load_discovered(&mut self, discovery: &Discovery) -> Result<LoadSummary, LoadError> {
        match discovery.find_script() {
            Some(path) => self.load_file(&path),
            None => {
                let message = format!("No {SCRIPT_FILE} found");
                warn!("{message}");
                self.diagnostics.add(Diagnostic::warning(message));
                Ok(LoadSummary::default())
            }
        }
    }

    /// Diagnostics accumulated so far, across runs of this loader.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    /// Take the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    fn process_line(&mut self, number: u32, raw: &str, summary: &mut LoadSummary) {
        match parse_line(raw) {
            LineOutcome::Skip => summary.skipped += 1,
            LineOutcome::Assign { alias, target } => {
                if !self.table.exists(&target) {
                    let reason = LineError::Unresolved(target).to_string();
                    self.report(number, &reason, raw);
                    summary.errored += 1;
                    return;
                }
                // The target resolved just above, but the bind can
                // still fail (a rejected alias, a racing unbind in the
                // host). Recover and keep going.
                match self.table.bind(&alias, &target) {
                    Ok(()) => summary.loaded += 1,
                    Err(err) => {
                        self.report(number, &err.to_string(), raw);
                        summary.errored += 1;
                    }
                }
            }
            LineOutcome::Invalid(err) => {
                self.report(number, &err.to_string(), raw);
                summary.errored += 1;
            }
        }
    }

    fn report(&mut self, number: u32, reason: &str, raw: &str) {
        let text = raw.trim();
        warn!("Line {number}: {reason} - {text}");
        self.diagnostics.line_error(number, reason, text);
    }

    fn log_summary(&self, summary: &LoadSummary) {
        if summary.loaded > 0 {
            info!("Loaded {} definitions", summary.loaded);
        }
        // Historical label: "skipped" here reports the error tally, not
        // the blank/comment count.
        if summary.errored > 0 {
            warn!("Skipped {} invalid lines", summary.errored);
        }
    }
}
