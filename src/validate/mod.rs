//! Candidate validation and diagnostic reporting.

mod diagnostics;
mod validator;

pub use diagnostics::{Diagnostic, DiagnosticCollector, Severity};
pub use validator::{CandidateOutcome, Validation, ValidationErrors, validate};
