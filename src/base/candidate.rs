//! Alias candidates and the name grammar they must satisfy.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

/// A proposed (alias → target) association awaiting validation.
///
/// Candidates are produced by the line parser or the structured-config
/// reader, consumed once by the validator, and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct AliasCandidate {
    /// The short name being introduced. Must match `[A-Z][A-Z0-9_]*`.
    pub alias: SmolStr,
    /// The fully qualified path the alias should refer to.
    pub target: Arc<str>,
    /// 1-based line number in the declaration source, when known.
    pub origin_line: Option<u32>,
}

impl AliasCandidate {
    /// Create a candidate with no source location.
    pub fn new(alias: impl Into<SmolStr>, target: impl Into<Arc<str>>) -> Self {
        Self {
            alias: alias.into(),
            target: target.into(),
            origin_line: None,
        }
    }

    /// Attach the 1-based line number this candidate was declared on.
    pub fn at_line(mut self, line: u32) -> Self {
        self.origin_line = Some(line);
        self
    }
}

impl fmt::Debug for AliasCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin_line {
            Some(n) => write!(f, "{} = {} (line {})", self.alias, self.target, n),
            None => write!(f, "{} = {}", self.alias, self.target),
        }
    }
}

/// Check that `s` is a well-formed alias: uppercase-led, then
/// uppercase letters, digits, or underscores only.
pub fn is_alias_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Check that `s` is a well-formed path segment: uppercase-led, then
/// letters, digits, or underscores (mixed case allowed after the head).
pub fn is_path_segment(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that `s` is a well-formed qualified path: one or more segments
/// joined by `::`, with no leading or trailing separator.
pub fn is_qualified_path(s: &str) -> bool {
    !s.is_empty() && s.split("::").all(is_path_segment)
}
