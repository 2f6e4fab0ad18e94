//! Single-line classification for the declaration grammar.
//!
//! Every line of a declaration script is exactly one of:
//! - blank or `#`-comment (skipped silently),
//! - a well-formed `ALIAS = Fully::Qualified::Name` assignment,
//! - malformed (reported, counted, never fatal).
//!
//! Grammar: `^\s*ALIAS\s*=\s*Segment(::Segment)*\s*$`, where `ALIAS`
//! matches `[A-Z][A-Z0-9_]*` and each `Segment` matches
//! `[A-Z][A-Za-z0-9_]*`. A syntactically valid line still needs an
//! existence check against the symbol table; that is the loader's job,
//! not the parser's.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{is_alias_name, is_path_segment};

use super::lexer::{Token, tokenize};

/// Why a line was rejected.
///
/// The rendered strings are load-bearing: diagnostics embed them
/// verbatim, and downstream tooling matches on `Invalid syntax` and
/// `not found`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line is non-blank, not a comment, and does not match the grammar.
    #[error("Invalid syntax")]
    Syntax,
    /// The line parsed, but its target does not resolve.
    #[error("Constant {0} not found")]
    Unresolved(SmolStr),
}

/// The classification of one raw line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank, whitespace-only, or `#`-comment. No diagnostic.
    Skip,
    /// A well-formed assignment. Still subject to the existence check.
    Assign { alias: SmolStr, target: SmolStr },
    /// A malformed line, with the reason to report.
    Invalid(LineError),
}

impl LineOutcome {
    /// True for well-formed assignments.
    pub fn is_assign(&self) -> bool {
        matches!(self, LineOutcome::Assign { .. })
    }
}

/// Classify one line of declarative text.
pub fn parse_line(line: &str) -> LineOutcome {
    let stripped = line.trim();
    if stripped.is_empty() || stripped.starts_with('#') {
        return LineOutcome::Skip;
    }

    let Some(tokens) = tokenize(stripped) else {
        return LineOutcome::Invalid(LineError::Syntax);
    };
    match parse_assignment(&tokens) {
        Some((alias, target)) => LineOutcome::Assign { alias, target },
        None => LineOutcome::Invalid(LineError::Syntax),
    }
}

/// Enforce token order and the per-token case rules.
fn parse_assignment(tokens: &[Token]) -> Option<(SmolStr, SmolStr)> {
    let mut iter = tokens.iter();

    let alias = match iter.next()? {
        Token::Ident(name) if is_alias_name(name) => name.clone(),
        _ => return None,
    };
    if !matches!(iter.next()?, Token::Eq) {
        return None;
    }

    let mut target = String::new();
    loop {
        match iter.next()? {
            Token::Ident(segment) if is_path_segment(segment) => {
                target.push_str(segment);
            }
            _ => return None,
        }
        match iter.next() {
            None => break,
            Some(Token::PathSep) => target.push_str("::"),
            Some(_) => return None,
        }
    }

    Some((alias, SmolStr::new(target)))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("TU = Models::User", "TU", "Models::User")]
    #[case("UCC=User::CreditCard", "UCC", "User::CreditCard")]
    #[case("  API2 =   Net::Http::Client  ", "API2", "Net::Http::Client")]
    #[case("U = User", "U", "User")]
    #[case("LN_MC = LazyNames::MyClass", "LN_MC", "LazyNames::MyClass")]
    fn test_valid_assignments(#[case] line: &str, #[case] alias: &str, #[case] target: &str) {
        assert_eq!(
            parse_line(line),
            LineOutcome::Assign {
                alias: SmolStr::new(alias),
                target: SmolStr::new(target),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("# aliases for the app")]
    #[case("   # indented comment")]
    fn test_skipped_lines(#[case] line: &str) {
        assert_eq!(parse_line(line), LineOutcome::Skip);
    }

    #[rstest]
    #[case("tu = Models::User")] // lowercase alias
    #[case("Tu = Models::User")] // mixed-case alias
    #[case("TU = models::User")] // lowercase-led segment
    #[case("TU =")] // missing right-hand side
    #[case("=")] // bare assignment
    #[case("= User")] // missing alias
    #[case("TU")] // no assignment at all
    #[case("TU == User")] // double equals
    #[case("TU = User::")] // trailing separator
    #[case("TU = ::User")] // leading separator
    #[case("TU = User.find(1)")] // method call
    #[case("TU = \"User\"")] // string literal
    #[case("TU = 42")] // numeric literal
    #[case("TU = Models::User # inline comment")] // trailing comment
    #[case("puts 'hello'")] // arbitrary statement
    #[case("TU = User Extra")] // trailing garbage
    fn test_invalid_lines(#[case] line: &str) {
        assert_eq!(parse_line(line), LineOutcome::Invalid(LineError::Syntax));
    }

    #[test]
    fn test_error_rendering_is_pinned() {
        assert_eq!(LineError::Syntax.to_string(), "Invalid syntax");
        assert_eq!(
            LineError::Unresolved(SmolStr::new("Nonexistent::Class")).to_string(),
            "Constant Nonexistent::Class not found"
        );
    }
}
