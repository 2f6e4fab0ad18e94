//! Whole-script parsing: a batch of classified lines.

use smol_str::SmolStr;

use crate::base::AliasCandidate;

use super::line::{LineOutcome, parse_line};

/// One classified line of a declaration script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number.
    pub number: u32,
    /// The line text with surrounding whitespace stripped.
    pub text: SmolStr,
    /// How the line classified.
    pub outcome: LineOutcome,
}

/// Parse an entire script into classified lines.
///
/// Line numbers are 1-based and count every input line, including the
/// blank and comment lines that classify as [`LineOutcome::Skip`].
pub fn parse_script(source: &str) -> Vec<ScriptLine> {
    source
        .lines()
        .enumerate()
        .map(|(index, raw)| ScriptLine {
            number: index as u32 + 1,
            text: SmolStr::new(raw.trim()),
            outcome: parse_line(raw),
        })
        .collect()
}

/// Collect the assignment lines of a parsed script as candidates, with
/// their origin lines attached, ready for batch validation.
pub fn candidates(lines: &[ScriptLine]) -> Vec<AliasCandidate> {
    lines
        .iter()
        .filter_map(|line| match &line.outcome {
            LineOutcome::Assign { alias, target } => Some(
                AliasCandidate::new(alias.clone(), target.as_str()).at_line(line.number),
            ),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LineError;

    #[test]
    fn test_script_line_numbering() {
        let lines = parse_script("# header\n\nTU = Models::User\noops\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].outcome, LineOutcome::Skip);
        assert_eq!(lines[1].outcome, LineOutcome::Skip);
        assert!(lines[2].outcome.is_assign());
        assert_eq!(lines[3].number, 4);
        assert_eq!(lines[3].outcome, LineOutcome::Invalid(LineError::Syntax));
    }

    #[test]
    fn test_candidates_carry_origin_lines() {
        let lines = parse_script("TU = Models::User\n# skip\nTM = Services::Mailer");
        let found = candidates(&lines);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].alias, "TU");
        assert_eq!(found[0].origin_line, Some(1));
        assert_eq!(found[1].target.as_ref(), "Services::Mailer");
        assert_eq!(found[1].origin_line, Some(3));
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("").is_empty());
        assert!(candidates(&[]).is_empty());
    }
}
