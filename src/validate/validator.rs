//! Batch validation of alias candidates.
//!
//! Two independent passes over the full candidate set, always run to
//! completion; diagnostics are cumulative, never fail-fast.
//!
//! The duplicate rule is deliberately literal: an alias declared N
//! times is flagged N-1 times and the *last* declaration wins, whether
//! or not the targets differ. Callers depend on this exact outcome, so
//! it is pinned by tests rather than replaced with a
//! same-alias-different-target policy.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::base::AliasCandidate;
use crate::table::SymbolSource;

/// The tagged outcome for a single candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Target exists and this is the surviving declaration of its alias.
    Resolved,
    /// Target does not resolve. Takes precedence over duplicate flags.
    Undefined,
    /// A later declaration claims the same alias.
    DuplicateAlias,
}

/// The two ordered error sequences of a validation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Distinct unresolvable targets, in first-appearance order.
    pub undefined: Vec<Arc<str>>,
    /// One entry per non-surviving duplicate occurrence, in input order.
    pub already_defined: Vec<SmolStr>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.undefined.is_empty() && self.already_defined.is_empty()
    }
}

/// A completed validation: the cleaned candidate set plus diagnostics.
#[derive(Clone, Debug)]
pub struct Validation {
    /// Surviving candidates in input order: unresolvable targets and
    /// non-last duplicate occurrences removed.
    pub cleaned: Vec<AliasCandidate>,
    /// Per-candidate tags, aligned with the input sequence.
    pub outcomes: Vec<CandidateOutcome>,
    pub errors: ValidationErrors,
}

/// Validate a candidate set against a symbol source.
///
/// Pure with respect to `source`: running twice over the same set with
/// no environment changes yields identical results.
pub fn validate(candidates: &[AliasCandidate], source: &dyn SymbolSource) -> Validation {
    let undefined = existence_pass(candidates, source);
    let surviving_duplicates = duplicate_pass(candidates);

    let undefined_set: FxHashSet<Arc<str>> = undefined.iter().cloned().collect();

    let mut errors = ValidationErrors {
        undefined,
        already_defined: Vec::new(),
    };
    let mut cleaned = Vec::new();
    let mut outcomes = Vec::with_capacity(candidates.len());

    for (index, candidate) in candidates.iter().enumerate() {
        let is_survivor = surviving_duplicates[index];
        if !is_survivor {
            errors.already_defined.push(candidate.alias.clone());
        }
        if undefined_set.contains(candidate.target.as_ref()) {
            outcomes.push(CandidateOutcome::Undefined);
        } else if !is_survivor {
            outcomes.push(CandidateOutcome::DuplicateAlias);
        } else {
            outcomes.push(CandidateOutcome::Resolved);
            cleaned.push(candidate.clone());
        }
    }

    Validation {
        cleaned,
        outcomes,
        errors,
    }
}

/// Pass 1: every distinct target that fails resolution, in
/// first-appearance order.
fn existence_pass(candidates: &[AliasCandidate], source: &dyn SymbolSource) -> Vec<Arc<str>> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut undefined = Vec::new();
    for candidate in candidates {
        if !seen.insert(candidate.target.as_ref()) {
            continue;
        }
        if !source.exists(&candidate.target) {
            undefined.push(candidate.target.clone());
        }
    }
    undefined
}

/// Pass 2: mark which occurrence of each alias survives.
///
/// Returns one flag per candidate; `false` means a later declaration of
/// the same alias supersedes this one.
fn duplicate_pass(candidates: &[AliasCandidate]) -> Vec<bool> {
    let mut remaining: FxHashMap<&str, usize> = FxHashMap::default();
    for candidate in candidates {
        *remaining.entry(candidate.alias.as_str()).or_insert(0) += 1;
    }

    candidates
        .iter()
        .map(|candidate| match remaining.get_mut(candidate.alias.as_str()) {
            Some(count) => {
                *count -= 1;
                *count == 0
            }
            None => true,
        })
        .collect()
}
