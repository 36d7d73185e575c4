//! Comparison of user-entered digests against computed results
//!
//! Candidate selection is by hex length alone; the evaluator only then
//! looks at values. Tie-break between same-length algorithms is the
//! presentation order of the candidates.

use crate::hashing::AlgorithmDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking a pasted digest against the known algorithms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOutcome {
    /// No algorithm produces a digest of this length
    NoCandidate,
    /// The named algorithm matches the length but has no computed value yet
    PendingFor(String),
    /// The named algorithm's computed digest equals the input
    Match(String),
    /// Length matches computed digests, none of them are equal
    NoMatch,
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOutcome::NoCandidate | ComparisonOutcome::NoMatch => Ok(()),
            ComparisonOutcome::PendingFor(id) => write!(f, "{id}? (not calculated)"),
            ComparisonOutcome::Match(id) => write!(f, "{id}!"),
        }
    }
}

/// Evaluate `user_input` against candidates in presentation order
///
/// Input is ASCII-lowercased once, then compared exactly against the
/// lowercase canonical hex. The first computed-and-equal candidate wins;
/// otherwise the first length-matching candidate without a value is
/// reported as pending. A candidate whose hex length cannot be determined
/// is skipped so one provider failure does not block the others.
pub fn evaluate<'a, I>(user_input: &str, candidates: I) -> ComparisonOutcome
where
    I: IntoIterator<Item = (&'a AlgorithmDescriptor, Option<&'a str>)>,
{
    let needle = user_input.to_ascii_lowercase();
    let mut pending: Option<String> = None;
    let mut any_candidate = false;

    for (descriptor, value) in candidates {
        let Ok(hex_len) = descriptor.digest_hex_length() else {
            continue;
        };
        if hex_len != user_input.len() {
            continue;
        }
        any_candidate = true;
        match value {
            Some(hex) if hex == needle => {
                return ComparisonOutcome::Match(descriptor.id().to_string());
            }
            Some(_) => {}
            None => {
                if pending.is_none() {
                    pending = Some(descriptor.id().to_string());
                }
            }
        }
    }

    if let Some(id) = pending {
        ComparisonOutcome::PendingFor(id)
    } else if any_candidate {
        ComparisonOutcome::NoMatch
    } else {
        ComparisonOutcome::NoCandidate
    }
}
