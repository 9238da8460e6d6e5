use serde::{Deserialize, Serialize};

use super::distance::levenshtein;

/// The closest candidate found for a target string.
/// distance 0 means an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub distance: usize,
    pub text: String,
}

/// Finds the candidate with the smallest edit distance to `target`.
///
/// Empty candidates are skipped. Ties keep the first candidate encountered
/// at the minimum, so the result is deterministic for a fixed candidate
/// order. Returns `None` only when the list is empty or every entry was
/// empty.
pub fn best_match<S: AsRef<str>>(target: &str, candidates: &[S]) -> Option<MatchResult> {
    let mut best: Option<MatchResult> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }

        let distance = levenshtein(target, candidate);
        let improved = match &best {
            Some(current) => distance < current.distance,
            None => true,
        };

        if improved {
            best = Some(MatchResult {
                distance,
                text: candidate.to_string(),
            });
        }
    }

    best
}
