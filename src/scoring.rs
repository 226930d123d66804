//! Relevance scoring of candidate names against classified terms.
//!
//! One scorer, three interchangeable strategies selected by
//! [`ScoringStrategy`] in the configuration:
//!
//! - **proportional**: fraction of terms found plus a small in-order
//!   bonus, capped at 1.0
//! - **strict**: all-or-nothing on the specific terms, with an optional
//!   minimum-count relaxation
//! - **confidence**: `0.3 + 0.7 × fraction` — ranks candidates that
//!   already passed an upstream relevance gate, never eliminating
//!
//! Matching is case-insensitive substring containment per term. No
//! stemming or accent folding: "suíças" does not match "suíça".

use crate::config::EvalConfig;
use crate::types::{ClassifiedTerms, ScoredCandidate, ScoringStrategy};

/// Bonus added per term found with its predecessor also present.
const ORDER_BONUS: f64 = 0.1;

/// Base score the confidence strategy grants any candidate.
const CONFIDENCE_FLOOR: f64 = 0.3;

/// Score a candidate name against the classified terms using the
/// configured strategy. Always returns a value in `[0, 1]`.
pub fn score(name: &str, terms: &ClassifiedTerms, config: &EvalConfig) -> f64 {
    let name_lower = name.to_lowercase();
    match config.scoring_strategy {
        ScoringStrategy::Proportional => proportional_score(&name_lower, &terms.all()),
        ScoringStrategy::Strict => {
            let specific: Vec<&str> = terms.specific.iter().map(String::as_str).collect();
            strict_score(&name_lower, &specific, config.strict_min_required)
        }
        ScoringStrategy::Confidence => confidence_score(&name_lower, &terms.all()),
    }
}

/// Discard candidates below `min_score` and sort the rest descending by
/// score. The sort is stable, so equal scores keep their original
/// retrieval order.
pub fn filter_and_sort(
    mut candidates: Vec<ScoredCandidate>,
    min_score: f64,
) -> Vec<ScoredCandidate> {
    candidates.retain(|c| c.score >= min_score);
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Fraction of terms found, plus [`ORDER_BONUS`] per term whose
/// predecessor term is also present (the first term always qualifies
/// when found), capped at 1.0.
fn proportional_score(name_lower: &str, terms: &[&str]) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let mut found = 0usize;
    let mut bonus = 0.0;
    for (i, term) in terms.iter().enumerate() {
        if name_lower.contains(term) {
            found += 1;
            if i == 0 || name_lower.contains(terms[i - 1]) {
                bonus += ORDER_BONUS;
            }
        }
    }
    let base = found as f64 / terms.len() as f64;
    (base + bonus).min(1.0)
}

/// All-or-nothing on the required terms. With `min_required` set, the
/// score relaxes to found/total once at least `min_required` terms are
/// present.
fn strict_score(name_lower: &str, terms: &[&str], min_required: Option<usize>) -> f64 {
    if terms.is_empty() {
        return 0.0;
    }
    let found = terms.iter().filter(|t| name_lower.contains(*t)).count();
    match min_required {
        None => {
            if found == terms.len() {
                1.0
            } else {
                0.0
            }
        }
        Some(min) => {
            if found >= min {
                found as f64 / terms.len() as f64
            } else {
                0.0
            }
        }
    }
}

/// `0.3 + 0.7 × fraction found`. The floor assumes the candidate was
/// already returned by the marketplace's own search, so it is never
/// scored to zero. An empty term list yields the neutral 0.5.
fn confidence_score(name_lower: &str, terms: &[&str]) -> f64 {
    if terms.is_empty() {
        return 0.5;
    }
    let found = terms.iter().filter(|t| name_lower.contains(*t)).count();
    let score = CONFIDENCE_FLOOR + (1.0 - CONFIDENCE_FLOOR) * found as f64 / terms.len() as f64;
    score.min(1.0)
}
