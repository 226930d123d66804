//! Single-pass evaluation pipeline: classify, score, filter, summarize.
//!
//! Composes the tokenizer, scorer and statistics engine into one pure,
//! synchronous evaluation per query. Each stage may short-circuit with
//! a terminal status; only configuration problems surface as errors, so
//! spreadsheet-driven batch callers can process every row
//! unconditionally.

use crate::config::EvalConfig;
use crate::error::{EvalError, Result};
use crate::types::{Candidate, ClassifiedTerms, EvalStatus, EvaluationResult, ScoredCandidate};
use crate::{scoring, stats, terms};

/// Evaluate one query against its scraped candidates.
///
/// # Pipeline
///
/// 1. Validate the configuration
/// 2. Classify the query terms; an unusable query short-circuits with
///    [`EvalStatus::QueryEmpty`] (candidates are not examined)
/// 3. Short-circuit [`EvalStatus::NoCandidates`] on an empty input list
/// 4. Drop invalid candidates (empty name, missing or non-positive
///    price) — counted, logged at warn level, never fatal
/// 5. Score the rest with the configured strategy
/// 6. Discard scores below `min_score` and sort descending (stable)
/// 7. Summarize the prices of the survivors
///
/// # Errors
///
/// Returns [`EvalError::Config`] for an invalid configuration. Every
/// data-quality outcome is represented in the result itself.
pub fn evaluate(
    query: &str,
    candidates: Vec<Candidate>,
    config: &EvalConfig,
) -> Result<EvaluationResult> {
    config.validate()?;

    let terms = match terms::classify(query, config) {
        Ok(terms) => terms,
        Err(EvalError::NoUsableTerms) => {
            tracing::debug!(query, "query yielded no usable terms");
            return Ok(terminal(
                ClassifiedTerms::default(),
                EvalStatus::QueryEmpty,
                0,
            ));
        }
        Err(err) => return Err(err),
    };

    if candidates.is_empty() {
        return Ok(terminal(terms, EvalStatus::NoCandidates, 0));
    }

    let total_input = candidates.len();
    let mut invalid_candidates = 0usize;
    let mut scored: Vec<ScoredCandidate> = Vec::with_capacity(total_input);

    for (position, candidate) in candidates.into_iter().enumerate() {
        if !candidate.is_valid() {
            invalid_candidates += 1;
            tracing::warn!(position, name = %candidate.name, "skipping invalid candidate");
            continue;
        }
        let score = scoring::score(&candidate.name, &terms, config);
        scored.push(ScoredCandidate {
            candidate,
            score,
            position,
        });
    }

    let ranked = scoring::filter_and_sort(scored, config.min_score);
    if ranked.is_empty() {
        tracing::debug!(query, total_input, invalid_candidates, "no relevant candidates");
        return Ok(terminal(
            terms,
            EvalStatus::NoRelevantCandidates,
            invalid_candidates,
        ));
    }

    // Survivors are valid by construction, so every one carries a
    // positive price.
    let prices: Vec<f64> = ranked.iter().filter_map(|c| c.candidate.price).collect();
    let statistics = if config.outlier_filter_enabled {
        stats::summarize(&prices)
    } else {
        stats::summarize_untrimmed(&prices)
    };

    tracing::debug!(
        query,
        total_input,
        survivors = ranked.len(),
        invalid_candidates,
        "evaluation complete"
    );

    Ok(EvaluationResult {
        terms,
        candidates: ranked,
        statistics,
        status: EvalStatus::Success,
        invalid_candidates,
    })
}

/// A result for a stage that short-circuited before any candidate
/// survived.
fn terminal(
    terms: ClassifiedTerms,
    status: EvalStatus,
    invalid_candidates: usize,
) -> EvaluationResult {
    EvaluationResult {
        terms,
        candidates: Vec::new(),
        statistics: None,
        status,
        invalid_candidates,
    }
}
