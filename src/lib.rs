//! # price-scout
//!
//! The pure evaluation core of a marketplace price scraper: query-term
//! classification, selectable relevance scoring, and outlier-robust
//! price statistics, composed into a single synchronous pipeline.
//!
//! The scraping collaborator fetches search pages and extracts raw
//! candidate records (name, price, opaque metadata); this crate turns
//! one query plus its candidates into a relevance-ranked,
//! statistically-summarized [`EvaluationResult`] that serializes
//! straight to JSON or spreadsheet columns.
//!
//! ## Design
//!
//! - Tokenizes catalog-style queries (hyphen segmentation, stopword
//!   removal, generic-word classification)
//! - Three scoring strategies behind one selector: proportional,
//!   strict, confidence
//! - Price statistics trim outliers outside one standard deviation of
//!   the median, never emptying a non-empty set
//! - Data-quality problems are statuses on the result, not errors;
//!   only a bad configuration fails an evaluation
//! - Stateless and side-effect-free: safe to call from any number of
//!   threads, one independent evaluation per call
//!
//! Transport, HTML parsing, file I/O and rate limiting live in the
//! callers, not here.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod price;
pub mod scoring;
pub mod stats;
pub mod terms;
pub mod types;

pub use config::EvalConfig;
pub use error::{EvalError, Result};
pub use types::{
    Candidate, ClassifiedTerms, EvalStatus, EvaluationResult, HyphenPolicy, PriceStatistics,
    ScoredCandidate, ScoringStrategy,
};

/// Evaluate one query against its scraped candidates.
///
/// Classifies the query terms, scores and filters the candidates with
/// the configured strategy, and summarizes the surviving prices.
///
/// # Errors
///
/// Returns [`EvalError::Config`] if the configuration is invalid. All
/// data-quality outcomes (unusable query, no candidates, nothing
/// relevant) are reported through [`EvaluationResult::status`].
///
/// # Examples
///
/// ```
/// let candidates = vec![
///     price_scout::Candidate::new("Bola Suíça 65cm Profissional", Some(89.90)),
///     price_scout::Candidate::new("Cadeira Gamer", Some(950.0)),
/// ];
/// let config = price_scout::EvalConfig::default();
/// let result = price_scout::evaluate("Bola Suíça", candidates, &config)?;
/// assert_eq!(result.status, price_scout::EvalStatus::Success);
/// # Ok::<(), price_scout::EvalError>(())
/// ```
pub fn evaluate(
    query: &str,
    candidates: Vec<Candidate>,
    config: &EvalConfig,
) -> Result<EvaluationResult> {
    pipeline::evaluate(query, candidates, config)
}

/// Evaluate with the default configuration.
///
/// Convenience wrapper around [`evaluate`] using
/// [`EvalConfig::default()`].
///
/// # Errors
///
/// Same as [`evaluate`] (the default configuration always validates).
pub fn evaluate_default(query: &str, candidates: Vec<Candidate>) -> Result<EvaluationResult> {
    evaluate(query, candidates, &EvalConfig::default())
}
