//! Core types for candidates, classified terms, statistics and results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One scraped product record, supplied by the scraping collaborator.
///
/// Only `name` and `price` participate in evaluation; everything else
/// (link, store, image, ...) rides along in `metadata` untouched and is
/// flattened back to the top level on serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Display name of the product as scraped from the listing.
    pub name: String,
    /// Listed price. `None` or a non-positive value makes the candidate
    /// invalid; it is skipped (and counted) rather than scored.
    pub price: Option<f64>,
    /// Opaque pass-through fields (link, store, image, ...).
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Candidate {
    /// Creates a candidate with no extra metadata.
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            price,
            metadata: Map::new(),
        }
    }

    /// Whether this candidate can be scored: non-empty name and a
    /// positive price.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.price.is_some_and(|p| p > 0.0)
    }
}

/// A candidate that passed scoring, with its relevance score and the
/// position it held in the scraped result list (used for tie-breaking).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Relevance score in `[0, 1]`.
    pub score: f64,
    /// 0-based index of this candidate in the input list.
    pub position: usize,
}

/// Query terms after tokenization and classification.
///
/// Specific terms are essential to a match; generic terms are domain
/// filler ("kit", "conjunto", ...) that a relevant candidate may omit.
/// Both lists are stopword-free, duplicate-free and ordered as the
/// terms appeared in the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedTerms {
    pub specific: Vec<String>,
    pub generic: Vec<String>,
}

impl ClassifiedTerms {
    /// All terms, specific first, in query order within each class.
    pub fn all(&self) -> Vec<&str> {
        self.specific
            .iter()
            .chain(self.generic.iter())
            .map(String::as_str)
            .collect()
    }

    /// True when neither class holds any term.
    pub fn is_empty(&self) -> bool {
        self.specific.is_empty() && self.generic.is_empty()
    }

    /// Total number of terms across both classes.
    pub fn len(&self) -> usize {
        self.specific.len() + self.generic.len()
    }
}

/// Descriptive statistics over the prices of surviving candidates,
/// after outlier trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStatistics {
    /// Number of prices before trimming.
    pub count_total: usize,
    /// Number of prices kept after trimming. Never 0 when `count_total` > 0.
    pub count_kept: usize,
    pub minimum: f64,
    pub maximum: f64,
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation of the kept set; 0 when only one price kept.
    pub stdev: f64,
    /// `count_total - count_kept`.
    pub outliers_removed: usize,
}

/// Terminal outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalStatus {
    /// At least one candidate survived the relevance filter.
    Success,
    /// The candidate list was empty on input.
    NoCandidates,
    /// Candidates existed but none passed the relevance threshold.
    NoRelevantCandidates,
    /// The query yielded no usable terms; candidates were not examined.
    QueryEmpty,
}

impl fmt::Display for EvalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::NoCandidates => "no_candidates",
            Self::NoRelevantCandidates => "no_relevant_candidates",
            Self::QueryEmpty => "query_empty",
        };
        f.write_str(s)
    }
}

/// The structured result of evaluating one query against its scraped
/// candidates. Serializes to plain nested maps/lists so callers can
/// write it straight to JSON or spreadsheet columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Classified query terms (empty on `QueryEmpty`).
    pub terms: ClassifiedTerms,
    /// Surviving candidates, sorted by score descending; ties keep
    /// their original retrieval order.
    pub candidates: Vec<ScoredCandidate>,
    /// Price statistics over the survivors, when any priced candidate
    /// survived.
    pub statistics: Option<PriceStatistics>,
    pub status: EvalStatus,
    /// Input candidates dropped for missing/non-positive price or an
    /// empty name.
    pub invalid_candidates: usize,
}

/// How a hyphenated query is segmented before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyphenPolicy {
    /// Use only the substring after the last hyphen/en-dash/em-dash
    /// (the most specific segment of a catalog-style name).
    LastSegment,
    /// Tokenize the whole query.
    WholeString,
}

/// Selects how a candidate name is scored against the classified terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    /// Fraction of terms found, plus a small in-order bonus, capped at 1.0.
    Proportional,
    /// 1.0 iff every specific term is present, else 0.0. With
    /// `strict_min_required` set, found/total once the minimum is met.
    Strict,
    /// `0.3 + 0.7 × fraction found` — assumes an upstream relevance
    /// gate already passed; ranks without eliminating.
    Confidence,
}
