//! Evaluation configuration with sensible defaults.
//!
//! [`EvalConfig`] controls tokenization policy, scoring strategy and
//! outlier filtering. The defaults carry the Portuguese stopword and
//! generic-word sets the marketplace scrapers were tuned with; callers
//! targeting another language or domain supply their own sets.

use std::collections::HashSet;

use crate::error::EvalError;
use crate::types::{HyphenPolicy, ScoringStrategy};

/// Portuguese prepositions, articles and conjunctions dropped from
/// every query.
const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "o", "e", "de", "da", "do", "das", "dos", "em", "na", "no", "nas", "nos", "para", "com",
    "por", "sobre", "entre", "até", "um", "uma", "uns", "umas",
];

/// Domain filler words that may be absent from a relevant candidate
/// without penalty.
const DEFAULT_GENERIC_TERMS: &[&str] = &[
    "kit",
    "conjunto",
    "set",
    "pack",
    "combo",
    "atividades",
    "materiais",
    "produtos",
    "itens",
    "equipamentos",
    "linha",
    "modelo",
    "serie",
    "colecao",
];

/// Configuration for one query evaluation.
///
/// Use [`Default::default()`] for the tuning the scrapers ship with, or
/// construct with field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Tokens discarded unconditionally (language-specific closed set).
    pub stopwords: HashSet<String>,
    /// Tokens classified as generic rather than specific.
    pub generic_terms: HashSet<String>,
    /// Minimum token length (in chars) to survive tokenization.
    pub min_term_length: usize,
    /// Maximum combined number of specific + generic terms kept.
    pub max_terms: usize,
    /// How hyphenated catalog-style queries are segmented.
    pub hyphen_policy: HyphenPolicy,
    /// Which scoring strategy ranks candidates.
    pub scoring_strategy: ScoringStrategy,
    /// For [`ScoringStrategy::Strict`]: minimum number of specific terms
    /// a candidate must contain. `None` requires all of them.
    pub strict_min_required: Option<usize>,
    /// Candidates scoring below this are discarded. 0 keeps everything
    /// (rank only).
    pub min_score: f64,
    /// Whether price statistics trim outliers outside one standard
    /// deviation of the median.
    pub outlier_filter_enabled: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| (*s).to_owned()).collect(),
            generic_terms: DEFAULT_GENERIC_TERMS
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            min_term_length: 3,
            max_terms: 5,
            hyphen_policy: HyphenPolicy::LastSegment,
            scoring_strategy: ScoringStrategy::Proportional,
            strict_min_required: None,
            min_score: 0.3,
            outlier_filter_enabled: true,
        }
    }
}

impl EvalConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `min_term_length` must be greater than 0
    /// - `max_terms` must be greater than 0
    /// - `min_score` must be finite and within `[0, 1]`
    /// - `strict_min_required`, when set, must be greater than 0
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.min_term_length == 0 {
            return Err(EvalError::Config(
                "min_term_length must be greater than 0".into(),
            ));
        }
        if self.max_terms == 0 {
            return Err(EvalError::Config("max_terms must be greater than 0".into()));
        }
        if !self.min_score.is_finite() || !(0.0..=1.0).contains(&self.min_score) {
            return Err(EvalError::Config("min_score must be within [0, 1]".into()));
        }
        if self.strict_min_required == Some(0) {
            return Err(EvalError::Config(
                "strict_min_required must be greater than 0 when set".into(),
            ));
        }
        Ok(())
    }
}
