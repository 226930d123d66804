//! Query tokenization and term classification.
//!
//! Turns a noisy catalog-style query string ("ATIVIDADES PARA PESSOAS
//! COM DEFICIÊNCIA - Kit Bolas Suíças PCD") into an ordered,
//! duplicate-free set of classified terms: specific terms a relevant
//! candidate must carry and generic filler words it may omit.

use crate::config::EvalConfig;
use crate::error::EvalError;
use crate::types::{ClassifiedTerms, HyphenPolicy};

/// Hyphen-like separators recognised by [`HyphenPolicy::LastSegment`]:
/// hyphen, en-dash, em-dash.
const SEGMENT_SEPARATORS: [char; 3] = ['-', '–', '—'];

/// When a query yields no specific terms, at most this many generic
/// terms are promoted to specific status.
const GENERIC_PROMOTION_LIMIT: usize = 3;

/// Classify a query into specific and generic terms.
///
/// # Pipeline
///
/// 1. Segment per `config.hyphen_policy` (catalog names put the most
///    specific part after the last hyphen).
/// 2. Extract Unicode-alphanumeric runs, lowercased.
/// 3. Drop tokens shorter than `min_term_length` or in `stopwords`.
/// 4. Tokens in `generic_terms` are generic, the rest specific;
///    duplicates keep their first occurrence only.
/// 5. If no specific term survived, promote up to
///    [`GENERIC_PROMOTION_LIMIT`] generic terms to specific.
/// 6. Truncate to `max_terms` combined, specific terms first.
///
/// Deterministic: the same query and configuration always yield the
/// same terms.
///
/// # Errors
///
/// Returns [`EvalError::NoUsableTerms`] when no token survives the
/// length and stopword filters (the whole query was connectives, or the
/// selected segment was empty).
pub fn classify(query: &str, config: &EvalConfig) -> Result<ClassifiedTerms, EvalError> {
    let segment = select_segment(query, config.hyphen_policy);

    let mut specific: Vec<String> = Vec::new();
    let mut generic: Vec<String> = Vec::new();

    for token in segment.split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() {
            continue;
        }
        let token = token.to_lowercase();
        if token.chars().count() < config.min_term_length || config.stopwords.contains(&token) {
            continue;
        }
        if specific.contains(&token) || generic.contains(&token) {
            continue;
        }
        if config.generic_terms.contains(&token) {
            generic.push(token);
        } else {
            specific.push(token);
        }
    }

    if specific.is_empty() && generic.is_empty() {
        return Err(EvalError::NoUsableTerms);
    }

    // All-generic queries would otherwise have nothing required of a
    // candidate; the leading generics become the required terms.
    if specific.is_empty() {
        let promoted = generic.len().min(GENERIC_PROMOTION_LIMIT);
        specific = generic.drain(..promoted).collect();
        generic.clear();
    }

    specific.truncate(config.max_terms);
    generic.truncate(config.max_terms - specific.len());

    tracing::debug!(
        query,
        specific = ?specific,
        generic = ?generic,
        "classified query terms"
    );

    Ok(ClassifiedTerms { specific, generic })
}

/// Pick the query segment to tokenize according to the hyphen policy.
fn select_segment(query: &str, policy: HyphenPolicy) -> &str {
    match policy {
        HyphenPolicy::WholeString => query,
        HyphenPolicy::LastSegment => query
            .rsplit(SEGMENT_SEPARATORS)
            .next()
            .unwrap_or(query)
            .trim(),
    }
}
