//! Error types for the price-scout crate.
//!
//! Only configuration problems surface as errors. Data-quality issues
//! (empty queries, invalid candidates, too few prices) are represented
//! as statuses and optional fields on the evaluation result so batch
//! callers can keep processing unconditionally.

/// Errors that can occur while evaluating a query.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Invalid evaluation configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The query contained no usable terms after stopword and length
    /// filtering. [`evaluate`](crate::evaluate) converts this into
    /// status [`EvalStatus::QueryEmpty`](crate::EvalStatus::QueryEmpty);
    /// it only escapes when calling [`classify`](crate::terms::classify)
    /// directly.
    #[error("query has no usable terms")]
    NoUsableTerms,
}

/// Convenience type alias for price-scout results.
pub type Result<T> = std::result::Result<T, EvalError>;
