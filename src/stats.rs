//! Outlier-robust descriptive statistics over price lists.
//!
//! Marketplace listings routinely mix accessories and bundles into a
//! search, so raw price columns carry wild outliers. With three or more
//! samples, prices outside one sample standard deviation of the median
//! are trimmed before the summary is computed. The kept set is never
//! allowed to become empty: a degenerate distribution falls back to the
//! untrimmed input.

use crate::types::PriceStatistics;

/// Summarize prices with outlier trimming.
///
/// Rules:
///
/// - empty input ⇒ `None` (a valid terminal outcome, not an error)
/// - fewer than 3 prices ⇒ summarized untrimmed (too few samples to
///   estimate spread)
/// - otherwise ⇒ keep prices inside `[median − stdev, median + stdev]`
///   (inclusive, sample standard deviation); if that window would empty
///   the set, revert to the full input
///
/// The input is never mutated.
pub fn summarize(prices: &[f64]) -> Option<PriceStatistics> {
    if prices.is_empty() {
        return None;
    }
    if prices.len() < 3 {
        return Some(describe(prices.to_vec(), prices.len()));
    }

    let m = median(prices);
    let s = sample_stdev(prices);
    let mut kept: Vec<f64> = prices
        .iter()
        .copied()
        .filter(|p| (m - s..=m + s).contains(p))
        .collect();
    if kept.is_empty() {
        kept = prices.to_vec();
    }

    let removed = prices.len() - kept.len();
    tracing::debug!(
        total = prices.len(),
        kept = kept.len(),
        removed,
        "trimmed price outliers"
    );
    Some(describe(kept, prices.len()))
}

/// Summarize prices without trimming (outlier filter disabled).
pub fn summarize_untrimmed(prices: &[f64]) -> Option<PriceStatistics> {
    if prices.is_empty() {
        return None;
    }
    Some(describe(prices.to_vec(), prices.len()))
}

/// Build the summary over a non-empty kept set.
fn describe(kept: Vec<f64>, count_total: usize) -> PriceStatistics {
    let count_kept = kept.len();
    let minimum = kept.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = kept.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = kept.iter().sum::<f64>() / count_kept as f64;
    PriceStatistics {
        count_total,
        count_kept,
        minimum,
        maximum,
        mean,
        median: median(&kept),
        stdev: sample_stdev(&kept),
        outliers_removed: count_total - count_kept,
    }
}

/// Median of a non-empty slice. Even-length inputs average the two
/// middle values.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n − 1 denominator). Defined as 0 for a
/// single value.
fn sample_stdev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}
