//! Percentage similarity built on top of the edit distance.
//!
//! Both strings are normalized (lowercased, surrounding whitespace trimmed)
//! and the distance between them is scaled against the longer one:
//!
//! ```text
//! similarity = round((max_len - distance) / max_len * 100)
//! ```
//!
//! An empty input scores 0, even against another empty input. Inputs that
//! only become empty through trimming are compared like any other.

use std::cmp::max;

use crate::MAX_SIMILARITY;
use crate::distance::{EditDistance, Levenshtein};

/// Lowercase `s` and trim leading/trailing whitespace.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Similarity of two already normalized strings, measured with `metric`.
///
/// Two empty strings are identical and score 100; rejecting empty input is
/// up to the caller.
pub(crate) fn normalized_similarity(metric: &dyn EditDistance, a: &str, b: &str) -> u8 {
    let max_len = max(a.chars().count(), b.chars().count());
    if max_len == 0 {
        return MAX_SIMILARITY;
    }

    let distance = metric.distance(a, b);
    let raw = max_len.saturating_sub(distance) as f64 / max_len as f64 * f64::from(MAX_SIMILARITY);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = raw.round() as u8;
    score.min(MAX_SIMILARITY)
}

/// Similarity between `a` and `b` in `[0, 100]`, where 100 means identical
/// after normalization.
///
/// ```
/// use reconcile::similarity;
///
/// assert_eq!(similarity("Apple", "apple"), 100);
/// assert_eq!(similarity("appel", "apple"), 60);
/// assert_eq!(similarity("", "apple"), 0);
/// ```
pub fn similarity(a: &str, b: &str) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let metric = Levenshtein::default().use_cache(false);
    normalized_similarity(&metric, &normalize(a), &normalize(b))
}
