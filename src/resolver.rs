//! Resolving a query to the closest entry of a vocabulary.
//!
//! The query and every candidate are normalized (lowercased and trimmed). A
//! candidate equal to the query after normalization wins outright with a
//! similarity of 100; the first one in input order is returned. Otherwise
//! each candidate is scored with [`similarity`](fn@crate::similarity), plus a
//! bonus of 10 when one normalized string contains the other, capped at 100.
//! The highest score wins and ties go to the earliest candidate.
use std::cmp::{Reverse, min};

use rayon::prelude::*;

use crate::MAX_SIMILARITY;
use crate::distance::{EditDistance, Levenshtein};
use crate::options::ResolverOptions;
use crate::similarity::{normalize, normalized_similarity};

/// Bonus granted when one normalized string contains the other
pub const CONTAINS_BONUS: u8 = 10;

//------------------------------------------------------------------------------
/// Outcome of resolving a query against a vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// The winning candidate, exactly as supplied. Empty when there were no candidates.
    pub matched: String,
    /// Confidence in `[0, 100]`
    pub similarity: u8,
}

/// One entry of a full ranking, see [`Resolver::rank`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    /// Position of the candidate in the input
    pub index: usize,
    /// The candidate, exactly as supplied
    pub candidate: String,
    /// Bonus adjusted similarity in `[0, 100]`
    pub similarity: u8,
    /// Whether the candidate equals the query after normalization
    pub exact: bool,
}

//==============================================================================
/// Scores candidates against queries.
///
/// Use [`Resolver::default`] for the plain sequential resolver, or the builder
/// methods to switch on parallel scoring, a minimum similarity or a ranking
/// limit.
pub struct Resolver {
    metric: Box<dyn EditDistance>,
    parallel: bool,
    threshold: Option<u8>,
    limit: Option<usize>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::builder()
    }
}

impl Resolver {
    /// Creates a new Resolver builder using the Levenshtein distance.
    pub fn builder() -> Self {
        Self {
            metric: Box::new(Levenshtein::default()),
            parallel: false,
            threshold: None,
            limit: None,
        }
    }

    /// Sets the metric used to compare strings.
    pub fn metric(mut self, metric: impl EditDistance + 'static) -> Self {
        self.metric = Box::new(metric);
        self
    }

    /// Scores candidates on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Minimum similarity accepted by [`Resolver::resolve`] and [`Resolver::rank`].
    pub fn threshold(mut self, threshold: Option<u8>) -> Self {
        self.threshold = threshold.map(|t| min(t, MAX_SIMILARITY));
        self
    }

    /// Maximum number of entries returned by [`Resolver::rank`].
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Finalizes the builder and returns the configured Resolver.
    pub fn build(self) -> Self {
        self
    }

    /// Creates a Resolver configured from the given ResolverOptions.
    pub fn from_options(options: &ResolverOptions) -> Self {
        Resolver::builder()
            .parallel(options.parallel)
            .threshold(options.threshold)
            .limit(options.limit)
            .build()
    }

    /// Bonus adjusted score of an already normalized candidate.
    fn adjusted_score(&self, query: &str, candidate: &str) -> u8 {
        let score = normalized_similarity(self.metric.as_ref(), query, candidate);
        let bonus = if candidate.contains(query) || query.contains(candidate) {
            CONTAINS_BONUS
        } else {
            0
        };
        let adjusted = min(score.saturating_add(bonus), MAX_SIMILARITY);
        trace!("{candidate:?}: {score} + {bonus} => {adjusted}");
        adjusted
    }

    /// Normalizes every candidate once, in input order.
    fn normalize_all<S: AsRef<str> + Sync>(&self, candidates: &[S]) -> Vec<String> {
        if self.parallel {
            candidates.par_iter().map(|c| normalize(c.as_ref())).collect()
        } else {
            candidates.iter().map(|c| normalize(c.as_ref())).collect()
        }
    }

    /// Returns the candidate most similar to `query`.
    ///
    /// Never fails: with no candidates the result is an empty match with a
    /// similarity of 0. No threshold is applied here.
    pub fn find_best_match<S: AsRef<str> + Sync>(&self, query: &str, candidates: &[S]) -> MatchResult {
        if candidates.is_empty() {
            debug!("no candidates for {query:?}");
            return MatchResult::default();
        }

        let query_normalized = normalize(query);
        let normalized = self.normalize_all(candidates);

        let exact = if self.parallel {
            normalized.par_iter().position_first(|c| *c == query_normalized)
        } else {
            normalized.iter().position(|c| *c == query_normalized)
        };
        if let Some(index) = exact {
            debug!("exact match for {query:?} at {index}");
            return MatchResult {
                matched: candidates[index].as_ref().to_string(),
                similarity: MAX_SIMILARITY,
            };
        }

        let best = if self.parallel {
            normalized
                .par_iter()
                .enumerate()
                .map(|(index, c)| (self.adjusted_score(&query_normalized, c), index))
                .max_by_key(|&(score, index)| (score, Reverse(index)))
        } else {
            let mut best: Option<(u8, usize)> = None;
            for (index, c) in normalized.iter().enumerate() {
                let score = self.adjusted_score(&query_normalized, c);
                if best.is_none_or(|(best_score, _)| score > best_score) {
                    best = Some((score, index));
                }
            }
            best
        };

        // candidates is not empty, so there is always a best one
        let (similarity, index) = best.unwrap_or_default();
        debug!("best match for {query:?}: {:?} ({similarity})", candidates[index].as_ref());
        MatchResult {
            matched: candidates[index].as_ref().to_string(),
            similarity,
        }
    }

    /// Like [`Resolver::find_best_match`], but `None` when there are no
    /// candidates or the best one scores below the threshold.
    pub fn resolve<S: AsRef<str> + Sync>(&self, query: &str, candidates: &[S]) -> Option<MatchResult> {
        if candidates.is_empty() {
            return None;
        }
        let result = self.find_best_match(query, candidates);
        match self.threshold {
            Some(threshold) if result.similarity < threshold => {
                debug!(
                    "rejecting {:?} for {query:?}: {} < {threshold}",
                    result.matched, result.similarity
                );
                None
            }
            _ => Some(result),
        }
    }

    /// Scores every candidate and returns them best first.
    ///
    /// Candidates are ordered by similarity, exact matches before other
    /// candidates scoring 100, then by input order. Entries below the
    /// threshold are dropped and the list is cut to the limit. The first
    /// entry, when there is one, is the candidate chosen by
    /// [`Resolver::find_best_match`].
    pub fn rank<S: AsRef<str> + Sync>(&self, query: &str, candidates: &[S]) -> Vec<ScoredCandidate> {
        let query_normalized = normalize(query);
        let score = |(index, c): (usize, &S)| {
            let candidate = c.as_ref();
            let normalized = normalize(candidate);
            let exact = normalized == query_normalized;
            let similarity = if exact {
                MAX_SIMILARITY
            } else {
                self.adjusted_score(&query_normalized, &normalized)
            };
            ScoredCandidate {
                index,
                candidate: candidate.to_string(),
                similarity,
                exact,
            }
        };

        let mut ranked: Vec<ScoredCandidate> = if self.parallel {
            candidates.par_iter().enumerate().map(score).collect()
        } else {
            candidates.iter().enumerate().map(score).collect()
        };

        if let Some(threshold) = self.threshold {
            ranked.retain(|c| c.similarity >= threshold);
        }

        ranked.sort_by(|a, b| {
            b.similarity
                .cmp(&a.similarity)
                .then(b.exact.cmp(&a.exact))
                .then(a.index.cmp(&b.index))
        });

        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }

        ranked
    }
}

/// Returns the candidate most similar to `query`, see [`Resolver::find_best_match`].
///
/// ```
/// use reconcile::find_best_match;
///
/// let result = find_best_match("Apple", &["apple", "Banana"]);
/// assert_eq!(result.matched, "apple");
/// assert_eq!(result.similarity, 100);
///
/// let empty: [&str; 0] = [];
/// assert_eq!(find_best_match("apple", &empty).matched, "");
/// ```
pub fn find_best_match<S: AsRef<str> + Sync>(query: &str, candidates: &[S]) -> MatchResult {
    Resolver::default().find_best_match(query, candidates)
}
