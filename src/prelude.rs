//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! reconcile types and functions with a single `use reconcile::prelude::*;` statement.

pub use crate::distance::{EditDistance, Levenshtein, edit_distance};
pub use crate::options::{ResolverOptions, ResolverOptionsBuilder};
pub use crate::reader::{ReaderError, read_candidates, read_candidates_from_file};
pub use crate::resolver::{MatchResult, Resolver, ScoredCandidate, find_best_match};
pub use crate::similarity::{normalize, similarity};
