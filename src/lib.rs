//! Reconcile is an approximate string-matching library for Rust.
//!
//! It scores free-form input against a controlled vocabulary and picks the
//! closest canonical value. Reconcile can be used as a library or as a
//! command-line tool.
//!
//! # Examples
//!
//! ```
//! use reconcile::prelude::*;
//!
//! let vocabulary = ["apple", "banana", "grape"];
//!
//! let result = find_best_match("appel", &vocabulary);
//! assert_eq!(result.matched, "apple");
//! assert_eq!(result.similarity, 60);
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//! assert_eq!(similarity("Apple", " apple "), 100);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::distance::{EditDistance, Levenshtein, edit_distance};
pub use crate::options::{ResolverOptions, ResolverOptionsBuilder, ResolverOptionsBuilderError};
pub use crate::resolver::{MatchResult, Resolver, ScoredCandidate, find_best_match};
pub use crate::similarity::{normalize, similarity};

pub mod distance;
pub mod options;
pub mod prelude;
pub mod reader;
pub mod resolver;
pub mod similarity;

/// Highest similarity a comparison can produce
pub const MAX_SIMILARITY: u8 = 100;
