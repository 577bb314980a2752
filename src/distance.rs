//! Levenshtein edit distance.
//!
//! Counts the minimum number of single-character insertions, deletions and
//! substitutions (each of unit cost) needed to turn one string into another.
//! Characters are compared as Unicode scalar values, so `é` is one unit no
//! matter how many bytes it takes.
//!
//! The classic formulation fills a `(len(b) + 1) × (len(a) + 1)` matrix:
//! - row 0 is `0..=len(a)` and column 0 is `0..=len(b)`;
//! - `cell(i, j) = min(cell(i-1, j) + 1, cell(i, j-1) + 1, cell(i-1, j-1) + cost)`
//!   where `cost` is 0 when `a[j-1] == b[i-1]` and 1 otherwise.
//!
//! Only the bottom-right cell is needed, so we keep a single rolling row.
//!
//! # Example:
//! ```
//! use reconcile::distance::{EditDistance, Levenshtein};
//!
//! let metric = Levenshtein::default();
//!
//! assert_eq!(metric.distance("kitten", "sitting"), 3);
//! assert_eq!(metric.distance("", "abc"), 3);
//! assert_eq!(metric.distance("naïve", "naive"), 1);
//! ```

use std::cell::RefCell;
use std::cmp::min;

use thread_local::ThreadLocal;

/// Trait for metrics counting the edits between two strings
pub trait EditDistance: Send + Sync {
    /// Minimum number of edits required to transform `a` into `b`
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Rolling-row evaluation of the distance matrix.
///
/// `row` is scratch space; its previous content is discarded.
fn levenshtein(a: &[char], b: &[char], row: &mut Vec<usize>) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    row.clear();
    row.extend(0..=a.len());

    for (i, &cb) in b.iter().enumerate() {
        // cell(i, 0) of the previous row, i.e. the diagonal for j = 1
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &ca) in a.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let above = row[j + 1];
            row[j + 1] = min(min(above + 1, row[j] + 1), diag + cost);
            diag = above;
        }
    }

    row[a.len()]
}

/// Levenshtein distance with unit costs.
///
/// Character and row buffers are cached per thread so that scoring a large
/// vocabulary does not allocate once per candidate.
#[derive(Debug)]
pub struct Levenshtein {
    use_cache: bool,
    a_cache: ThreadLocal<RefCell<Vec<char>>>,
    b_cache: ThreadLocal<RefCell<Vec<char>>>,
    row_cache: ThreadLocal<RefCell<Vec<usize>>>,
}

impl Default for Levenshtein {
    fn default() -> Self {
        Self {
            use_cache: true,
            a_cache: ThreadLocal::new(),
            b_cache: ThreadLocal::new(),
            row_cache: ThreadLocal::new(),
        }
    }
}

impl Levenshtein {
    /// Enables or disables thread-local caching of the scratch buffers.
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        if a == b {
            return 0;
        }

        if !self.use_cache {
            let a: Vec<char> = a.chars().collect();
            let b: Vec<char> = b.chars().collect();
            return levenshtein(&a, &b, &mut Vec::with_capacity(a.len() + 1));
        }

        let mut a_chars = self.a_cache.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        let mut b_chars = self.b_cache.get_or(|| RefCell::new(Vec::new())).borrow_mut();
        let mut row = self.row_cache.get_or(|| RefCell::new(Vec::new())).borrow_mut();

        a_chars.clear();
        a_chars.extend(a.chars());

        b_chars.clear();
        b_chars.extend(b.chars());

        levenshtein(&a_chars, &b_chars, &mut row)
    }
}

/// Compute the Levenshtein distance between `a` and `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    Levenshtein::default().use_cache(false).distance(a, b)
}
