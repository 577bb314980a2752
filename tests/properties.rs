//! Randomized checks of the invariants relating distance, similarity and
//! best match resolution.

use rand::RngExt as _;
use rand::rngs::ThreadRng;
use reconcile::prelude::*;

const ALPHABET: [char; 12] = ['a', 'b', 'c', 'A', 'B', ' ', 'é', 'É', 'ß', '世', '界', '-'];
const ROUNDS: usize = 500;

fn random_string(rng: &mut ThreadRng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn distance_to_self_is_zero() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let s = random_string(&mut rng, 16);
        assert_eq!(0, edit_distance(&s, &s), "{s:?}");
    }
}

#[test]
fn distance_is_symmetric_and_bounded() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_string(&mut rng, 12);
        let b = random_string(&mut rng, 12);
        let (len_a, len_b) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        assert_eq!(d, edit_distance(&b, &a), "{a:?} <-> {b:?}");
        assert!(d >= len_a.abs_diff(len_b), "{a:?} <-> {b:?}: {d}");
        assert!(d <= len_a.max(len_b), "{a:?} <-> {b:?}: {d}");
    }
}

#[test]
fn distance_obeys_triangle_inequality() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_string(&mut rng, 8);
        let b = random_string(&mut rng, 8);
        let c = random_string(&mut rng, 8);
        assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }
}

#[test]
fn similarity_is_bounded() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_string(&mut rng, 12);
        let b = random_string(&mut rng, 12);
        let score = similarity(&a, &b);
        assert!(score <= 100, "{a:?} <-> {b:?}: {score}");
        if a.is_empty() || b.is_empty() {
            assert_eq!(0, score);
        }
        if !a.is_empty() {
            assert_eq!(100, similarity(&a, &a), "{a:?}");
        }
    }
}

#[test]
fn best_match_is_a_candidate_and_deterministic() {
    let mut rng = rand::rng();
    let sequential = Resolver::default();
    let parallel = Resolver::builder().parallel(true).build();
    for _ in 0..ROUNDS / 5 {
        let query = random_string(&mut rng, 8);
        let candidates: Vec<String> = (0..rng.random_range(0..20)).map(|_| random_string(&mut rng, 10)).collect();

        let result = find_best_match(&query, &candidates);
        assert!(result.similarity <= 100);
        if candidates.is_empty() {
            assert_eq!(MatchResult::default(), result);
        } else {
            assert!(candidates.contains(&result.matched), "{result:?}");
        }

        assert_eq!(result, find_best_match(&query, &candidates));
        assert_eq!(result, parallel.find_best_match(&query, &candidates));
        assert_eq!(sequential.rank(&query, &candidates), parallel.rank(&query, &candidates));

        if let Some(top) = sequential.rank(&query, &candidates).first() {
            assert_eq!(result.matched, top.candidate);
            assert_eq!(result.similarity, top.similarity);
        }
    }
}
