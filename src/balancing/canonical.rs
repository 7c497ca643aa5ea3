//! Side-swap canonicalization and deduplication.
//!
//! A matchup is the unordered pair of side-sets: order within a side does
//! not matter, and neither does which side is called A. The canonical key
//! sorts each side's names, then orders the two sides, so a candidate and
//! its mirror map to the same key.

use std::collections::HashMap;

use tracing::debug;

use crate::models::Candidate;

/// Side-swap-invariant identity of a matchup. Internal to the crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct CanonicalKey {
    lower: Vec<String>,
    upper: Vec<String>,
}

impl CanonicalKey {
    pub(crate) fn new(side_a: &[String], side_b: &[String]) -> Self {
        let mut a = side_a.to_vec();
        let mut b = side_b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }
}

impl Candidate {
    pub(crate) fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey::new(&self.side_a, &self.side_b)
    }
}

/// Keeps the best candidate per matchup.
///
/// A repeated matchup replaces the stored one only with a strictly lower
/// `diff`; ties keep the first seen. Output preserves first-seen order.
#[derive(Debug, Default)]
pub struct Deduplicator {
    index: HashMap<CanonicalKey, usize>,
    kept: Vec<Candidate>,
    offered: usize,
}

impl Deduplicator {
    /// Creates an empty deduplicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate. Returns `true` if it was a new matchup.
    pub fn offer(&mut self, candidate: Candidate) -> bool {
        self.offered += 1;
        let key = candidate.canonical_key();
        match self.index.get(&key) {
            Some(&slot) => {
                if candidate.diff < self.kept[slot].diff {
                    self.kept[slot] = candidate;
                }
                false
            }
            None => {
                self.index.insert(key, self.kept.len());
                self.kept.push(candidate);
                true
            }
        }
    }

    /// Number of distinct matchups seen.
    pub fn len(&self) -> usize {
        self.kept.len()
    }

    /// Whether nothing has been offered.
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    /// The distinct candidates in first-seen order.
    pub fn into_candidates(self) -> Vec<Candidate> {
        debug!(
            offered = self.offered,
            distinct = self.kept.len(),
            "deduplicated candidates"
        );
        self.kept
    }
}

/// Collapses mirrored and repeated matchups, keeping the lowest `diff`.
pub fn deduplicate(candidates: impl IntoIterator<Item = Candidate>) -> Vec<Candidate> {
    let mut dedup = Deduplicator::new();
    for candidate in candidates {
        dedup.offer(candidate);
    }
    dedup.into_candidates()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balancing::enumerate_candidates;
    use crate::models::{Block, Player};
    use std::collections::HashSet;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn singles(n: usize) -> Vec<Block> {
        (0..n)
            .map(|i| Block::single(Player::new(i.to_string(), format!("P{i}"), 1000.0 + i as f64)))
            .collect()
    }

    #[test]
    fn test_key_ignores_order_and_side() {
        let k1 = CanonicalKey::new(&names(&["B", "A", "C", "D", "E"]), &names(&["F", "G", "H", "I", "J"]));
        let k2 = CanonicalKey::new(&names(&["J", "I", "H", "G", "F"]), &names(&["A", "B", "C", "D", "E"]));
        assert_eq!(k1, k2);

        let k3 = CanonicalKey::new(&names(&["A", "B", "C", "D", "F"]), &names(&["E", "G", "H", "I", "J"]));
        assert_ne!(k1, k3);
    }

    #[test]
    fn test_ten_singles_collapse_to_126() {
        let raw = enumerate_candidates(&singles(10)).unwrap();
        assert_eq!(raw.len(), 252);

        let distinct = deduplicate(raw);
        assert_eq!(distinct.len(), 126);

        let keys: HashSet<CanonicalKey> = distinct.iter().map(Candidate::canonical_key).collect();
        assert_eq!(keys.len(), 126);
    }

    #[test]
    fn test_first_block_stays_on_side_a() {
        let distinct = deduplicate(enumerate_candidates(&singles(10)).unwrap());
        assert!(distinct.iter().all(|c| c.side_of("P0") == Some(crate::models::Side::A)));
    }

    #[test]
    fn test_lower_diff_replaces() {
        let a = names(&["A", "B", "C", "D", "E"]);
        let b = names(&["F", "G", "H", "I", "J"]);

        let mut dedup = Deduplicator::new();
        assert!(dedup.offer(Candidate::new(a.clone(), b.clone(), 5300.0, 5000.0)));
        assert!(!dedup.offer(Candidate::new(b.clone(), a.clone(), 5000.0, 5100.0)));
        assert!(!dedup.offer(Candidate::new(a.clone(), b.clone(), 5200.0, 5000.0)));
        assert_eq!(dedup.len(), 1);

        let kept = dedup.into_candidates();
        assert!((kept[0].diff - 100.0).abs() < 1e-10);
        assert_eq!(kept[0].side_a, b);
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let a = names(&["A", "B", "C", "D", "E"]);
        let b = names(&["F", "G", "H", "I", "J"]);

        let kept = deduplicate(vec![
            Candidate::new(a.clone(), b.clone(), 5000.0, 5000.0),
            Candidate::new(b.clone(), a.clone(), 5000.0, 5000.0),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].side_a, a);
    }
}
