//! Exact candidate enumeration.
//!
//! # Algorithm
//!
//! Subset-sum with target 5 over the blocks, by recursive backtracking:
//! 1. At each block, branch into "include in side A" (first) and "exclude".
//! 2. Prune when the side would exceed 5 players, or when the remaining
//!    blocks cannot fill it to 5.
//! 3. When side A holds exactly 5 players, the complement is side B;
//!    materialize the candidate with ratings summed per player.
//!
//! # Complexity
//! At most 2^10 = 1024 leaves (ten singleton blocks). Ten singletons yield
//! exactly C(10,5) = 252 raw candidates, each matchup twice (A/B mirrored).

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::{Block, Candidate, SIDE_SIZE};
use crate::validation::validate_blocks;

/// Enumerates every split of the blocks into two sides of five.
///
/// Mirrored splits are both reported; see
/// [`deduplicate`](super::deduplicate) to collapse them. An empty result
/// means the block sizes admit no 5/5 split.
///
/// # Errors
/// Any [`validate_blocks`] failure: an empty block, a player total other
/// than ten, a bad rating, a repeated id or name, or a group outside 2..=3.
/// Ten non-empty blocks at most also bounds the search.
pub fn enumerate_candidates(blocks: &[Block]) -> Result<Vec<Candidate>> {
    validate_blocks(blocks)?;

    // suffix[i] = players in blocks[i..]
    let mut suffix = vec![0; blocks.len() + 1];
    for i in (0..blocks.len()).rev() {
        suffix[i] = suffix[i + 1] + blocks[i].size();
    }

    let mut search = Search {
        blocks,
        suffix,
        in_side_a: vec![false; blocks.len()],
        found: Vec::new(),
    };
    search.visit(0, 0);

    debug!(
        blocks = blocks.len(),
        candidates = search.found.len(),
        "enumerated raw candidates"
    );
    Ok(search.found)
}

struct Search<'a> {
    blocks: &'a [Block],
    suffix: Vec<usize>,
    in_side_a: Vec<bool>,
    found: Vec<Candidate>,
}

impl Search<'_> {
    fn visit(&mut self, index: usize, size_a: usize) {
        if size_a == SIDE_SIZE {
            self.emit();
            return;
        }
        if index == self.blocks.len() || size_a + self.suffix[index] < SIDE_SIZE {
            return;
        }

        let size = self.blocks[index].size();
        if size_a + size <= SIDE_SIZE {
            self.in_side_a[index] = true;
            self.visit(index + 1, size_a + size);
            self.in_side_a[index] = false;
        }
        self.visit(index + 1, size_a);
    }

    fn emit(&mut self) {
        let mut side_a = Vec::with_capacity(SIDE_SIZE);
        let mut side_b = Vec::with_capacity(SIDE_SIZE);
        let mut rating_a = 0.0;
        let mut rating_b = 0.0;

        for (block, &in_a) in self.blocks.iter().zip(&self.in_side_a) {
            for player in &block.players {
                if in_a {
                    side_a.push(player.name.clone());
                    rating_a += player.rating;
                } else {
                    side_b.push(player.name.clone());
                    rating_b += player.rating;
                }
            }
        }

        let candidate = Candidate::new(side_a, side_b, rating_a, rating_b);
        trace!(
            side_a = ?candidate.side_a,
            side_b = ?candidate.side_b,
            diff = candidate.diff,
            "candidate"
        );
        self.found.push(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchmakingError;
    use crate::models::Player;
    use std::collections::HashSet;

    fn singles(ratings: &[f64]) -> Vec<Block> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &r)| Block::single(Player::new(i.to_string(), format!("P{i}"), r)))
            .collect()
    }

    fn group(tag: &str, names: &[(&str, f64)]) -> Block {
        Block::new(
            Some(tag.to_string()),
            names
                .iter()
                .map(|&(n, r)| Player::new(n, n, r))
                .collect(),
        )
    }

    #[test]
    fn test_ten_singles_yield_252() {
        let candidates = enumerate_candidates(&singles(&[1000.0; 10])).unwrap();
        assert_eq!(candidates.len(), 252);
    }

    #[test]
    fn test_every_candidate_is_a_partition() {
        let blocks = singles(&[900.0, 1500.0, 1000.0, 1200.0, 1000.0, 800.0, 1100.0, 1300.0, 950.0, 1050.0]);
        let all: HashSet<String> = blocks.iter().flat_map(|b| b.names()).map(String::from).collect();

        for c in enumerate_candidates(&blocks).unwrap() {
            assert_eq!(c.side_a.len(), SIDE_SIZE);
            assert_eq!(c.side_b.len(), SIDE_SIZE);
            let a: HashSet<String> = c.side_a.iter().cloned().collect();
            let b: HashSet<String> = c.side_b.iter().cloned().collect();
            assert!(a.is_disjoint(&b));
            assert_eq!(a.union(&b).cloned().collect::<HashSet<_>>(), all);
            assert!(c.diff >= 0.0);
        }
    }

    #[test]
    fn test_diff_from_player_ratings() {
        let blocks = singles(&[1000.0, 1000.0, 1000.0, 1000.0, 1000.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let candidates = enumerate_candidates(&blocks).unwrap();
        // First leaf takes the first five blocks.
        assert!((candidates[0].rating_a - 5000.0).abs() < 1e-10);
        assert!((candidates[0].rating_b - 0.0).abs() < 1e-10);
        assert!((candidates[0].diff - 5000.0).abs() < 1e-10);
    }

    #[test]
    fn test_trio_stays_together() {
        let mut blocks = vec![group("trio", &[("T1", 900.0), ("T2", 1000.0), ("T3", 1100.0)])];
        blocks.extend(singles(&[1000.0; 7]));

        let candidates = enumerate_candidates(&blocks).unwrap();
        // Trio + 2 of 7 singles on one side: C(7,2) = 21 in each orientation.
        assert_eq!(candidates.len(), 42);
        for c in &candidates {
            let side = c.side_of("T1").unwrap();
            assert_eq!(c.side_of("T2"), Some(side));
            assert_eq!(c.side_of("T3"), Some(side));
            assert!(c.diff.abs() < 1e-10);
        }
    }

    #[test]
    fn test_two_trios_and_singles() {
        let blocks = vec![
            group("t1", &[("A1", 1000.0), ("A2", 1000.0), ("A3", 1000.0)]),
            group("t2", &[("B1", 1000.0), ("B2", 1000.0), ("B3", 1000.0)]),
            Block::single(Player::new("s1", "S1", 1000.0)),
            Block::single(Player::new("s2", "S2", 1000.0)),
            Block::single(Player::new("s3", "S3", 1000.0)),
            Block::single(Player::new("s4", "S4", 1000.0)),
        ];
        let candidates = enumerate_candidates(&blocks).unwrap();
        // One trio + 2 of 4 singles: 2 * C(4,2) = 12.
        assert_eq!(candidates.len(), 12);
        for c in &candidates {
            assert_ne!(c.side_of("A1"), c.side_of("B1"));
        }
    }

    #[test]
    fn test_infeasible_blocks_yield_nothing() {
        // Five duos: every side total is even.
        let duos: Vec<Block> = (0..5)
            .map(|i| {
                let a = format!("D{i}a");
                let b = format!("D{i}b");
                group(&format!("duo{i}"), &[(a.as_str(), 1000.0), (b.as_str(), 1000.0)])
            })
            .collect();
        assert!(enumerate_candidates(&duos).unwrap().is_empty());

        // Three trios and a single: 3, 4, 6, ... never 5.
        let mut blocks: Vec<Block> = (0..3)
            .map(|i| {
                let names: Vec<String> = (0..3).map(|j| format!("T{i}{j}")).collect();
                group(
                    &format!("trio{i}"),
                    &names.iter().map(|n| (n.as_str(), 1000.0)).collect::<Vec<_>>(),
                )
            })
            .collect();
        blocks.push(Block::single(Player::new("s", "S", 1000.0)));
        assert!(enumerate_candidates(&blocks).unwrap().is_empty());
    }

    #[test]
    fn test_hand_built_blocks_are_validated() {
        let four = |tag: &str| {
            let names: Vec<String> = (0..4).map(|j| format!("{tag}{j}")).collect();
            group(tag, &names.iter().map(|n| (n.as_str(), 1000.0)).collect::<Vec<_>>())
        };
        let blocks = vec![
            four("X"),
            four("Y"),
            group("duo", &[("S1", 1000.0), ("S2", 1000.0)]),
        ];
        assert_eq!(
            enumerate_candidates(&blocks).unwrap_err(),
            MatchmakingError::InvalidBlockSize {
                tag: "X".into(),
                size: 4
            }
        );

        let mut blocks = singles(&[1000.0; 10]);
        blocks[9].players[0].name = "P0".into();
        assert_eq!(
            enumerate_candidates(&blocks).unwrap_err(),
            MatchmakingError::DuplicatePlayer { player: "P0".into() }
        );

        let mut blocks = singles(&[1000.0; 10]);
        blocks.insert(3, Block::new(None, Vec::new()));
        assert_eq!(
            enumerate_candidates(&blocks).unwrap_err(),
            MatchmakingError::EmptyBlock { index: 3 }
        );
    }

    #[test]
    fn test_wrong_total_rejected() {
        assert_eq!(
            enumerate_candidates(&singles(&[1000.0; 9])).unwrap_err(),
            MatchmakingError::InvalidRosterSize { actual: 9 }
        );
        assert_eq!(
            enumerate_candidates(&singles(&[1000.0; 11])).unwrap_err(),
            MatchmakingError::InvalidRosterSize { actual: 11 }
        );
    }
}
