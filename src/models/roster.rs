//! Roster model.
//!
//! The roster is the full set of blocks for one match. It doubles as the
//! rating book: every diff the engine reports, including after manual
//! swaps, is summed from the per-player ratings held here.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Block, Candidate, Player};
use crate::error::{MatchmakingError, Result};

/// Players per side.
pub const SIDE_SIZE: usize = 5;

/// Players per match.
pub const ROSTER_SIZE: usize = SIDE_SIZE * 2;

/// The blocks of one match.
///
/// Built by [`build_roster`](crate::blocks::build_roster), which guarantees
/// ten uniquely named players with valid ratings and group sizes of 2 or 3.
/// A roster made with [`Roster::new`] or deserialized carries no such
/// guarantee; the engine re-checks it with
/// [`validate_blocks`](crate::validation::validate_blocks) before searching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Blocks in enumeration order.
    pub blocks: Vec<Block>,
}

impl Roster {
    /// Wraps already-built blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Total number of players across all blocks.
    pub fn player_count(&self) -> usize {
        self.blocks.iter().map(Block::size).sum()
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// All players in block order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.blocks.iter().flat_map(|b| b.players.iter())
    }

    /// Finds a player by name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players().find(|p| p.name == name)
    }

    /// Rating of the named player.
    pub fn rating_of(&self, name: &str) -> Option<f64> {
        self.player(name).map(|p| p.rating)
    }

    /// Sums the ratings of the named players, in the given order.
    pub fn side_rating(&self, names: &[String]) -> Result<f64> {
        names.iter().try_fold(0.0, |acc, name| {
            self.rating_of(name)
                .map(|r| acc + r)
                .ok_or_else(|| MatchmakingError::UnknownPlayer {
                    player: name.clone(),
                })
        })
    }

    /// Builds a candidate from two explicit name lists.
    ///
    /// Used to re-score teams that were confirmed earlier. The lists must
    /// partition the roster into two sides of five.
    pub fn candidate_from_sides(&self, side_a: Vec<String>, side_b: Vec<String>) -> Result<Candidate> {
        if side_a.len() != SIDE_SIZE || side_b.len() != SIDE_SIZE {
            return Err(MatchmakingError::InvalidSides {
                reason: format!(
                    "each side needs {SIDE_SIZE} players, got {} and {}",
                    side_a.len(),
                    side_b.len()
                ),
            });
        }

        let mut seen = HashSet::new();
        for name in side_a.iter().chain(side_b.iter()) {
            if !seen.insert(name.as_str()) {
                return Err(MatchmakingError::InvalidSides {
                    reason: format!("player '{name}' is listed twice"),
                });
            }
        }

        let rating_a = self.side_rating(&side_a)?;
        let rating_b = self.side_rating(&side_b)?;

        if let Some(missing) = self.players().find(|p| !seen.contains(p.name.as_str())) {
            return Err(MatchmakingError::InvalidSides {
                reason: format!("player '{}' is on neither side", missing.name),
            });
        }

        Ok(Candidate::new(side_a, side_b, rating_a, rating_b))
    }

    /// Tags of groups whose members are split across both sides.
    ///
    /// Enumerated candidates never split a group; a manual swap can.
    pub fn broken_blocks(&self, candidate: &Candidate) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|b| b.size() > 1)
            .filter(|b| {
                let mut sides = b.names().map(|n| candidate.side_of(n));
                match sides.next() {
                    Some(first) => sides.any(|s| s != first),
                    None => false,
                }
            })
            .filter_map(|b| b.tag.as_deref())
            .collect()
    }
}
