//! Block model.
//!
//! A block is an indivisible unit of players that must end up on the same
//! side. Ungrouped players are singleton blocks; tagged groups are duos or
//! trios.

use serde::{Deserialize, Serialize};

use super::Player;

/// An ordered, non-empty group of players that stays together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Group tag, or `None` for an ungrouped (singleton) player.
    pub tag: Option<String>,
    /// Members in roster order.
    pub players: Vec<Player>,
}

impl Block {
    /// Creates a block from a group tag and its members.
    pub fn new(tag: Option<String>, players: Vec<Player>) -> Self {
        Self { tag, players }
    }

    /// Creates a singleton block for an ungrouped player.
    pub fn single(player: Player) -> Self {
        Self {
            tag: None,
            players: vec![player],
        }
    }

    /// Number of players in the block.
    #[inline]
    pub fn size(&self) -> usize {
        self.players.len()
    }

    /// Sum of member ratings.
    pub fn rating_sum(&self) -> f64 {
        self.players.iter().map(|p| p.rating).sum()
    }

    /// Whether this block came from a play-together group.
    pub fn is_group(&self) -> bool {
        self.tag.is_some()
    }

    /// Member names in block order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}
