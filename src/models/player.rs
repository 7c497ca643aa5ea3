//! Player and roster-entry models.
//!
//! A player is owned by the external roster/rating store; the engine only
//! reads its rating for the duration of one run.

use serde::{Deserialize, Serialize};

/// A player signed up for a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Stable player identifier from the roster source.
    pub id: String,
    /// Display name. Unique within a roster; candidates refer to players by name.
    pub name: String,
    /// Skill rating (non-negative, finite).
    pub rating: f64,
}

impl Player {
    /// Creates a new player.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
        }
    }

    /// Whether the rating is usable for balancing.
    #[inline]
    pub fn has_valid_rating(&self) -> bool {
        self.rating.is_finite() && self.rating >= 0.0
    }
}

/// One record from the roster source: a player and an optional group tag.
///
/// Players sharing a non-empty tag must play on the same side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The player.
    pub player: Player,
    /// Play-together group tag. `None`, `""` and whitespace mean ungrouped.
    #[serde(default)]
    pub block_tag: Option<String>,
}

impl RosterEntry {
    /// Creates an ungrouped entry.
    pub fn untagged(player: Player) -> Self {
        Self {
            player,
            block_tag: None,
        }
    }

    /// Creates an entry belonging to a group.
    pub fn tagged(player: Player, tag: impl Into<String>) -> Self {
        Self {
            player,
            block_tag: Some(tag.into()),
        }
    }

    /// Normalized tag: `None` when absent or blank.
    pub fn tag(&self) -> Option<&str> {
        self.block_tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl From<Player> for RosterEntry {
    fn from(player: Player) -> Self {
        Self::untagged(player)
    }
}
