//! Block building.
//!
//! Groups validated roster entries into indivisible blocks: one block per
//! play-together tag, one singleton block per ungrouped player.
//!
//! # Ordering
//!
//! Blocks are sorted descending by `(size, rating_sum)`, then by first
//! member name. The order only seeds enumeration; it never changes which
//! candidates exist, only the order in which they are discovered.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{MatchmakingError, Result};
use crate::models::{Block, Player, Roster, RosterEntry};
use crate::validation::validate_roster;

/// Validates roster entries and groups them into blocks.
///
/// # Errors
/// Any error from [`validate_roster`]; nothing is grouped on failure.
pub fn build_roster(entries: &[RosterEntry]) -> Result<Roster> {
    validate_roster(entries)?;

    let mut groups: BTreeMap<&str, Vec<Player>> = BTreeMap::new();
    let mut blocks = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry.tag() {
            Some(tag) => groups.entry(tag).or_default().push(entry.player.clone()),
            None => blocks.push(Block::single(entry.player.clone())),
        }
    }

    blocks.extend(
        groups
            .into_iter()
            .map(|(tag, players)| Block::new(Some(tag.to_string()), players)),
    );
    blocks.sort_by(compare_blocks);

    debug!(
        blocks = blocks.len(),
        groups = blocks.iter().filter(|b| b.is_group()).count(),
        "built roster blocks"
    );

    Ok(Roster::new(blocks))
}

/// Larger blocks first, then heavier, then by first name.
fn compare_blocks(a: &Block, b: &Block) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| b.rating_sum().total_cmp(&a.rating_sum()))
        .then_with(|| first_name(a).cmp(first_name(b)))
}

fn first_name(block: &Block) -> &str {
    block.players.first().map(|p| p.name.as_str()).unwrap_or("")
}

/// Play-together groups defined by player name.
///
/// Mirrors how an operator picks duos and trios from the signed-up list.
/// [`apply`](Self::apply) turns the groups into tagged roster entries.
///
/// # Example
/// ```
/// use u_matchmaking::blocks::{build_roster, CompanionGroups};
/// use u_matchmaking::models::Player;
///
/// let players: Vec<Player> = (1..=10)
///     .map(|i| Player::new(i.to_string(), format!("P{i}"), 1000.0))
///     .collect();
/// let entries = CompanionGroups::new()
///     .with_group("duo1", ["P1", "P2"])
///     .apply(&players)
///     .unwrap();
/// let roster = build_roster(&entries).unwrap();
/// assert_eq!(roster.block_count(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompanionGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl CompanionGroups {
    /// Creates an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group. Empty groups are ignored when applied.
    pub fn with_group<I, S>(mut self, tag: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups
            .push((tag.into(), names.into_iter().map(Into::into).collect()));
        self
    }

    /// Number of non-empty groups.
    pub fn group_count(&self) -> usize {
        self.groups.iter().filter(|(_, n)| !n.is_empty()).count()
    }

    /// Tags players by group membership.
    ///
    /// Returns one entry per player, in input order.
    ///
    /// # Errors
    /// - `OverlappingBlock` if a name is listed in two groups (or twice)
    /// - `UnknownPlayer` if a name matches no player
    ///
    /// Group sizes are checked later by [`build_roster`].
    pub fn apply(&self, players: &[Player]) -> Result<Vec<RosterEntry>> {
        let mut tag_by_name: HashMap<&str, &str> = HashMap::new();

        for (tag, names) in &self.groups {
            for name in names {
                if let Some(first) = tag_by_name.insert(name.as_str(), tag.as_str()) {
                    return Err(MatchmakingError::OverlappingBlock {
                        player: name.clone(),
                        first: first.to_string(),
                        second: tag.clone(),
                    });
                }
                if !players.iter().any(|p| &p.name == name) {
                    return Err(MatchmakingError::UnknownPlayer {
                        player: name.clone(),
                    });
                }
            }
        }

        Ok(players
            .iter()
            .map(|p| match tag_by_name.get(p.name.as_str()) {
                Some(tag) => RosterEntry::tagged(p.clone(), *tag),
                None => RosterEntry::untagged(p.clone()),
            })
            .collect())
    }
}
