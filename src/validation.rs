//! Input validation for matchmaking rosters.
//!
//! Checks structural integrity of the roster before any search. Detects:
//! - Wrong player count
//! - Negative, NaN or infinite ratings
//! - A player placed in two different groups
//! - Duplicate player ids or names
//! - Groups with fewer than 2 or more than 3 players
//!
//! [`validate_roster`] checks raw entries. [`validate_blocks`] re-checks a
//! roster that was assembled by hand or deserialized instead of built.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{MatchmakingError, Result};
use crate::models::{Block, Player, RosterEntry, ROSTER_SIZE};

/// Smallest allowed play-together group.
pub const MIN_GROUP_SIZE: usize = 2;

/// Largest allowed play-together group.
pub const MAX_GROUP_SIZE: usize = 3;

/// Validates a roster, returning the first problem found.
///
/// Checks run in this order:
/// 1. Exactly ten entries
/// 2. Every rating is finite and non-negative
/// 3. No player id carries two different tags
/// 4. No repeated player id or name
/// 5. Every tagged group has 2 or 3 players
pub fn validate_roster(entries: &[RosterEntry]) -> Result<()> {
    match roster_issues(entries).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collects every problem in a roster, in check order.
///
/// Useful for showing an operator all issues at once instead of one
/// per attempt.
pub fn roster_issues(entries: &[RosterEntry]) -> Vec<MatchmakingError> {
    let mut errors = Vec::new();

    if entries.len() != ROSTER_SIZE {
        errors.push(MatchmakingError::InvalidRosterSize {
            actual: entries.len(),
        });
    }

    rating_issues(entries.iter().map(|e| &e.player), &mut errors);

    // Overlap first: a repeated id with conflicting tags is reported as an
    // overlap, not as a plain duplicate.
    let mut tag_by_id: HashMap<&str, Option<&str>> = HashMap::new();
    let mut overlapping: HashSet<&str> = HashSet::new();
    for entry in entries {
        let id = entry.player.id.as_str();
        let tag = entry.tag();
        match tag_by_id.get(id).copied() {
            Some(Some(first)) => {
                if let Some(second) = tag {
                    if first != second && overlapping.insert(id) {
                        errors.push(MatchmakingError::OverlappingBlock {
                            player: entry.player.name.clone(),
                            first: first.to_string(),
                            second: second.to_string(),
                        });
                    }
                }
            }
            Some(None) => {}
            None => {
                tag_by_id.insert(id, tag);
            }
        }
    }

    duplicate_issues(entries.iter().map(|e| &e.player), &overlapping, &mut errors);

    // Group sizes count distinct players; sorted by tag for stable output.
    let mut groups: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for entry in entries {
        if let Some(tag) = entry.tag() {
            groups
                .entry(tag)
                .or_default()
                .insert(entry.player.id.as_str());
        }
    }
    for (tag, members) in groups {
        if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&members.len()) {
            errors.push(MatchmakingError::InvalidBlockSize {
                tag: tag.to_string(),
                size: members.len(),
            });
        }
    }

    errors
}

/// Validates the blocks of an already assembled roster, returning the
/// first problem found.
///
/// Checks run in this order:
/// 1. No empty block
/// 2. Exactly ten players across all blocks
/// 3. Every rating is finite and non-negative
/// 4. No repeated player id or name
/// 5. Every multi-player block has 2 or 3 players
pub fn validate_blocks(blocks: &[Block]) -> Result<()> {
    match block_issues(blocks).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collects every problem in a set of blocks, in check order.
pub fn block_issues(blocks: &[Block]) -> Vec<MatchmakingError> {
    let mut errors = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        if block.players.is_empty() {
            errors.push(MatchmakingError::EmptyBlock { index });
        }
    }

    let total: usize = blocks.iter().map(Block::size).sum();
    if total != ROSTER_SIZE {
        errors.push(MatchmakingError::InvalidRosterSize { actual: total });
    }

    let players = || blocks.iter().flat_map(|b| b.players.iter());
    rating_issues(players(), &mut errors);
    duplicate_issues(players(), &HashSet::new(), &mut errors);

    for (index, block) in blocks.iter().enumerate() {
        let size = block.size();
        let grouped = block.is_group() || size > 1;
        if grouped && size > 0 && !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&size) {
            errors.push(MatchmakingError::InvalidBlockSize {
                tag: block.tag.clone().unwrap_or_else(|| format!("#{index}")),
                size,
            });
        }
    }

    errors
}

fn rating_issues<'a>(players: impl Iterator<Item = &'a Player>, errors: &mut Vec<MatchmakingError>) {
    for player in players {
        if !player.has_valid_rating() {
            errors.push(MatchmakingError::InvalidRating {
                player: player.name.clone(),
                rating: player.rating,
            });
        }
    }
}

/// Ids in `skip` were already reported as overlaps.
fn duplicate_issues<'a>(
    players: impl Iterator<Item = &'a Player>,
    skip: &HashSet<&str>,
    errors: &mut Vec<MatchmakingError>,
) {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for player in players {
        let id = player.id.as_str();
        if !ids.insert(id) {
            if !skip.contains(id) {
                errors.push(MatchmakingError::DuplicatePlayer {
                    player: id.to_string(),
                });
            }
            continue;
        }
        if !names.insert(player.name.as_str()) {
            errors.push(MatchmakingError::DuplicatePlayer {
                player: player.name.clone(),
            });
        }
    }
}
