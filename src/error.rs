//! Error taxonomy for matchmaking.
//!
//! Every variant is a precondition violation detected synchronously,
//! before any search begins. None of them are transient: retrying with the
//! same input produces the same error, so callers must fix the roster,
//! groupings, or configuration upstream.
//!
//! An infeasible roster (no 5/5 split exists for the given blocks) is
//! **not** an error. It yields an empty [`OptionSet`](crate::models::OptionSet).

use thiserror::Error;

use crate::models::Side;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MatchmakingError>;

/// Errors raised by the matchmaking engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchmakingError {
    /// The roster does not contain exactly ten players.
    #[error("roster must contain exactly 10 players, got {actual}")]
    InvalidRosterSize {
        /// Number of players supplied.
        actual: usize,
    },

    /// A tagged group has a size other than 2 or 3.
    #[error("group '{tag}' has {size} player(s); groups must have 2 or 3")]
    InvalidBlockSize {
        /// The group tag.
        tag: String,
        /// Number of players carrying that tag.
        size: usize,
    },

    /// A player was placed in two different groups.
    #[error("player '{player}' appears in both group '{first}' and group '{second}'")]
    OverlappingBlock {
        /// The repeated player.
        player: String,
        /// First group the player was seen in.
        first: String,
        /// Second, conflicting group.
        second: String,
    },

    /// A manual swap named a player that is not on the stated side.
    #[error("player '{player}' is not on side {side}")]
    PlayerNotInSide {
        /// The requested player name.
        player: String,
        /// The side the caller claimed the player was on.
        side: Side,
    },

    /// The same player id or name appears more than once.
    #[error("player '{player}' appears more than once in the roster")]
    DuplicatePlayer {
        /// The repeated id or name.
        player: String,
    },

    /// A rating is negative, NaN, or infinite.
    #[error("player '{player}' has an invalid rating {rating}")]
    InvalidRating {
        /// The offending player name.
        player: String,
        /// The rating as supplied.
        rating: f64,
    },

    /// A name does not match any player on the roster.
    #[error("unknown player '{player}'")]
    UnknownPlayer {
        /// The unmatched name.
        player: String,
    },

    /// Two name lists do not form a 5/5 partition of the roster.
    #[error("invalid sides: {reason}")]
    InvalidSides {
        /// What is wrong with the sides.
        reason: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// A block with no players, only possible in a hand-built roster.
    #[error("block {index} has no players")]
    EmptyBlock {
        /// Position of the block in the roster.
        index: usize,
    },

    /// An option index past the end of the option set.
    #[error("option {index} is out of range (only {len} options)")]
    OptionOutOfRange {
        /// Requested 0-based index.
        index: usize,
        /// Number of options available.
        len: usize,
    },
}
