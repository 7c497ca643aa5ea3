//! Balanced team assignment for ten-player matches.
//!
//! Splits a roster of ten rated players into two sides of five that are as
//! evenly matched as possible, keeps play-together duos and trios on the
//! same side, and offers the operator several distinct near-optimal
//! alternatives to choose from and fine-tune.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Player`, `RosterEntry`, `Block`, `Roster`,
//!   `Candidate`, `OptionSet`, `Confirmation`
//! - **`validation`**: Roster integrity checks (size, ratings, groups)
//! - **`blocks`**: Grouping entries into indivisible blocks; companion groups
//! - **`balancing`**: Exact enumeration, side-swap deduplication, ranking
//! - **`paging`**: Fixed-size windows over the ranked options
//! - **`adjust`**: One-for-one manual swaps
//! - **`flow`**: `Built → Enumerated → Selected → Confirmed` states
//! - **`config`**, **`error`**: Parameters and error taxonomy
//!
//! # Architecture
//!
//! The engine is a pure library: no storage, no UI, no I/O. Rosters come in
//! from the caller and confirmations go back out; persistence, jersey
//! colors, waitlists and rating updates belong to the host application.
//! Logging goes through `tracing`; the host installs the subscriber.
//!
//! # Example
//!
//! ```
//! use u_matchmaking::prelude::*;
//!
//! let mut entries: Vec<RosterEntry> = (1..=10)
//!     .map(|i| RosterEntry::untagged(Player::new(i.to_string(), format!("P{i}"), 1000.0)))
//!     .collect();
//! entries[0].block_tag = Some("duo".into());
//! entries[1].block_tag = Some("duo".into());
//!
//! let (roster, options) = Matchmaker::new().generate_from_entries(&entries)?;
//! let best = options.best().expect("a 5/5 split exists");
//! assert_eq!(best.diff, 0.0);
//! assert_eq!(best.side_of("P1"), best.side_of("P2"));
//!
//! let adjusted = swap_players(&roster, best, &best.side_a[4], &best.side_b[4])?;
//! assert_eq!(adjusted.side_a.len(), 5);
//! # Ok::<(), MatchmakingError>(())
//! ```

pub mod adjust;
pub mod balancing;
pub mod blocks;
pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod paging;
pub mod validation;

/// Common imports.
pub mod prelude {
    pub use crate::adjust::swap_players;
    pub use crate::balancing::Matchmaker;
    pub use crate::blocks::{build_roster, CompanionGroups};
    pub use crate::config::MatchmakingConfig;
    pub use crate::error::{MatchmakingError, Result};
    pub use crate::models::{Block, Candidate, Confirmation, OptionSet, Player, Roster, RosterEntry, Side};
    pub use crate::paging::{Page, Pager};
}
