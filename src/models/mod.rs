//! Matchmaking domain models.
//!
//! Provides the data types for one matchmaking run: the roster snapshot
//! coming in, the candidate splits going out, and the confirmation payload
//! for the persistence collaborator. All types are plain data with no
//! interior state, so independent runs can proceed in parallel.
//!
//! # Lifecycle
//!
//! | Type | Created by | Discarded |
//! |------|-----------|-----------|
//! | Player, RosterEntry | roster source | never owned by the engine |
//! | Block, Roster | block builder | after confirmation or re-run |
//! | Candidate, OptionSet | balancing pipeline | after confirmation or re-run |
//! | Confirmation | operator flow | handed to the sink |

mod block;
mod candidate;
mod option_set;
mod player;
mod roster;

pub use block::Block;
pub use candidate::{Candidate, Confirmation, Side};
pub use option_set::OptionSet;
pub use player::{Player, RosterEntry};
pub use roster::{Roster, ROSTER_SIZE, SIDE_SIZE};
