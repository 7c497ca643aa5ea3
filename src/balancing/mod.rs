//! Balanced team assignment.
//!
//! Splits a ten-player roster into two sides of five with the smallest
//! rating difference, keeping play-together groups whole, and returns
//! several distinct near-optimal alternatives.
//!
//! # Pipeline
//!
//! 1. [`enumerate_candidates`]: exact backtracking over blocks (≤ 1024 leaves)
//! 2. [`deduplicate`]: collapse mirrored matchups by canonical key
//! 3. [`select_options`]: rank by diff, apply the preference window, cap
//!
//! [`Matchmaker`] runs all three with a [`MatchmakingConfig`].
//!
//! # Determinism
//!
//! No randomness: identical input always yields the identical option set,
//! in the identical order.

mod canonical;
mod enumerate;
mod rank;

pub use canonical::{deduplicate, Deduplicator};
pub use enumerate::enumerate_candidates;
pub use rank::{rank_candidates, select_options};

use tracing::debug;

use crate::blocks::build_roster;
use crate::config::MatchmakingConfig;
use crate::error::Result;
use crate::models::{Candidate, OptionSet, Roster, RosterEntry};

/// Input container for one matchmaking run.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    /// Roster snapshot from the roster source.
    pub entries: Vec<RosterEntry>,
    /// Ranking and selection parameters.
    pub config: MatchmakingConfig,
}

impl MatchRequest {
    /// Creates a request with default parameters.
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self {
            entries,
            config: MatchmakingConfig::default(),
        }
    }

    /// Sets the parameters.
    pub fn with_config(mut self, config: MatchmakingConfig) -> Self {
        self.config = config;
        self
    }
}

/// Matchmaking engine.
///
/// Stateless apart from its configuration; each call is independent and
/// re-entrant.
///
/// # Example
///
/// ```
/// use u_matchmaking::balancing::Matchmaker;
/// use u_matchmaking::models::{Player, RosterEntry};
///
/// let entries: Vec<RosterEntry> = (1..=10)
///     .map(|i| RosterEntry::untagged(Player::new(i.to_string(), format!("P{i}"), 1000.0 + i as f64 * 10.0)))
///     .collect();
///
/// let matchmaker = Matchmaker::new();
/// let roster = matchmaker.build(&entries).unwrap();
/// let options = matchmaker.generate(&roster).unwrap();
///
/// assert_eq!(options.len(), 12);
/// assert_eq!(options.distinct_total(), 126);
/// assert!((options.best().unwrap().diff - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matchmaker {
    config: MatchmakingConfig,
}

impl Matchmaker {
    /// Creates a matchmaker with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parameters.
    pub fn with_config(mut self, config: MatchmakingConfig) -> Self {
        self.config = config;
        self
    }

    /// Current parameters.
    pub fn config(&self) -> &MatchmakingConfig {
        &self.config
    }

    /// Validates entries and groups them into blocks.
    pub fn build(&self, entries: &[RosterEntry]) -> Result<Roster> {
        build_roster(entries)
    }

    /// Every distinct matchup for the roster, ranked, without the cap.
    pub fn distinct_matchups(&self, roster: &Roster) -> Result<Vec<Candidate>> {
        let raw = enumerate_candidates(&roster.blocks)?;
        Ok(rank_candidates(deduplicate(raw)))
    }

    /// Generates the ranked option set for a roster.
    ///
    /// An empty result is not an error: it means the groups admit no 5/5
    /// split ([`OptionSet::is_infeasible`]).
    ///
    /// The roster is re-validated first, since it may have been assembled
    /// by hand or deserialized rather than built from entries.
    ///
    /// # Errors
    /// `InvalidConfig` for unusable parameters; any
    /// [`validate_blocks`](crate::validation::validate_blocks) failure for
    /// the roster.
    pub fn generate(&self, roster: &Roster) -> Result<OptionSet> {
        self.config.validate()?;
        let raw = enumerate_candidates(&roster.blocks)?;
        let options = select_options(deduplicate(raw), &self.config);
        if options.is_infeasible() {
            debug!(blocks = roster.block_count(), "no 5/5 split for these groups");
        }
        Ok(options)
    }

    /// Builds the roster and generates options in one call.
    pub fn generate_from_entries(&self, entries: &[RosterEntry]) -> Result<(Roster, OptionSet)> {
        let roster = self.build(entries)?;
        let options = self.generate(&roster)?;
        Ok((roster, options))
    }

    /// Runs a request, using the request's parameters.
    pub fn generate_request(&self, request: &MatchRequest) -> Result<(Roster, OptionSet)> {
        let matchmaker = Self {
            config: request.config.clone(),
        };
        matchmaker.generate_from_entries(&request.entries)
    }
}
