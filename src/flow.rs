//! Operator flow: `Built → Enumerated → Selected → Confirmed`.
//!
//! Each state is an owned value held by the host application; the engine
//! keeps nothing between calls. Transitions are methods, so an
//! out-of-order step (confirming before selecting, say) does not compile.
//! A roster change always restarts at [`Built`], discarding prior options.
//!
//! # Example
//! ```
//! use u_matchmaking::config::MatchmakingConfig;
//! use u_matchmaking::flow::Built;
//! use u_matchmaking::models::{Player, RosterEntry};
//!
//! let entries: Vec<RosterEntry> = (1..=10)
//!     .map(|i| RosterEntry::untagged(Player::new(i.to_string(), format!("P{i}"), 900.0 + i as f64 * 25.0)))
//!     .collect();
//!
//! let enumerated = Built::new(&entries)?.enumerate(MatchmakingConfig::default())?;
//! let first_page = enumerated.page(0);
//! assert_eq!(first_page.items.len(), 3);
//!
//! let mut selected = enumerated.select(1)?;
//! let a = selected.current().side_a[0].clone();
//! let b = selected.current().side_b[0].clone();
//! selected.swap(&a, &b)?;
//!
//! let confirmation = selected.confirm_by("admin");
//! assert_eq!(confirmation.side_a.len(), 5);
//! # Ok::<(), u_matchmaking::error::MatchmakingError>(())
//! ```

use tracing::debug;

use crate::adjust::swap_players;
use crate::balancing::Matchmaker;
use crate::blocks::build_roster;
use crate::config::MatchmakingConfig;
use crate::error::{MatchmakingError, Result};
use crate::models::{Candidate, Confirmation, OptionSet, Roster, RosterEntry};
use crate::paging::{Page, Pager};
use crate::validation::validate_blocks;

/// Roster validated and grouped into blocks.
#[derive(Debug, Clone)]
pub struct Built {
    roster: Roster,
}

/// Option set produced for the roster.
#[derive(Debug, Clone)]
pub struct Enumerated {
    roster: Roster,
    config: MatchmakingConfig,
    options: OptionSet,
}

/// Operator picked an option and may adjust it.
#[derive(Debug, Clone)]
pub struct Selected {
    roster: Roster,
    config: MatchmakingConfig,
    options: OptionSet,
    chosen: usize,
    current: Candidate,
}

impl Built {
    /// Validates entries and builds blocks.
    pub fn new(entries: &[RosterEntry]) -> Result<Self> {
        Ok(Self {
            roster: build_roster(entries)?,
        })
    }

    /// Starts from an existing roster, such as one deserialized by the
    /// host. The blocks are re-validated.
    pub fn from_roster(roster: Roster) -> Result<Self> {
        validate_blocks(&roster.blocks)?;
        Ok(Self { roster })
    }

    /// The roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Generates options.
    ///
    /// An infeasible roster still transitions, with an empty option set.
    pub fn enumerate(self, config: MatchmakingConfig) -> Result<Enumerated> {
        let options = Matchmaker::new()
            .with_config(config.clone())
            .generate(&self.roster)?;
        debug!(options = options.len(), "enumerated");
        Ok(Enumerated {
            roster: self.roster,
            config,
            options,
        })
    }
}

impl Enumerated {
    /// The roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Parameters used for this option set.
    pub fn config(&self) -> &MatchmakingConfig {
        &self.config
    }

    /// The ranked options.
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Pager sized by the configuration.
    pub fn pager(&self) -> Pager {
        Pager::new(self.config.page_size)
    }

    /// The page at `index`, wrapped.
    pub fn page(&self, index: usize) -> Page<'_> {
        self.pager().page(&self.options, index)
    }

    /// Re-ranks the same roster with new parameters.
    pub fn regenerate(self, config: MatchmakingConfig) -> Result<Enumerated> {
        Built::from_roster(self.roster)?.enumerate(config)
    }

    /// Discards the options and restarts from new roster entries.
    pub fn rebuild(self, entries: &[RosterEntry]) -> Result<Built> {
        Built::new(entries)
    }

    /// Picks the option at `index` (0-based across all pages).
    ///
    /// # Errors
    /// `OptionOutOfRange` if `index` is past the end.
    pub fn select(&self, index: usize) -> Result<Selected> {
        let current = self.option(index)?.clone();
        Ok(Selected {
            roster: self.roster.clone(),
            config: self.config.clone(),
            options: self.options.clone(),
            chosen: index,
            current,
        })
    }

    fn option(&self, index: usize) -> Result<&Candidate> {
        self.options
            .get(index)
            .ok_or(MatchmakingError::OptionOutOfRange {
                index,
                len: self.options.len(),
            })
    }
}

impl Selected {
    /// The roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The candidate as currently adjusted.
    pub fn current(&self) -> &Candidate {
        &self.current
    }

    /// Index of the option this selection started from.
    pub fn chosen_index(&self) -> usize {
        self.chosen
    }

    /// Whether the current candidate differs from the chosen option.
    pub fn is_adjusted(&self) -> bool {
        self.options
            .get(self.chosen)
            .map_or(true, |original| !original.same_matchup(&self.current))
    }

    /// Tags of groups split by manual swaps.
    pub fn broken_blocks(&self) -> Vec<&str> {
        self.roster.broken_blocks(&self.current)
    }

    /// Exchanges a side-A player with a side-B player.
    ///
    /// On error the selection is unchanged.
    pub fn swap(&mut self, from_a: &str, from_b: &str) -> Result<&Candidate> {
        self.current = swap_players(&self.roster, &self.current, from_a, from_b)?;
        Ok(&self.current)
    }

    /// Switches to another option, dropping any adjustments.
    ///
    /// On error the selection is unchanged.
    pub fn reselect(&mut self, index: usize) -> Result<&Candidate> {
        let candidate = self
            .options
            .get(index)
            .ok_or(MatchmakingError::OptionOutOfRange {
                index,
                len: self.options.len(),
            })?;
        self.current = candidate.clone();
        self.chosen = index;
        Ok(&self.current)
    }

    /// Returns to browsing options.
    pub fn back(self) -> Enumerated {
        Enumerated {
            roster: self.roster,
            config: self.config,
            options: self.options,
        }
    }

    /// Confirms the current candidate. Terminal.
    pub fn confirm(self) -> Confirmation {
        debug!(diff = self.current.diff, adjusted = self.is_adjusted(), "confirmed");
        self.current.to_confirmation()
    }

    /// Confirms and records who generated the teams.
    pub fn confirm_by(self, operator: impl Into<String>) -> Confirmation {
        self.confirm().with_generated_by(operator)
    }
}
