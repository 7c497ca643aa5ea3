//! Matchmaking parameters.
//!
//! Defaults reproduce the league tool: up to 12 options, a preferred
//! imbalance of at most 350 rating points, reviewed three at a time.

use serde::{Deserialize, Serialize};

use crate::error::{MatchmakingError, Result};

/// Default cap on returned options.
pub const DEFAULT_MAX_OPTIONS: usize = 12;

/// Default preferred maximum rating difference.
pub const DEFAULT_PREFERRED_MAX_DIFF: f64 = 350.0;

/// Default number of options per page.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Ranking, selection and paging parameters.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingConfig {
    /// Maximum number of options returned.
    pub max_options: usize,
    /// Options with `diff` at or below this are preferred.
    pub preferred_max_diff: f64,
    /// Options shown per page.
    pub page_size: usize,
}

impl Default for MatchmakingConfig {
    fn default() -> Self {
        Self {
            max_options: DEFAULT_MAX_OPTIONS,
            preferred_max_diff: DEFAULT_PREFERRED_MAX_DIFF,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl MatchmakingConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the option cap.
    pub fn with_max_options(mut self, max_options: usize) -> Self {
        self.max_options = max_options;
        self
    }

    /// Sets the preferred diff window.
    pub fn with_preferred_max_diff(mut self, preferred_max_diff: f64) -> Self {
        self.preferred_max_diff = preferred_max_diff;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_options == 0 {
            return Err(MatchmakingError::InvalidConfig {
                reason: "max_options must be at least 1".into(),
            });
        }
        if self.page_size == 0 {
            return Err(MatchmakingError::InvalidConfig {
                reason: "page_size must be at least 1".into(),
            });
        }
        if !self.preferred_max_diff.is_finite() || self.preferred_max_diff < 0.0 {
            return Err(MatchmakingError::InvalidConfig {
                reason: format!(
                    "preferred_max_diff must be a non-negative number, got {}",
                    self.preferred_max_diff
                ),
            });
        }
        Ok(())
    }
}
