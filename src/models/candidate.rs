//! Candidate (assignment) and confirmation models.
//!
//! A candidate is one proposed 5-vs-5 split of the roster. The confirmation
//! is the payload handed to the external persistence collaborator once the
//! operator accepts a candidate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two teams of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First team ("Team 1").
    A,
    /// Second team ("Team 2").
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A proposed split of the roster into two sides of five.
///
/// `diff` is always `|rating_a - rating_b|`, where both totals are summed
/// from raw per-player ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Player names on side A.
    pub side_a: Vec<String>,
    /// Player names on side B.
    pub side_b: Vec<String>,
    /// Total rating of side A.
    pub rating_a: f64,
    /// Total rating of side B.
    pub rating_b: f64,
    /// Absolute rating difference between the sides.
    pub diff: f64,
}

impl Candidate {
    /// Creates a candidate from both sides and their rating totals.
    pub fn new(side_a: Vec<String>, side_b: Vec<String>, rating_a: f64, rating_b: f64) -> Self {
        Self {
            side_a,
            side_b,
            rating_a,
            rating_b,
            diff: (rating_a - rating_b).abs(),
        }
    }

    /// Names on the given side.
    pub fn side(&self, side: Side) -> &[String] {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }

    /// Rating total of the given side.
    pub fn rating(&self, side: Side) -> f64 {
        match side {
            Side::A => self.rating_a,
            Side::B => self.rating_b,
        }
    }

    /// Which side a player is on, if any.
    pub fn side_of(&self, name: &str) -> Option<Side> {
        if self.side_a.iter().any(|n| n == name) {
            Some(Side::A)
        } else if self.side_b.iter().any(|n| n == name) {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Whether two candidates describe the same matchup.
    ///
    /// Ignores order within a side and which side is called A.
    pub fn same_matchup(&self, other: &Candidate) -> bool {
        self.canonical_key() == other.canonical_key()
    }

    /// Builds the confirmation payload for this candidate.
    pub fn to_confirmation(&self) -> Confirmation {
        Confirmation {
            side_a: self.side_a.clone(),
            side_b: self.side_b.clone(),
            rating_a: self.rating_a,
            rating_b: self.rating_b,
            diff: self.diff,
            generated_by: None,
        }
    }
}

/// Final, operator-approved assignment for the confirmation sink.
///
/// The sink persists side assignments and any audit metadata; the engine
/// only transports `generated_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Player names on side A.
    pub side_a: Vec<String>,
    /// Player names on side B.
    pub side_b: Vec<String>,
    /// Total rating of side A.
    pub rating_a: f64,
    /// Total rating of side B.
    pub rating_b: f64,
    /// Absolute rating difference.
    pub diff: f64,
    /// Operator who generated the teams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_by: Option<String>,
}

impl Confirmation {
    /// Records who generated the teams.
    pub fn with_generated_by(mut self, operator: impl Into<String>) -> Self {
        self.generated_by = Some(operator.into());
        self
    }
}
