//! Option set model.
//!
//! The ranked, deduplicated, capped list of candidate splits shown to the
//! operator. Built fresh per run and never modified afterwards.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::Candidate;

/// Ranked candidates, ascending by `diff`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionSet {
    candidates: Vec<Candidate>,
    distinct_total: usize,
    within_preference: bool,
}

impl OptionSet {
    /// Wraps ranked candidates.
    ///
    /// * `distinct_total` - number of distinct matchups before the cap.
    /// * `within_preference` - whether every returned option meets the
    ///   preferred diff window.
    pub(crate) fn new(
        candidates: Vec<Candidate>,
        distinct_total: usize,
        within_preference: bool,
    ) -> Self {
        Self {
            candidates,
            distinct_total,
            within_preference,
        }
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether there are no options.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Whether no 5/5 split exists for the roster's groupings.
    ///
    /// The operator should change the groups rather than retry.
    pub fn is_infeasible(&self) -> bool {
        self.distinct_total == 0
    }

    /// Distinct matchups found before capping.
    pub fn distinct_total(&self) -> usize {
        self.distinct_total
    }

    /// Whether the options came from the preferred diff window.
    pub fn within_preference(&self) -> bool {
        self.within_preference
    }

    /// The option at `index`.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// The most balanced option.
    pub fn best(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Options as a slice.
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Iterates over the options in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

impl Index<usize> for OptionSet {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Candidate {
        &self.candidates[index]
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
