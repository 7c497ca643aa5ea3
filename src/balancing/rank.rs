//! Ranking and selection of distinct candidates.
//!
//! # Ordering
//! Ascending by `diff` (IEEE total order), ties broken by the canonical
//! matchup key so identical input always ranks identically.
//!
//! # Selection
//! If at least `max_options` candidates fall within `preferred_max_diff`,
//! the best `max_options` of those are returned. Otherwise the best
//! `max_options` overall, so a skewed roster still gets a full list.

use tracing::{debug, warn};

use crate::config::MatchmakingConfig;
use crate::models::{Candidate, OptionSet};

/// Sorts candidates ascending by `diff`, deterministically.
pub fn rank_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut keyed: Vec<_> = candidates
        .into_iter()
        .map(|c| (c.canonical_key(), c))
        .collect();
    keyed.sort_by(|(ka, a), (kb, b)| a.diff.total_cmp(&b.diff).then_with(|| ka.cmp(kb)));
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Ranks distinct candidates and caps them into an option set.
///
/// Expects candidates already deduplicated.
pub fn select_options(candidates: Vec<Candidate>, config: &MatchmakingConfig) -> OptionSet {
    let distinct_total = candidates.len();
    let mut ranked = rank_candidates(candidates);

    // Sorted, so the preferred window is a prefix.
    let within = ranked
        .iter()
        .take_while(|c| c.diff <= config.preferred_max_diff)
        .count();

    ranked.truncate(config.max_options);
    let within_preference = ranked.len() <= within;

    if within >= config.max_options {
        debug!(within, max_options = config.max_options, "preferred window filled");
    } else if !within_preference {
        warn!(
            within,
            max_options = config.max_options,
            preferred_max_diff = config.preferred_max_diff,
            "too few balanced matchups, falling back to best overall"
        );
    }

    debug!(
        distinct = distinct_total,
        selected = ranked.len(),
        best_diff = ?ranked.first().map(|c| c.diff),
        "selected options"
    );

    OptionSet::new(ranked, distinct_total, within_preference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(tag: &str, rating_a: f64, rating_b: f64) -> Candidate {
        let a = (0..5).map(|i| format!("{tag}a{i}")).collect();
        let b = (0..5).map(|i| format!("{tag}b{i}")).collect();
        Candidate::new(a, b, rating_a, rating_b)
    }

    #[test]
    fn test_rank_ascending() {
        let ranked = rank_candidates(vec![
            candidate("x", 5400.0, 5000.0),
            candidate("y", 5000.0, 5000.0),
            candidate("z", 5000.0, 5100.0),
        ]);
        let diffs: Vec<f64> = ranked.iter().map(|c| c.diff).collect();
        assert_eq!(diffs, vec![0.0, 100.0, 400.0]);
    }

    #[test]
    fn test_rank_ties_are_deterministic() {
        let forward = rank_candidates(vec![candidate("b", 5000.0, 5000.0), candidate("a", 5000.0, 5000.0)]);
        let backward = rank_candidates(vec![candidate("a", 5000.0, 5000.0), candidate("b", 5000.0, 5000.0)]);
        assert_eq!(forward, backward);
        assert_eq!(forward[0].side_a[0], "aa0");
    }

    #[test]
    fn test_select_within_preference() {
        let candidates: Vec<Candidate> = (0..20)
            .map(|i| candidate(&format!("c{i:02}"), 5000.0 + i as f64 * 10.0, 5000.0))
            .collect();
        let config = MatchmakingConfig::default().with_max_options(12).with_preferred_max_diff(350.0);

        let set = select_options(candidates, &config);
        assert_eq!(set.len(), 12);
        assert_eq!(set.distinct_total(), 20);
        assert!(set.within_preference());
        assert!(set.iter().all(|c| c.diff <= 350.0));
    }

    #[test]
    fn test_select_falls_back_to_best_overall() {
        // Only two candidates within 350; the rest are far apart.
        let mut candidates = vec![candidate("good1", 5100.0, 5000.0), candidate("good2", 5200.0, 5000.0)];
        for i in 0..10 {
            candidates.push(candidate(&format!("bad{i}"), 6000.0 + i as f64, 5000.0));
        }
        let config = MatchmakingConfig::default().with_max_options(5);

        let set = select_options(candidates, &config);
        assert_eq!(set.len(), 5);
        assert!(!set.within_preference());
        assert!((set[0].diff - 100.0).abs() < 1e-10);
        assert!((set[1].diff - 200.0).abs() < 1e-10);
        assert!(set[2].diff > 350.0);
    }

    #[test]
    fn test_select_fewer_than_cap() {
        let set = select_options(
            vec![candidate("a", 5000.0, 5000.0), candidate("b", 5050.0, 5000.0)],
            &MatchmakingConfig::default(),
        );
        assert_eq!(set.len(), 2);
        assert!(set.within_preference());
    }

    #[test]
    fn test_select_empty_is_infeasible() {
        let set = select_options(Vec::new(), &MatchmakingConfig::default());
        assert!(set.is_empty());
        assert!(set.is_infeasible());
    }
}
