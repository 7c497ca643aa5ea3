//! Manual adjustment of a chosen split.
//!
//! The operator may exchange one player from side A with one from side B
//! before confirming. Each swap yields a new candidate; ratings and diff
//! are recomputed from the roster, never patched incrementally.

use tracing::{debug, warn};

use crate::error::{MatchmakingError, Result};
use crate::models::{Candidate, Roster, Side};

/// Exchanges `from_a` (on side A) with `from_b` (on side B).
///
/// Each player takes the other's slot, so side order is otherwise kept.
/// The input candidate is not modified.
///
/// A swap may separate a play-together group; that is allowed as an
/// operator override and reported by [`Roster::broken_blocks`].
///
/// # Errors
/// `PlayerNotInSide` if either name is not on the stated side;
/// `UnknownPlayer` if a name is missing from the roster.
pub fn swap_players(
    roster: &Roster,
    candidate: &Candidate,
    from_a: &str,
    from_b: &str,
) -> Result<Candidate> {
    let slot_a = position(candidate, Side::A, from_a)?;
    let slot_b = position(candidate, Side::B, from_b)?;

    let mut side_a = candidate.side_a.clone();
    let mut side_b = candidate.side_b.clone();
    std::mem::swap(&mut side_a[slot_a], &mut side_b[slot_b]);

    let rating_a = roster.side_rating(&side_a)?;
    let rating_b = roster.side_rating(&side_b)?;
    let adjusted = Candidate::new(side_a, side_b, rating_a, rating_b);

    let broken = roster.broken_blocks(&adjusted);
    if !broken.is_empty() {
        warn!(groups = ?broken, "manual swap separates a play-together group");
    }
    debug!(
        from_a,
        from_b,
        before = candidate.diff,
        after = adjusted.diff,
        "swapped players"
    );

    Ok(adjusted)
}

fn position(candidate: &Candidate, side: Side, name: &str) -> Result<usize> {
    candidate
        .side(side)
        .iter()
        .position(|n| n == name)
        .ok_or_else(|| MatchmakingError::PlayerNotInSide {
            player: name.to_string(),
            side,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, Player, SIDE_SIZE};
    use std::collections::HashSet;

    fn roster() -> Roster {
        let mut blocks = vec![Block::new(
            Some("duo".into()),
            vec![Player::new("1", "P1", 1500.0), Player::new("2", "P2", 1400.0)],
        )];
        for i in 3..=10 {
            blocks.push(Block::single(Player::new(i.to_string(), format!("P{i}"), 1000.0 + i as f64 * 10.0)));
        }
        Roster::new(blocks)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn base(r: &Roster) -> Candidate {
        r.candidate_from_sides(
            names(&["P1", "P2", "P3", "P4", "P5"]),
            names(&["P6", "P7", "P8", "P9", "P10"]),
        )
        .unwrap()
    }

    fn set(side: &[String]) -> HashSet<&str> {
        side.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_swap_recomputes_ratings() {
        let r = roster();
        let c = base(&r);
        // A: 1500 + 1400 + 1030 + 1040 + 1050 = 6020
        // B: 1060 + 1070 + 1080 + 1090 + 1100 = 5400
        assert!((c.diff - 620.0).abs() < 1e-10);

        let swapped = swap_players(&r, &c, "P3", "P10").unwrap();
        assert_eq!(swapped.side_a, names(&["P1", "P2", "P10", "P4", "P5"]));
        assert_eq!(swapped.side_b, names(&["P6", "P7", "P8", "P9", "P3"]));
        // A: 6020 - 1030 + 1100 = 6090, B: 5400 - 1100 + 1030 = 5330
        assert!((swapped.rating_a - 6090.0).abs() < 1e-10);
        assert!((swapped.rating_b - 5330.0).abs() < 1e-10);
        assert!((swapped.diff - 760.0).abs() < 1e-10);

        // Input untouched.
        assert_eq!(c.side_a, names(&["P1", "P2", "P3", "P4", "P5"]));
    }

    #[test]
    fn test_swap_preserves_sizes() {
        let r = roster();
        let swapped = swap_players(&r, &base(&r), "P4", "P7").unwrap();
        assert_eq!(swapped.side_a.len(), SIDE_SIZE);
        assert_eq!(swapped.side_b.len(), SIDE_SIZE);
        assert!(set(&swapped.side_a).is_disjoint(&set(&swapped.side_b)));
    }

    #[test]
    fn test_double_swap_restores() {
        let r = roster();
        let c = base(&r);
        let once = swap_players(&r, &c, "P5", "P8").unwrap();
        let twice = swap_players(&r, &once, "P8", "P5").unwrap();
        assert_eq!(set(&twice.side_a), set(&c.side_a));
        assert_eq!(set(&twice.side_b), set(&c.side_b));
        assert!((twice.diff - c.diff).abs() < 1e-10);
        assert_eq!(twice, c);
    }

    #[test]
    fn test_wrong_side_rejected() {
        let r = roster();
        let c = base(&r);
        assert_eq!(
            swap_players(&r, &c, "P7", "P8").unwrap_err(),
            MatchmakingError::PlayerNotInSide {
                player: "P7".into(),
                side: Side::A
            }
        );
        assert_eq!(
            swap_players(&r, &c, "P3", "P4").unwrap_err(),
            MatchmakingError::PlayerNotInSide {
                player: "P4".into(),
                side: Side::B
            }
        );
        assert!(matches!(
            swap_players(&r, &c, "Nobody", "P8"),
            Err(MatchmakingError::PlayerNotInSide { .. })
        ));
    }

    #[test]
    fn test_swap_can_split_group() {
        let r = roster();
        let swapped = swap_players(&r, &base(&r), "P1", "P6").unwrap();
        assert_eq!(r.broken_blocks(&swapped), vec!["duo"]);
    }
}
