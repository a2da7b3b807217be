//! Ranking of café cards by a single optional criterion.

use std::fmt;
use std::str::FromStr;

use crate::cafe::Cafe;

/// The criterion a result list can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Best seating first.
    Seating,
    /// Most outlets first.
    Outlets,
    /// Quietest first (ascending noise).
    Noise,
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBy::Seating => write!(f, "seating"),
            RankBy::Outlets => write!(f, "outlets"),
            RankBy::Noise => write!(f, "noise"),
        }
    }
}

impl FromStr for RankBy {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seating" => Ok(RankBy::Seating),
            "outlets" => Ok(RankBy::Outlets),
            "noise" => Ok(RankBy::Noise),
            other => Err(UnknownCriterion(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ranking criterion: {0}")]
pub struct UnknownCriterion(pub String);

/// Produces a new ordering of `cafes` for the given criterion.
///
/// Seating and outlets rank descending, noise ranks ascending (quietest
/// first); `None` preserves the fetch order. The sort is stable and the
/// input slice is never mutated, so ranking twice with the same criterion
/// yields the same order.
#[must_use]
pub fn rank_cafes(cafes: &[Cafe], criterion: Option<RankBy>) -> Vec<Cafe> {
    let mut ranked = cafes.to_vec();
    match criterion {
        Some(RankBy::Seating) => ranked.sort_by(|a, b| b.seating.cmp(&a.seating)),
        Some(RankBy::Outlets) => ranked.sort_by(|a, b| b.outlets.cmp(&a.outlets)),
        Some(RankBy::Noise) => ranked.sort_by(|a, b| a.noise.cmp(&b.noise)),
        None => {}
    }
    ranked
}

/// Applies the select-again-to-clear rule: picking the active criterion a
/// second time clears it, picking anything else activates it.
#[must_use]
pub fn toggle(active: Option<RankBy>, selected: RankBy) -> Option<RankBy> {
    if active == Some(selected) {
        None
    } else {
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Score;

    fn cafe(id: usize, seating: u8, outlets: u8, noise: u8) -> Cafe {
        Cafe {
            id,
            name: format!("cafe-{id}"),
            address: None,
            rating: 4.0,
            seating: Score::new(seating),
            outlets: Score::new(outlets),
            noise: Score::new(noise),
            photo_url: crate::cafe::PLACEHOLDER_PHOTO.to_string(),
        }
    }

    fn ids(cafes: &[Cafe]) -> Vec<usize> {
        cafes.iter().map(|c| c.id).collect()
    }

    #[test]
    fn seating_ranks_descending_and_stable() {
        let cafes = vec![cafe(1, 3, 1, 1), cafe(2, 5, 1, 1), cafe(3, 3, 1, 1)];
        let ranked = rank_cafes(&cafes, Some(RankBy::Seating));
        // Cafés 1 and 3 tie on seating, so fetch order decides between them.
        assert_eq!(ids(&ranked), vec![2, 1, 3]);
    }

    #[test]
    fn outlets_ranks_descending() {
        let cafes = vec![cafe(1, 1, 2, 1), cafe(2, 1, 4, 1), cafe(3, 1, 3, 1)];
        let ranked = rank_cafes(&cafes, Some(RankBy::Outlets));
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn noise_ranks_ascending_quietest_first() {
        let cafes = vec![cafe(1, 1, 1, 4), cafe(2, 1, 1, 1), cafe(3, 1, 1, 2)];
        let ranked = rank_cafes(&cafes, Some(RankBy::Noise));
        assert_eq!(ids(&ranked), vec![2, 3, 1]);
    }

    #[test]
    fn no_criterion_preserves_fetch_order() {
        let cafes = vec![cafe(1, 1, 5, 3), cafe(2, 5, 1, 1), cafe(3, 3, 3, 5)];
        assert_eq!(ids(&rank_cafes(&cafes, None)), vec![1, 2, 3]);
    }

    #[test]
    fn ranking_does_not_mutate_input_and_is_idempotent() {
        let cafes = vec![cafe(1, 1, 1, 1), cafe(2, 5, 5, 5), cafe(3, 3, 3, 3)];
        let once = rank_cafes(&cafes, Some(RankBy::Seating));
        // Source order untouched.
        assert_eq!(ids(&cafes), vec![1, 2, 3]);
        let twice = rank_cafes(&once, Some(RankBy::Seating));
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn toggle_clears_active_criterion() {
        assert_eq!(toggle(Some(RankBy::Seating), RankBy::Seating), None);
    }

    #[test]
    fn toggle_switches_to_new_criterion() {
        assert_eq!(
            toggle(Some(RankBy::Seating), RankBy::Noise),
            Some(RankBy::Noise)
        );
        assert_eq!(toggle(None, RankBy::Outlets), Some(RankBy::Outlets));
    }

    #[test]
    fn criterion_round_trips_through_strings() {
        for criterion in [RankBy::Seating, RankBy::Outlets, RankBy::Noise] {
            let parsed: RankBy = criterion.to_string().parse().expect("round trip");
            assert_eq!(parsed, criterion);
        }
        assert!("loudness".parse::<RankBy>().is_err());
    }
}
