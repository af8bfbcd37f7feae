//! Compatibility scoring and ranking of candidate rides.
//!
//! Each bonus is independent and additive: no bonus depends on another
//! having fired, and an absent field on either side contributes zero, never
//! a penalty. Partial profiles are the common case, not an error.

use crate::profiles::{non_empty, RiderPreferences};
use crate::rides::Ride;

use super::types::{MatchWeights, ScoredRide};

/// Compatibility score between a rider's preferences and one candidate ride.
pub fn score_ride(prefs: &RiderPreferences, ride: &Ride, weights: &MatchWeights) -> u32 {
    let mut score = 0;

    if let (Some(mine), Some(theirs)) = (non_empty(&prefs.university), non_empty(&ride.driver.university)) {
        if mine == theirs {
            score += weights.university_bonus;
        }
    }

    if let (Some(mine), Some(theirs)) = (prefs.music_preference, ride.driver.music_preference) {
        if mine == theirs {
            score += weights.music_bonus;
        }
    }

    if let (Some(mine), Some(theirs)) = (prefs.conversation_level, ride.driver.conversation_level) {
        if mine == theirs {
            score += weights.conversation_bonus;
        }
    }

    if let Some(preferred) = prefs.preferred_departure_hour {
        let offset = (i16::from(ride.departure_hour()) - i16::from(preferred)).abs();
        if offset <= i16::from(weights.departure_window_hours) {
            score += weights.departure_bonus;
        }
    }

    if prefs.same_gender_only {
        if let (Some(mine), Some(theirs)) = (non_empty(&prefs.gender), non_empty(&ride.driver.gender)) {
            if mine == theirs {
                score += weights.gender_bonus;
            }
        }
    }

    score
}

/// Score candidates, drop those at or below the threshold and sort the rest
/// best-first.
///
/// Ties order by soonest departure, then by ride id, so equal-score results
/// are deterministic regardless of input order. Rides below the threshold
/// are dropped entirely, not merely deprioritized.
pub fn rank_rides(
    prefs: &RiderPreferences,
    rides: Vec<Ride>,
    weights: &MatchWeights,
) -> Vec<ScoredRide> {
    let candidates = rides.len();
    let mut scored: Vec<ScoredRide> = rides
        .into_iter()
        .map(|ride| ScoredRide {
            compatibility_score: score_ride(prefs, &ride, weights),
            ride,
        })
        .filter(|entry| entry.compatibility_score > weights.min_score)
        .collect();

    scored.sort_by(|a, b| {
        b.compatibility_score
            .cmp(&a.compatibility_score)
            .then_with(|| a.ride.departure_time.cmp(&b.ride.departure_time))
            .then_with(|| a.ride.id.cmp(&b.ride.id))
    });

    log::debug!(
        "ranked {kept} of {candidates} candidate rides above score {min}",
        kept = scored.len(),
        min = weights.min_score,
    );
    scored
}
